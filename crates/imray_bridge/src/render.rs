//! Render Adapter: draw-list playback onto the host backend.
//!
//! Walks the widget library's draw data in order: per draw list, per
//! sub-command, activate the sub-command's scissor rectangle, bind its
//! texture, and rasterize its triangles. Backface culling is off for the
//! whole pass because UI geometry is not consistently wound.

use imgui::{DrawCmd, DrawData, DrawIdx, DrawVert};

use crate::backend::{Backend, RawTextureId, ScissorRect, TriangleVertex};

/// Plays back one frame of draw data.
///
/// Sub-commands share their draw list's vertex and index buffers; each one
/// consumes `count` indices starting at the running cursor accumulated from
/// the sub-commands before it.
pub fn render_draw_data<B: Backend>(draw_data: &DrawData, backend: &mut B) {
    backend.set_backface_culling(false);

    for draw_list in draw_data.draw_lists() {
        let vtx = draw_list.vtx_buffer();
        let idx = draw_list.idx_buffer();
        let mut idx_cursor = 0usize;

        for cmd in draw_list.commands() {
            match cmd {
                DrawCmd::Elements { count, cmd_params } => {
                    backend.begin_scissor(clip_rect(cmd_params.clip_rect, draw_data.display_pos));
                    let texture = cmd_params.texture_id.id() as RawTextureId;
                    draw_triangles(backend, vtx, idx, idx_cursor, count, texture);
                    idx_cursor += count;
                }
                // Neither is produced by default widget rendering; both
                // consume no indices.
                DrawCmd::ResetRenderState | DrawCmd::RawCallback { .. } => {}
            }
        }
    }

    backend.end_scissor();
    backend.set_backface_culling(true);
}

/// Converts an absolute clip rectangle to backend screen coordinates by
/// subtracting the draw data's global display offset.
fn clip_rect(clip: [f32; 4], offset: [f32; 2]) -> ScissorRect {
    let x = clip[0] - offset[0];
    let y = clip[1] - offset[1];
    ScissorRect {
        x: x as i32,
        y: y as i32,
        width: (clip[2] - offset[0] - x) as i32,
        height: (clip[3] - offset[1] - y) as i32,
    }
}

/// Rasterizes the complete triangles in `idx[start..start + count]`.
///
/// Vertex order is deliberately reversed (0, 2, 1) relative to the widget
/// library's native winding, to match the host's culling convention. A
/// count that is not a multiple of three leaves the remainder indices
/// unconsumed; a zero count issues no calls at all.
pub fn draw_triangles<B: Backend>(
    backend: &mut B,
    vtx: &[DrawVert],
    idx: &[DrawIdx],
    start: usize,
    count: usize,
    texture: RawTextureId,
) {
    if count == 0 {
        return;
    }

    let mut consumed = 0;
    while consumed + 3 <= count {
        let corner = |slot: usize| {
            let vertex = vtx[idx[start + consumed + slot] as usize];
            TriangleVertex {
                pos: vertex.pos,
                uv: vertex.uv,
                color: vertex.col,
            }
        };
        backend.draw_triangle(texture, &[corner(0), corner(2), corner(1)]);
        consumed += 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;

    fn vert(x: f32, color: [u8; 4]) -> DrawVert {
        DrawVert {
            pos: [x, 0.0],
            uv: [0.0, 0.0],
            col: color,
        }
    }

    fn quad_vertices(n: usize) -> Vec<DrawVert> {
        (0..n).map(|i| vert(i as f32, [255, 0, 0, 255])).collect()
    }

    #[test]
    fn test_zero_count_issues_no_calls() {
        let mut mock = MockBackend::new();
        let vtx = quad_vertices(3);
        let idx: Vec<DrawIdx> = vec![0, 1, 2];
        draw_triangles(&mut mock, &vtx, &idx, 0, 0, 7);
        assert!(mock.calls.is_empty());
    }

    #[test]
    fn test_incomplete_triangles_are_truncated() {
        let mut mock = MockBackend::new();
        let vtx = quad_vertices(8);
        let idx: Vec<DrawIdx> = vec![0, 1, 2, 3, 4, 5, 6, 7];
        // 8 indices hold two complete triangles; the last two are ignored.
        draw_triangles(&mut mock, &vtx, &idx, 0, 8, 7);
        assert_eq!(mock.triangles().len(), 2);
    }

    #[test]
    fn test_winding_is_reversed() {
        let mut mock = MockBackend::new();
        let vtx = vec![
            vert(0.0, [1, 0, 0, 255]),
            vert(1.0, [2, 0, 0, 255]),
            vert(2.0, [3, 0, 0, 255]),
        ];
        let idx: Vec<DrawIdx> = vec![0, 1, 2];
        draw_triangles(&mut mock, &vtx, &idx, 0, 3, 7);

        let (texture, corners) = mock.triangles()[0];
        assert_eq!(texture, 7);
        // Emission order 0, 2, 1.
        assert_eq!(corners[0].pos[0], 0.0);
        assert_eq!(corners[1].pos[0], 2.0);
        assert_eq!(corners[2].pos[0], 1.0);
    }

    #[test]
    fn test_second_sub_command_starts_at_running_cursor() {
        let mut mock = MockBackend::new();
        let vtx = quad_vertices(9);
        let idx: Vec<DrawIdx> = vec![0, 1, 2, 3, 4, 5, 6, 7, 8];

        // First sub-command covers indices [0, 6), second covers [6, 9).
        draw_triangles(&mut mock, &vtx, &idx, 0, 6, 7);
        draw_triangles(&mut mock, &vtx, &idx, 6, 3, 7);

        let triangles = mock.triangles();
        assert_eq!(triangles.len(), 3);
        // The third triangle must come from indices 6..9, not start over.
        let (_, corners) = triangles[2];
        assert_eq!(corners[0].pos[0], 6.0);
        assert_eq!(corners[1].pos[0], 8.0);
        assert_eq!(corners[2].pos[0], 7.0);
    }

    #[test]
    fn test_color_bytes_pass_through_in_rgba_order() {
        let mut mock = MockBackend::new();
        let vtx = vec![
            vert(0.0, [10, 20, 30, 40]),
            vert(1.0, [10, 20, 30, 40]),
            vert(2.0, [10, 20, 30, 40]),
        ];
        let idx: Vec<DrawIdx> = vec![0, 1, 2];
        draw_triangles(&mut mock, &vtx, &idx, 0, 3, 1);

        let (_, corners) = mock.triangles()[0];
        assert_eq!(corners[0].color, [10, 20, 30, 40]);
    }

    #[test]
    fn test_clip_rect_subtracts_display_offset() {
        let rect = clip_rect([110.0, 220.0, 310.0, 420.0], [100.0, 200.0]);
        assert_eq!(
            rect,
            ScissorRect {
                x: 10,
                y: 20,
                width: 200,
                height: 200
            }
        );
    }
}
