//! Font Atlas Bootstrap: one-time upload of the default glyph atlas.
//!
//! The widget library's atlas metadata (`FontAtlas::tex_id`) is the
//! authoritative "already resident" flag, so bootstrapping twice in one
//! process is a no-op. Only the state that performed the upload owns the
//! texture and releases it on shutdown.

use imgui::{Context, TextureId};

use crate::backend::{Backend, BackendResult, RawTextureId};

/// Atlas lifecycle state: `NotLoaded` → bootstrap → `Loaded` → shutdown →
/// `NotLoaded`. Owns the host texture handle between the two transitions.
#[derive(Debug, Default)]
pub struct AtlasState {
    texture: Option<RawTextureId>,
}

impl AtlasState {
    /// Creates an unloaded atlas state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if this state owns an uploaded atlas texture.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    /// Uploads the default font atlas, unless the widget library already
    /// references one.
    ///
    /// The rasterized RGBA32 pixels are copied into an owned buffer whose
    /// ownership passes to the backend's upload call; the resulting handle
    /// is recorded into the atlas metadata so draw commands referencing the
    /// font texture resolve from then on.
    pub fn bootstrap<B: Backend>(
        &mut self,
        ctx: &mut Context,
        backend: &mut B,
    ) -> BackendResult<()> {
        let fonts = ctx.fonts();
        if fonts.tex_id.id() != 0 {
            tracing::debug!("font atlas already resident, skipping upload");
            return Ok(());
        }

        let (width, height, pixels) = {
            let texture = fonts.build_rgba32_texture();
            (texture.width, texture.height, texture.data.to_vec())
        };

        let id = backend.upload_texture_rgba32(width, height, pixels)?;
        fonts.tex_id = TextureId::new(id as usize);
        self.texture = Some(id);
        tracing::debug!(width, height, texture = id, "font atlas uploaded");
        Ok(())
    }

    /// Releases the atlas texture if this state uploaded one, and clears
    /// the widget library's handle so a later bootstrap starts over.
    pub fn shutdown<B: Backend>(&mut self, ctx: &mut Context, backend: &mut B) {
        if let Some(id) = self.texture.take() {
            backend.release_texture(id);
            ctx.fonts().tex_id = TextureId::new(0);
            tracing::debug!(texture = id, "font atlas released");
        }
    }
}
