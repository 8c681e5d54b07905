#![forbid(unsafe_code)]

//! `vislink` turns relation aggregation results into chord, network and radar diagram models.
//!
//! # Features
//!
//! - `render`: enable layout (`vislink::render`): chord arcs and ribbons, force-directed network
//!   positions, radar geometry

pub use vislink_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use narwhal::{ForceOptions, layout as force_layout};
    pub use vislink_render::model::{LayoutDiagram, LayoutedDiagram};
    pub use vislink_render::{LayoutOptions, layout_series, palette, to_json};

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Input(#[from] vislink_core::Error),
        #[error(transparent)]
        Render(#[from] vislink_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Decodes a JSON series payload and lays it out (executor-free).
    pub fn layout_json_sync(
        kind: vislink_core::DiagramKind,
        json: &str,
        options: &LayoutOptions,
    ) -> Result<LayoutedDiagram> {
        let input = vislink_core::SeriesSet::from_json_str(json)?;
        Ok(vislink_render::layout_series(kind, &input, options)?)
    }

    /// Like [`layout_json_sync`], but the network force solve runs on a background worker.
    pub async fn layout_json(
        kind: vislink_core::DiagramKind,
        json: &str,
        options: &LayoutOptions,
    ) -> Result<LayoutedDiagram> {
        let input = vislink_core::SeriesSet::from_json_str(json)?;
        Ok(vislink_render::layout_series_async(kind, &input, options).await?)
    }
}
