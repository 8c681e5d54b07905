#![forbid(unsafe_code)]

//! Headless layout for relation diagrams.
//!
//! Takes a decoded [`SeriesSet`] plus configuration and produces serializable geometry for chord,
//! network and radar diagrams. Painting is left to the caller.

pub mod chord;
pub mod model;
pub mod network;
pub mod palette;
mod path;
pub mod radar;

use crate::model::{LayoutDiagram, LayoutMeta, LayoutedDiagram};
use vislink_core::{DiagramKind, Key, SeriesSet, VislinkConfig};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] vislink_core::Error),
    #[error(transparent)]
    Layout(#[from] narwhal::Error),
    #[error("layout JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Default)]
pub struct LayoutOptions {
    pub config: VislinkConfig,
    /// Network nodes placed by hand before the solve; they stay where they are put.
    pub pinned: Vec<(Key, f64, f64)>,
}

impl LayoutOptions {
    pub fn with_config(config: VislinkConfig) -> Self {
        Self {
            config,
            pinned: Vec::new(),
        }
    }

    pub fn pin(mut self, name: impl Into<Key>, x: f64, y: f64) -> Self {
        self.pinned.push((name.into(), x, y));
        self
    }
}

fn layout_meta(kind: DiagramKind, input: &SeriesSet, options: &LayoutOptions) -> LayoutMeta {
    LayoutMeta {
        diagram_type: kind.as_str().to_string(),
        metric: input.meta.metric.clone(),
        effective_config: options.config.as_value().clone(),
    }
}

fn pinned_network(input: &SeriesSet, options: &LayoutOptions) -> Result<vislink_core::NetworkGraph> {
    let mut graph = vislink_core::network_from_series(input)?;
    for (name, x, y) in &options.pinned {
        if !graph.pin(name, *x, *y) {
            tracing::warn!(
                node = %name,
                x = *x,
                y = *y,
                "ignoring pin: unknown node or non-finite coordinates"
            );
        }
    }
    Ok(graph)
}

pub fn layout_series(
    kind: DiagramKind,
    input: &SeriesSet,
    options: &LayoutOptions,
) -> Result<LayoutedDiagram> {
    let cfg = &options.config;
    let layout = match kind {
        DiagramKind::Chord => {
            let matrix = vislink_core::chord_from_series(input)?;
            LayoutDiagram::ChordDiagram(chord::layout_chord_diagram(&matrix, &cfg.chord()))
        }
        DiagramKind::Network => {
            let graph = pinned_network(input, options)?;
            LayoutDiagram::NetworkDiagram(network::layout_network_diagram(
                graph,
                &cfg.network(),
            )?)
        }
        DiagramKind::Radar => {
            let model = vislink_core::radar_from_series(input, &cfg.radar())?;
            LayoutDiagram::RadarDiagram(radar::layout_radar_diagram(
                &model,
                &radar::RadarFrame::from_config(cfg),
            ))
        }
    };

    Ok(LayoutedDiagram {
        meta: layout_meta(kind, input, options),
        layout,
    })
}

/// [`layout_series`] with the network force solve moved to a background worker.
pub async fn layout_series_async(
    kind: DiagramKind,
    input: &SeriesSet,
    options: &LayoutOptions,
) -> Result<LayoutedDiagram> {
    if kind != DiagramKind::Network {
        return layout_series(kind, input, options);
    }
    let opts = options.config.network();
    let graph = pinned_network(input, options)?;
    let solved = network::solve_network_in_background(graph, &opts).await?;
    Ok(LayoutedDiagram {
        meta: layout_meta(kind, input, options),
        layout: LayoutDiagram::NetworkDiagram(network::network_diagram(&solved, &opts)),
    })
}

/// Serializes a layout as JSON, optionally pretty-printed.
pub fn to_json(diagram: &LayoutedDiagram, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(diagram)?
    } else {
        serde_json::to_string(diagram)?
    })
}
