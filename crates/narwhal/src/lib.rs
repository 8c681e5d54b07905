#![forbid(unsafe_code)]

//! Headless force-directed graph layout.
//!
//! `narwhal` is used by `vislink-render` to place network diagram nodes. It owns its own graph
//! types so it can be driven without the vislink input model.

pub mod algo;
pub mod error;
pub mod graph;

pub use algo::ForceOptions;
pub use error::{Error, Result};
pub use graph::{Edge, Graph, LayoutResult, Node, Point};

/// Solves node positions for `graph`.
///
/// The graph is moved into the solver and handed back inside the [`LayoutResult`].
pub fn layout(graph: Graph, opts: &ForceOptions) -> Result<LayoutResult> {
    algo::force::layout(graph, opts)
}

/// Runs [`layout`] on a dedicated worker thread.
///
/// The returned future resolves once with the final result. It does not depend on any async
/// runtime; dropping it lets the worker finish and discards the result.
pub fn layout_in_background(
    graph: Graph,
    opts: ForceOptions,
) -> impl std::future::Future<Output = Result<LayoutResult>> + Send + 'static {
    let (tx, rx) = futures::channel::oneshot::channel();
    let spawned = std::thread::Builder::new()
        .name("narwhal-layout".to_string())
        .spawn(move || {
            let _ = tx.send(layout(graph, &opts));
        });
    if let Err(err) = spawned {
        tracing::warn!(error = %err, "failed to spawn layout worker");
    }
    async move { rx.await.unwrap_or(Err(Error::Canceled)) }
}
