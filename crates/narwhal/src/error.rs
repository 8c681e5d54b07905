#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("edge {edge} references a node outside 0..{node_count}")]
    MissingEndpoint { edge: usize, node_count: usize },

    #[error("node {node} has a non-finite starting position")]
    NonFinitePosition { node: usize },

    #[error("invalid force options: {message}")]
    InvalidOptions { message: String },

    #[error("background layout was dropped before completion")]
    Canceled,
}

pub type Result<T> = std::result::Result<T, Error>;
