pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not enough data: {reason}")]
    InsufficientData { reason: String },

    #[error("Your data contain a reflexive relationship on {key}. Try to use a chord diagram")]
    ReflexiveRelationship { key: String },

    #[error("Too many split terms: {count} (at most {max} are readable)")]
    TooManySplits { count: usize, max: usize },

    #[error("Radar diagrams require at least {min} axes, got {count}")]
    InsufficientAxes { count: usize, min: usize },

    #[error("Be careful to add Source before Destination: {message}")]
    OrderingError { message: String },

    // `source` is reserved by thiserror for the error chain.
    #[error("Negative link value {value} between {source_key} and {destination_key}")]
    NegativeValue {
        source_key: String,
        destination_key: String,
        value: f64,
    },

    #[error("Invalid metric value: {value}")]
    InvalidValue { value: f64 },

    #[error("Series payload JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn insufficient(reason: impl Into<String>) -> Self {
        Self::InsufficientData {
            reason: reason.into(),
        }
    }
}
