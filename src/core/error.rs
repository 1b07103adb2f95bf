//! Error types for the logging pipeline

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An appender could not open its backing resource at construction
    #[error("cannot open '{path}' for append: {source}")]
    OpenAppender {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The process-wide logger was installed twice
    #[error("global logger already initialized")]
    GlobalAlreadyInitialized,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl PipelineError {
    /// Create a construction error for an appender backing path
    pub fn open_appender(path: impl Into<String>, source: std::io::Error) -> Self {
        PipelineError::OpenAppender {
            path: path.into(),
            source,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PipelineError::Other(msg.into())
    }
}

/// Extract a readable message from a caught panic payload.
pub(crate) fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
