use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
    #[error("Failed to read description for track '{track}': {source}")]
    Description {
        track: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}
