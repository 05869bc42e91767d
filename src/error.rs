use progbook_executor::ExecutorError;
use progbook_layout::LayoutError;
use progbook_render::RenderError;
use progbook_schedule::ScheduleError;
use thiserror::Error;

/// A comprehensive error type for the whole program-book pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Reading the schedule failed: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Executor failed: {0}")]
    Executor(#[from] ExecutorError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration is invalid: {0}")]
    Config(String),
}
