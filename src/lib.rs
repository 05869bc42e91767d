//! progbook turns a conference schedule into the LaTeX fragments of a printed
//! program book: per-day timetable grids, room overviews and per-kind chapters.

pub mod config;
pub mod descriptions;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use config::{BookConfig, OutputConfig};
pub use descriptions::FsDescriptions;
pub use error::PipelineError;
pub use pipeline::{BookOutput, PipelineBuilder, ProgramBook};
pub use writer::{FragmentWriter, WriteOutcome};

pub use progbook_layout as layout;
pub use progbook_render as render;
pub use progbook_schedule as schedule;
pub use progbook_types as types;
