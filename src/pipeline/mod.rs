//! Program-book pipeline orchestration.
//!
//! - [`PipelineBuilder`]: Fluent builder for constructing a [`ProgramBook`]
//! - [`ProgramBook`]: Normalizes, lays out, renders and writes a schedule
//!
//! # Example
//!
//! ```ignore
//! use progbook::PipelineBuilder;
//!
//! let book = PipelineBuilder::new()
//!     .with_config_file("progbook.json")?
//!     .with_parallel(false)
//!     .build()?;
//!
//! book.generate_from_file("xml")?;
//! ```

mod builder;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use orchestrator::{BookOutput, ProgramBook};
