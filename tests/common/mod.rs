pub mod fixtures;

use progbook::render::NoDescriptions;
use progbook::{PipelineBuilder, ProgramBook};
use std::fs;
use std::path::Path;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A sequential book writing into `dir`, without track descriptions.
pub fn book_in(dir: &Path) -> ProgramBook {
    builder_in(dir).build().expect("default configuration builds")
}

pub fn builder_in(dir: &Path) -> PipelineBuilder {
    PipelineBuilder::new()
        .with_output_dir(dir)
        .with_parallel(false)
        .with_descriptions(Box::new(NoDescriptions))
}

/// Writes `content` to `dir/name` and returns the path.
pub fn write_schedule(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("schedule fixture is writable");
    path
}

pub fn read_fragment(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap_or_else(|e| panic!("reading {}: {}", name, e))
}
