use super::orchestrator::ProgramBook;
use crate::config::BookConfig;
use crate::descriptions::FsDescriptions;
use crate::error::PipelineError;
use progbook_executor::{Executor, ExecutorImpl};
use progbook_render::DescriptionProvider;
use std::path::{Path, PathBuf};

/// A builder for creating a `ProgramBook`.
#[derive(Default)]
pub struct PipelineBuilder {
    config: BookConfig,
    parallel: Option<bool>,
    threads: Option<usize>,
    descriptions: Option<Box<dyn DescriptionProvider>>,
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with the default book configuration.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the configuration with one loaded from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = BookConfig::load(path)?;
        Ok(self)
    }

    pub fn with_config(mut self, config: BookConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output.output_dir = dir.into();
        self
    }

    /// Overrides `output.parallel` from the configuration.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Lays out pages on a dedicated pool of `threads` workers.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Replaces the filesystem description provider.
    pub fn with_descriptions(mut self, descriptions: Box<dyn DescriptionProvider>) -> Self {
        self.descriptions = Some(descriptions);
        self
    }

    fn executor(&self) -> Result<ExecutorImpl, PipelineError> {
        let parallel = self.parallel.unwrap_or(self.config.output.parallel);
        #[cfg(feature = "rayon-executor")]
        {
            if let (true, Some(threads)) = (parallel, self.threads) {
                let pool = progbook_executor::RayonExecutor::with_threads(threads)?;
                return Ok(ExecutorImpl::Rayon(pool));
            }
        }
        Ok(ExecutorImpl::choose(parallel))
    }

    pub fn build(self) -> Result<ProgramBook, PipelineError> {
        if self.config.output.generated_dir.contains("..") {
            return Err(PipelineError::Config(format!(
                "generatedDir '{}' must stay inside the output directory",
                self.config.output.generated_dir
            )));
        }
        let executor = self.executor()?;
        let descriptions: Box<dyn DescriptionProvider> = match self.descriptions {
            Some(descriptions) => descriptions,
            None => Box::new(FsDescriptions::new(self.config.output.description_dir.clone())),
        };
        log::debug!("Building pipeline with the {} executor", executor.name());
        ProgramBook::new(self.config, executor, descriptions)
    }
}
