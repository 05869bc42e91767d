use crate::config::BookConfig;
use crate::error::PipelineError;
use crate::writer::FragmentWriter;
use progbook_executor::{Executor, ExecutorImpl};
use progbook_layout::{Diagnostic, GridEngine, PageGrid, PageLayout, Partitioner};
use progbook_render::{ChapterRenderer, DescriptionProvider, Fragment};
use progbook_schedule::load_schedule;
use progbook_types::Event;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

/// Everything one run produces, before anything touches the disk.
#[derive(Debug, Clone)]
pub struct BookOutput {
    /// Laid-out timetable pages, in day then page order.
    pub layouts: Vec<PageLayout>,
    pub fragments: Vec<Fragment>,
}

impl BookOutput {
    pub fn grids(&self) -> impl Iterator<Item = &PageGrid> {
        self.layouts.iter().map(|l| &l.grid)
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.layouts.iter().flat_map(|l| l.diagnostics.iter())
    }

    /// The grids and their diagnostics as pretty JSON.
    pub fn grids_json(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(&self.layouts)?)
    }
}

/// The program-book pipeline: schedule in, LaTeX fragments out.
///
/// Normalization and rendering run on the calling thread; timetable pages are
/// independent and are laid out through the configured executor.
pub struct ProgramBook {
    config: BookConfig,
    engine: GridEngine,
    executor: ExecutorImpl,
    descriptions: Box<dyn DescriptionProvider>,
    writer: FragmentWriter,
}

impl ProgramBook {
    pub(super) fn new(
        config: BookConfig,
        executor: ExecutorImpl,
        descriptions: Box<dyn DescriptionProvider>,
    ) -> Result<Self, PipelineError> {
        let engine = GridEngine::new(config.layout.clone().into())?;
        let writer = FragmentWriter::new(config.output.output_dir.clone());
        Ok(Self {
            config,
            engine,
            executor,
            descriptions,
            writer,
        })
    }

    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    /// Parses and normalizes a schedule document.
    pub fn load_events(&self, schedule: &str) -> Result<Vec<Event>, PipelineError> {
        Ok(load_schedule(schedule, &self.config.schedule)?)
    }

    /// Partitions `events` into pages and lays every page out.
    pub fn layout(&self, events: &[Event]) -> Result<Vec<PageLayout>, PipelineError> {
        let pages = Partitioner::new(&self.config.layout)?.partition(events);
        log::info!(
            "Laying out {} timetable page(s) on {} worker(s).",
            pages.len(),
            self.executor.parallelism()
        );

        let engine = self.engine.clone();
        let results = self
            .executor
            .execute_all_fallible(pages, move |page| engine.layout_page(&page));

        let mut layouts = Vec::with_capacity(results.len());
        for result in results {
            let layout = result?;
            for diagnostic in &layout.diagnostics {
                log::warn!("{}", diagnostic);
            }
            log::debug!(
                "Page {} of {}: {} room(s), {} row(s)",
                layout.grid.index,
                layout.grid.day,
                layout.grid.rooms.len(),
                layout.grid.rows.len()
            );
            layouts.push(layout);
        }
        Ok(layouts)
    }

    /// Lays out and renders `events` without writing anything.
    pub fn generate(&self, events: &[Event]) -> Result<BookOutput, PipelineError> {
        let started = Instant::now();
        let layouts = self.layout(events)?;

        let renderer = ChapterRenderer::new(self.config.output.generated_dir.clone(), self.descriptions.as_ref());
        let mut fragments = renderer.chapters(events)?;
        let grids: Vec<PageGrid> = layouts.iter().map(|l| l.grid.clone()).collect();
        fragments.extend(renderer.tables(&grids)?);

        log::info!(
            "Rendered {} fragment(s) from {} event(s) in {:.2?}",
            fragments.len(),
            events.len(),
            started.elapsed()
        );
        Ok(BookOutput { layouts, fragments })
    }

    /// Writes `output`'s fragments under the output directory. Returns how
    /// many files changed.
    pub fn write(&self, output: &BookOutput) -> Result<usize, PipelineError> {
        let written = self.writer.write_all(&output.fragments)?;
        log::info!(
            "{} of {} fragment(s) changed in '{}'",
            written,
            output.fragments.len(),
            self.writer.root().display()
        );
        Ok(written)
    }

    /// Reads the schedule at `path`, generates the book and writes it.
    pub fn generate_from_file<P: AsRef<Path>>(&self, path: P) -> Result<BookOutput, PipelineError> {
        let path = path.as_ref();
        let schedule = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read schedule from '{}': {}", path.display(), e),
            ))
        })?;
        let events = self.load_events(&schedule)?;
        let output = self.generate(&events)?;
        self.write(&output)?;
        Ok(output)
    }
}
