use clap::{CommandFactory, Parser};
use progbook::{PipelineBuilder, PipelineError};
use std::fs;
use std::path::PathBuf;

/// Generates the LaTeX fragments of a conference program book from a schedule.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Pentabarf XML or JSON schedule
    #[arg(default_value = "xml")]
    schedule: PathBuf,

    /// JSON book configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the fragments are written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Lay out pages on the calling thread
    #[arg(long)]
    sequential: bool,

    /// Also write the laid-out grids and diagnostics as JSON
    #[arg(long, value_name = "FILE")]
    dump_grids: Option<PathBuf>,
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let args = Args::parse();

    if !args.schedule.is_file() {
        eprintln!("Schedule '{}' not found.", args.schedule.display());
        eprintln!();
        eprintln!("{}", Args::command().render_usage());
        std::process::exit(1);
    }

    let mut builder = PipelineBuilder::new();
    if let Some(config) = &args.config {
        builder = builder.with_config_file(config)?;
    }
    if let Some(dir) = &args.output_dir {
        builder = builder.with_output_dir(dir);
    }
    if args.sequential {
        builder = builder.with_parallel(false);
    }
    let book = builder.build()?;

    let output = book.generate_from_file(&args.schedule)?;

    if let Some(path) = &args.dump_grids {
        fs::write(path, output.grids_json()?)?;
        log::info!("Wrote grids to '{}'", path.display());
    }

    let warnings = output.diagnostics().count();
    println!(
        "Generated {} fragment(s) over {} timetable page(s) with {} warning(s).",
        output.fragments.len(),
        output.layouts.len(),
        warnings
    );
    Ok(())
}
