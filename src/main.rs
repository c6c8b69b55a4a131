//! CLI entry point for stripdoc

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use stripdoc::{
    BlockBoundary, ExtractionMode, FilterKind, PipelineConfig, ScanOptions, extract_listing,
    file_utils::resolve_source_path, filters::parse_date,
};

/// Filter selectable with --filter
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    /// Stamp the build date into the document metadata
    CompileDate,
    /// Level-1 heading becomes the title, other headings move up
    ShiftHeadings,
    /// Drop a "Table of Contents" heading and its lists
    RemoveToc,
    /// Replace extraction directives with API listings
    InsertCode,
}

impl From<FilterArg> for FilterKind {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::CompileDate => FilterKind::CompileDate,
            FilterArg::ShiftHeadings => FilterKind::ShiftHeadings,
            FilterArg::RemoveToc => FilterKind::RemoveToc,
            FilterArg::InsertCode => FilterKind::InsertCode,
        }
    }
}

/// Extraction mode for the extract subcommand
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Method signatures (insertClassMethods)
    Methods,
    /// Properties and fields (insertClassAttributes)
    Attributes,
    /// Enum constants (insertEnum)
    Enum,
}

impl From<ModeArg> for ExtractionMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Methods => ExtractionMode::Methods,
            ModeArg::Attributes => ExtractionMode::Attributes,
            ModeArg::Enum => ExtractionMode::Enum,
        }
    }
}

/// Scanner flags shared by both modes
#[derive(clap::Args, Debug)]
struct ScanArgs {
    /// Directory directive paths are resolved against
    #[arg(long = "root", value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Line that hides the declaration below it (can be used multiple times)
    /// Defaults to [MoonSharpVisible(false)]
    #[arg(long = "hide-marker", value_name = "TEXT")]
    hide_marker: Vec<String>,

    /// Bound blocks by brace depth instead of indentation
    #[arg(long = "brace-depth")]
    brace_depth: bool,
}

impl ScanArgs {
    fn scan_options(&self) -> ScanOptions {
        let mut options = ScanOptions::default();
        if !self.hide_marker.is_empty() {
            options.hide_markers = self.hide_marker.clone();
        }
        if self.brace_depth {
            options.boundary = BlockBoundary::BraceDepth;
        }
        options
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the API listing of one source file
    Extract {
        /// What to list
        mode: ModeArg,

        /// Source file, relative to --root
        path: String,

        #[command(flatten)]
        scan: ScanArgs,
    },
}

#[derive(Parser, Debug)]
#[command(name = "stripdoc")]
#[command(about = "Pandoc filters that splice C# API listings into documentation")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Target format passed by pandoc (ignored)
    format: Option<String>,

    /// Filter to run, in the given order (can be used multiple times)
    /// Defaults to compile-date, shift-headings, remove-toc, insert-code
    #[arg(long = "filter", value_name = "NAME")]
    filter: Vec<FilterArg>,

    /// Language class of generated code blocks
    #[arg(long = "language", value_name = "LANG", default_value = "cs")]
    language: String,

    /// Date stamped into the metadata (default: today)
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    date: Option<String>,

    #[command(flatten)]
    scan: ScanArgs,
}

fn run_filter(args: &Args) -> stripdoc::Result<()> {
    let date = args.date.as_deref().map(parse_date).transpose()?;
    let filters = if args.filter.is_empty() {
        FilterKind::DEFAULT_CHAIN.to_vec()
    } else {
        args.filter.iter().copied().map(FilterKind::from).collect()
    };

    let config = PipelineConfig {
        root: args.scan.root.clone(),
        language: args.language.clone(),
        filters,
        date,
        scan: args.scan.scan_options(),
    };
    log::debug!("pipeline: {:?}", config.filters);

    stripdoc::run_stream(io::stdin().lock(), io::stdout().lock(), &config)
}

fn run_extract(mode: ModeArg, path: &str, scan: &ScanArgs) -> stripdoc::Result<()> {
    let full_path = resolve_source_path(&scan.root, path);
    let listing = extract_listing(&full_path, path, mode.into(), &scan.scan_options())?;
    println!("{}", listing);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let result = match &args.command {
        Some(Command::Extract { mode, path, scan }) => run_extract(*mode, path, scan),
        None => run_filter(&args),
    };

    if let Err(e) = result {
        eprintln!("stripdoc: {}", e);
        process::exit(1);
    }
}
