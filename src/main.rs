//! autodocs — generate step-by-step docs from annotated source files.
//!
//! Two modes:
//!
//! - **file mode** (default): `autodocs samples/fib.py` or just `autodocs`
//!   to scan the input root, writing one page per source to the output root
//! - **stdin mode**: `autodocs --stdin < fib.py` prints one page to stdout

use anyhow::{Context, Result};
use autodocs::batch::{self, BatchOptions};
use autodocs::config::Config;
use autodocs::linkcheck::{self, HttpProbe, LinkProbe};
use autodocs::render::{self, PageInfo};
use autodocs::BuildError;
use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "autodocs",
    about = "Generate documentation pages from annotated source files"
)]
struct Cli {
    /// Source files (glob patterns supported). If omitted, the input root is scanned.
    files: Vec<String>,

    /// Text file listing source paths, one per line
    #[arg(long)]
    list_file: Option<PathBuf>,

    /// Directory scanned for sources when no files are given
    #[arg(long)]
    input_root: Option<PathBuf>,

    /// Directory receiving the generated pages
    #[arg(long)]
    output_root: Option<PathBuf>,

    /// Output format: markdown (default), html, json
    #[arg(short = 'f', long)]
    format: Option<String>,

    /// Probe DOC_LINKS URLs and warn about unreachable ones
    #[arg(long)]
    check_links: bool,

    /// Per-link timeout in seconds for --check-links
    #[arg(long)]
    link_timeout: Option<u64>,

    /// Configuration file (default: ./autodocs.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read one source from stdin and print the page to stdout
    #[arg(long)]
    stdin: bool,

    /// Log debug details
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

impl Cli {
    /// Command-line flags take precedence over the config file.
    fn merge_into(&self, mut config: Config) -> Config {
        if let Some(ref root) = self.input_root {
            config.input_root = root.clone();
        }
        if let Some(ref root) = self.output_root {
            config.output_root = root.clone();
        }
        if let Some(ref format) = self.format {
            config.format = format.clone();
        }
        if self.check_links {
            config.check_links = true;
        }
        if let Some(secs) = self.link_timeout {
            config.link_timeout_secs = secs;
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = cli.merge_into(Config::load(cli.config.as_deref())?);

    if cli.stdin {
        return stdin_mode(&config);
    }

    file_mode(&cli, &config)
}

fn init_logging(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// stdin mode: parse one source, print the rendered page.
fn stdin_mode(config: &Config) -> Result<()> {
    let renderer = render::create_renderer(&config.format)?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let doc = match autodocs::parse(&input) {
        Ok(doc) => doc,
        Err(BuildError::MissingTitle) => {
            warn!("skipping <stdin>: no DOC_TITLE tag");
            return Ok(());
        }
    };

    if config.check_links {
        let probe = HttpProbe::new(config.link_timeout());
        linkcheck::check_links("<stdin>", &doc.resources, &probe);
    }

    let page = PageInfo::new("<stdin>", config.code_language.as_str());
    print!("{}", renderer.render(&doc, &page));
    Ok(())
}

/// file mode: process every selected source, one page each.
fn file_mode(cli: &Cli, config: &Config) -> Result<()> {
    let renderer = render::create_renderer(&config.format)?;

    let paths = batch::collect_inputs(
        &cli.files,
        cli.list_file.as_deref(),
        &config.input_root,
        &config.extensions,
    )?;
    if paths.is_empty() {
        warn!(
            "no source files to process under {}",
            config.input_root.display()
        );
        return Ok(());
    }

    let probe = config
        .check_links
        .then(|| HttpProbe::new(config.link_timeout()));

    let opts = BatchOptions {
        input_root: &config.input_root,
        output_root: &config.output_root,
        renderer: &*renderer,
        code_language: &config.code_language,
        probe: probe.as_ref().map(|p| p as &dyn LinkProbe),
    };
    let summary = batch::run(&paths, &opts);

    info!(
        written = summary.written.len(),
        skipped = summary.skipped.len(),
        failed = summary.failed.len(),
        "done"
    );
    Ok(())
}
