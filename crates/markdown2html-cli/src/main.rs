mod config;

use std::env;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use log::debug;
use markdown2html::{
    convert_from_reader, convert_path, read_source, render_document, write_atomic, ConvertError,
    ExitCode, RenderOptions,
};

#[derive(Parser, Debug)]
#[command(version, about = "Convert a Markdown file to HTML", long_about = None)]
struct Cli {
    /// Markdown file to convert ('-' reads stdin)
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// HTML file to create or truncate ('-' writes stdout)
    #[arg(value_name = "DESTINATION")]
    destination: PathBuf,

    /// Read settings from this TOML file instead of ./.markdown2html.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Leave **bold** markers untouched
    #[arg(long)]
    no_bold: bool,

    /// Leave __emphasis__ markers untouched
    #[arg(long)]
    no_emphasis: bool,

    /// Log each converted block to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => std::process::ExitCode::from(ExitCode::Success as u8),
        Err(err) => {
            eprintln!("{err:#}");
            let exit = err
                .downcast_ref::<ConvertError>()
                .map(ConvertError::exit_code)
                .unwrap_or(ExitCode::Io);
            std::process::ExitCode::from(exit as u8)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    // A missing source is reported ahead of any configuration problem.
    if !is_stdio(&cli.source) && !cli.source.exists() {
        return Err(ConvertError::MissingSource(cli.source.clone()).into());
    }

    let working_dir = env::current_dir().context("Unable to resolve working directory")?;
    let config = Config::load(cli.config.as_deref(), &working_dir).map_err(ConvertError::from)?;
    let options = render_options(cli, config);

    if !is_stdio(&cli.source) && !is_stdio(&cli.destination) {
        let blocks = convert_path(&cli.source, &cli.destination, options)?;
        debug!("{} blocks written to {}", blocks, cli.destination.display());
        return Ok(());
    }

    let html = if is_stdio(&cli.source) {
        let stdin = io::stdin();
        let mut reader = BufReader::new(stdin.lock());
        convert_from_reader(&mut reader, options).map_err(|err| ConvertError::io("-", err))?
    } else {
        render_document(&read_source(&cli.source)?, options)
    };

    if is_stdio(&cli.destination) {
        print_html(&html)
    } else {
        write_atomic(&cli.destination, &html)?;
        Ok(())
    }
}

fn render_options(cli: &Cli, config: Config) -> RenderOptions {
    let mut options = config.into_render_options();
    if cli.no_bold {
        options.bold = false;
    }
    if cli.no_emphasis {
        options.emphasis = false;
    }
    options
}

fn is_stdio(path: &Path) -> bool {
    path == Path::new("-")
}

fn print_html(html: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match handle.write_all(html.as_bytes()).and_then(|_| handle.flush()) {
        Ok(()) => Ok(()),
        Err(err) if should_ignore_pipe_error(&err) => Ok(()),
        Err(err) => Err(ConvertError::io("-", err)).context("Failed to write stdout"),
    }
}

fn should_ignore_pipe_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::WouldBlock
    )
}
