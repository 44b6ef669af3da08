//! The `docdraw` command line tool.

mod manifest;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use thiserror::Error;

use docdraw::{PipelineError, RenderOptions, Validation};

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "docdraw", version, about = "DocDraw validator, renderer, and tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a DocDraw file and print the JSON result
    Validate { file: PathBuf },
    /// Render a DocDraw file to a deterministic PDF
    Render {
        file: PathBuf,
        /// Output PDF path
        #[arg(short, long)]
        output: PathBuf,
        /// Document title metadata
        #[arg(long)]
        title: Option<String>,
        /// Print the SHA-256 of the rendered bytes to stdout
        #[arg(long)]
        print_hash: bool,
    },
    /// Convert a DMP-1 Markdown file to DocDraw source
    Convert {
        file: PathBuf,
        /// Output path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Normalize a DocDraw file
    Normalize {
        file: PathBuf,
        /// Output path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check a golden-example manifest: shape, expected validation
    /// outcomes, and render determinism
    CheckExamples { manifest: PathBuf },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode, CliError> {
    match command {
        Command::Validate { file } => {
            let text = fs::read_to_string(&file)?;
            let validation = Validation::from(docdraw::validate(&text));
            println!("{}", serde_json::to_string(&validation)?);
            Ok(if validation.ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Render {
            file,
            output,
            title,
            print_hash,
        } => {
            let text = fs::read_to_string(&file)?;
            let options = RenderOptions { title };
            let bytes = docdraw::render_to_vec(&text, &options)?;
            fs::write(&output, &bytes)?;
            log::info!("wrote {} bytes to {}", bytes.len(), output.display());
            if print_hash {
                println!("{}", docdraw::sha256_hex(&bytes));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Convert { file, output } => {
            let markdown = fs::read_to_string(&file)?;
            let docdraw_text = docdraw::convert(&markdown).map_err(PipelineError::from)?;
            write_output(output, &docdraw_text)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Normalize { file, output } => {
            let text = fs::read_to_string(&file)?;
            write_output(output, &docdraw::normalize(&text))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::CheckExamples { manifest } => {
            let errors = manifest::check(&manifest)?;
            if errors > 0 {
                eprintln!("check-examples failed with {errors} error(s)");
                Ok(ExitCode::from(2))
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn write_output(path: Option<PathBuf>, content: &str) -> std::io::Result<()> {
    match path {
        Some(path) => fs::write(path, content),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}
