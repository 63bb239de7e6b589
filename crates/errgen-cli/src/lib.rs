//! errgen command line: validate catalogs, generate Rust source, export JSON
//! and preview templates.
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use errgen_core::{Catalog, GenerateOptions, RawCatalog, RendererFailures};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "errgen", version, about = "Compile error catalogs into Rust source and JSON")]
pub struct Cli {
    /// Log filter (e.g. `info`, `errgen_core=debug`)
    #[arg(long, global = true, env = "ERRGEN_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a catalog and print a summary
    Check {
        catalog: PathBuf,
    },
    /// Generate the Rust module for a catalog
    Generate {
        catalog: PathBuf,
        /// Output file (stdout when omitted)
        #[arg(short, long, conflicts_with = "out_dir")]
        output: Option<PathBuf>,
        /// Write `<module>.rs` into this directory
        #[arg(long, env = "ERRGEN_OUT_DIR")]
        out_dir: Option<PathBuf>,
        /// Make `render_template` return `Result<String, TemplateError>`
        #[arg(long)]
        structured_errors: bool,
    },
    /// Export the catalog as JSON
    Json {
        catalog: PathBuf,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a named template against the catalog keys
    Render {
        catalog: PathBuf,
        template: String,
    },
}

fn load(path: &Path) -> Result<Catalog> {
    let raw = RawCatalog::load(path)?;
    raw.validate()
        .with_context(|| format!("invalid catalog {}", path.display()))
}

fn emit(bytes: &[u8], output: Option<&Path>, stdout: &mut dyn Write) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => stdout.write_all(bytes)?,
    }
    Ok(())
}

/// Run one command, writing regular output to `stdout`.
pub fn run(cli: Cli, stdout: &mut dyn Write) -> Result<()> {
    match cli.command {
        Command::Check { catalog } => {
            let catalog = load(&catalog)?;
            writeln!(
                stdout,
                "{}: sid {}, {} errors, {} templates, {} keys",
                catalog.name(),
                catalog.sid(),
                catalog.errors().len(),
                catalog.templates().len(),
                catalog.keys().len()
            )?;
        }
        Command::Generate {
            catalog,
            output,
            out_dir,
            structured_errors,
        } => {
            let catalog = load(&catalog)?;
            let options = GenerateOptions {
                renderer_failures: if structured_errors {
                    RendererFailures::Structured
                } else {
                    RendererFailures::Message
                },
            };
            let file = catalog.source_file_with(&options)?;
            let target = match (output, out_dir) {
                (Some(path), _) => Some(path),
                (None, Some(dir)) => Some(dir.join(format!("{}.rs", file.module()))),
                (None, None) => None,
            };
            emit(file.render().as_bytes(), target.as_deref(), stdout)?;
        }
        Command::Json { catalog, output } => {
            let catalog = load(&catalog)?;
            let mut bytes = catalog.to_json()?;
            bytes.push(b'\n');
            emit(&bytes, output.as_deref(), stdout)?;
        }
        Command::Render { catalog, template } => {
            let catalog = load(&catalog)?;
            let Some(text) = catalog.templates().get(&template) else {
                bail!("catalog {} has no template `{}`", catalog.name(), template);
            };
            let rendered = errgen_runtime::render_or_message(text, &catalog.key_pairs());
            writeln!(stdout, "{}", rendered)?;
        }
    }
    Ok(())
}
