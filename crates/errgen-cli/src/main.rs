//! Binary entrypoint for errgen.
use clap::Parser;
use errgen_cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Log to stderr so generated output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}
