use castagnoli_frame::cli::{Cli, execute_command};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so command output on stdout stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    execute_command(&cli);
}
