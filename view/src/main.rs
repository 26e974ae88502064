use anyhow::Result;
use clap::Parser;
use todo_view::args::Args;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("todo_view={filter}").parse()?)
                .add_directive(format!("todo_core={filter}").parse()?),
        )
        .init();

    todo_view::run(args)
}
