use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Palazzo: the Pizza Palace showcase for the terminal.
#[derive(Debug, Parser)]
#[command(name = "palazzo", version, about)]
struct Cli {
    /// Theme to use instead of the saved preference (e.g. "marinara").
    #[arg(long)]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    info!(version = env!("CARGO_PKG_VERSION"), theme = ?cli.theme, "starting palazzo");
    palazzo_tui::run(cli.theme).await
}

/// Tracing goes to stderr so it never corrupts the alternate screen; pipe it
/// to a file with `RUST_LOG=debug palazzo 2>palazzo.log`.
fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
