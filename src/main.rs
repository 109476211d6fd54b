use anyhow::Result;
use kintai::commands::Cli;
use kintai::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // In debug mode the message macros route through tracing instead of
    // plain stdout, so a subscriber has to be installed first.
    if is_debug_mode() {
        fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu()
}
