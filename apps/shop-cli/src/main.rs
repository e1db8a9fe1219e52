//! # Shop Entry Point
//!
//! ```text
//! $ SHOP_OPENING_BALANCE=1000 shop
//! ```
//!
//! Exits with a failure status when the session ends on a fatal error
//! (unreadable configuration, purchase store failure, terminal I/O).

use std::process::ExitCode;

use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    shop_cli::init_tracing();

    match shop_cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Shop terminated");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
