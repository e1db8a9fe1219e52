//! # shop-cli: Console Shop Simulator
//!
//! Wires configuration, logging, the purchase store and the interactive
//! menu together.
//!
//! ## Module Organization
//! ```text
//! shop_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── ShopConfig from SHOP_* variables
//! ├── error.rs        ◄─── AppError, recoverable vs fatal
//! ├── checkout.rs     ◄─── CheckoutEngine (plan → persist → settle)
//! ├── session.rs      ◄─── ShopSession (catalog, cart, ledger, engine)
//! └── shell.rs        ◄─── Shell (menu loop over BufRead/Write)
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Logging        tracing-subscriber, RUST_LOG or default filter,      │
//! │                    written to stderr so the menu stays readable         │
//! │  2. Configuration  ShopConfig::from_env()                               │
//! │  3. Store          PurchaseStore::open (creates purchase_history)       │
//! │  4. Session        standard catalog, opening balance, empty cart        │
//! │  5. Shell          menu loop on stdin/stdout until quit or EOF          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod checkout;
pub mod config;
pub mod error;
pub mod session;
pub mod shell;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use checkout::CheckoutEngine;
use config::ShopConfig;
use error::AppResult;
use session::ShopSession;
use shell::Shell;
use shop_core::{Catalog, Ledger};
use shop_db::PurchaseStore;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn,shop=info,sqlx=warn";

/// Runs one interactive session on the process terminal.
pub async fn run() -> AppResult<()> {
    let config = ShopConfig::from_env()?;
    info!(
        database = %config.database_path.display(),
        opening_balance = %config.opening_balance,
        "Starting shop"
    );

    let store = PurchaseStore::open(config.store_config()).await?;
    let ledger = Ledger::with_balance(config.opening_balance)?;
    let session = ShopSession::new(Catalog::standard()?, ledger, CheckoutEngine::new(store));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(session, config, stdin.lock(), stdout.lock());
    shell.run().await?;

    info!(balance = %shell.session().balance(), "Session ended");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// Log lines go to stderr; stdout belongs to the menu.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
