//! # Session Shell
//!
//! The interactive menu. Reads lines from any `BufRead`, writes to any
//! `Write`, and drives a [`ShopSession`].
//!
//! ## Menu Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Shell::run                                     │
//! │                                                                         │
//! │   print menu ──► read action ──► dispatch                               │
//! │        ▲               │             │                                  │
//! │        │              EOF            ├── Ok(Continue) ─────────────┐    │
//! │        │               │             ├── Ok(Quit) ──► "Goodbye!"   │    │
//! │        │               ▼             ├── Err(recoverable)          │    │
//! │        │          "Goodbye!"         │     └── print message ──────┤    │
//! │        │                             └── Err(fatal) ──► return Err │    │
//! │        └───────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! End of input at any prompt ends the session the same way as `0`.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::ShopConfig;
use crate::error::AppResult;
use crate::session::ShopSession;
use shop_core::validation::{is_affirmative, parse_amount, parse_menu_choice};
use shop_core::ValidationError;

/// Outcome of one menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive front end over a session.
pub struct Shell<R, W> {
    session: ShopSession,
    config: ShopConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(session: ShopSession, config: ShopConfig, input: R, output: W) -> Self {
        Shell {
            session,
            config,
            input,
            output,
        }
    }

    pub fn session(&self) -> &ShopSession {
        &self.session
    }

    /// Consumes the shell and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user quits or input ends.
    ///
    /// ## Errors
    /// Only fatal errors are returned (store, terminal I/O). Business errors
    /// are printed and the menu is shown again.
    pub async fn run(&mut self) -> AppResult<()> {
        loop {
            self.print_menu()?;

            let flow = match self.prompt("Enter action number: ")? {
                None => Flow::Quit,
                Some(line) => match self.dispatch(line.trim()).await {
                    Ok(flow) => flow,
                    Err(e) if e.is_recoverable() => {
                        debug!(error = %e, "Action rejected");
                        writeln!(self.output, "{}", e.user_message())?;
                        Flow::Continue
                    }
                    Err(e) => {
                        warn!(error = %e, "Fatal error, ending session");
                        return Err(e);
                    }
                },
            };

            if flow == Flow::Quit {
                writeln!(self.output, "Goodbye!")?;
                self.output.flush()?;
                return Ok(());
            }
        }
    }

    async fn dispatch(&mut self, action: &str) -> AppResult<Flow> {
        match action {
            "1" => self.browse(),
            "2" => self.show_cart().await,
            "3" => self.show_history().await,
            "4" => self.show_balance(),
            "5" => self.deposit(),
            "0" => Ok(Flow::Quit),
            _ => Err(ValidationError::InvalidFormat {
                field: "action".to_string(),
                reason: format!("unknown action '{action}'"),
            }
            .into()),
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn browse(&mut self) -> AppResult<Flow> {
        let categories = self.session.catalog().categories();
        writeln!(self.output, "Categories:")?;
        for (i, category) in categories.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, category.name())?;
        }
        let category_count = categories.len();

        let Some(line) = self.prompt("Choose a category: ")? else {
            return Ok(Flow::Quit);
        };
        let category = parse_menu_choice(&line, category_count, "category")?;

        let items = self
            .session
            .catalog()
            .category(category)
            .map(|c| c.items())
            .unwrap_or_default();
        for (i, item) in items.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, item.describe())?;
        }
        let item_count = items.len();

        let Some(line) = self.prompt("Choose an item to add to the cart: ")? else {
            return Ok(Flow::Quit);
        };
        let item = parse_menu_choice(&line, item_count, "item")?;

        self.session.add_to_cart(category, item)?;
        writeln!(self.output, "Added to cart.")?;
        Ok(Flow::Continue)
    }

    async fn show_cart(&mut self) -> AppResult<Flow> {
        let cart = self.session.cart();
        if cart.is_empty() {
            writeln!(self.output, "Cart is empty.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Your cart:")?;
        for (i, item) in cart.items().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, item.describe())?;
        }
        writeln!(self.output, "Total: {}", self.config.format_money(cart.total()))?;

        let Some(answer) = self.prompt("Checkout? (y/n): ")? else {
            return Ok(Flow::Quit);
        };
        if !is_affirmative(&answer) {
            return Ok(Flow::Continue);
        }

        let receipt = self.session.checkout().await?;
        writeln!(self.output, "Purchase completed.")?;
        writeln!(
            self.output,
            "Remaining balance: {}",
            self.config.format_money(receipt.balance_after)
        )?;
        Ok(Flow::Continue)
    }

    async fn show_history(&mut self) -> AppResult<Flow> {
        let history = self.session.history().await?;
        if history.is_empty() {
            writeln!(self.output, "Purchase history is empty.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Purchase history:")?;
        for record in &history {
            writeln!(
                self.output,
                "{} - {}",
                record.product_name,
                self.config.format_money(record.product_price)
            )?;
        }
        Ok(Flow::Continue)
    }

    fn show_balance(&mut self) -> AppResult<Flow> {
        writeln!(
            self.output,
            "Your balance: {}",
            self.config.format_money(self.session.balance())
        )?;
        Ok(Flow::Continue)
    }

    fn deposit(&mut self) -> AppResult<Flow> {
        let Some(line) = self.prompt("Enter deposit amount: ")? else {
            return Ok(Flow::Quit);
        };
        let amount = parse_amount(&line)?;
        let balance = self.session.deposit(amount)?;

        writeln!(
            self.output,
            "Deposited {}. Current balance: {}",
            self.config.format_money(amount),
            self.config.format_money(balance)
        )?;
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Terminal helpers
    // =========================================================================

    fn print_menu(&mut self) -> AppResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Welcome. Choose an action:")?;
        writeln!(self.output, "1. Browse categories")?;
        writeln!(self.output, "2. Go to cart")?;
        writeln!(self.output, "3. Purchase history")?;
        writeln!(self.output, "4. Show balance")?;
        writeln!(self.output, "5. Deposit funds")?;
        writeln!(self.output, "0. Quit")?;
        Ok(())
    }

    /// Prints `text` and reads one line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> AppResult<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::CheckoutEngine;
    use shop_core::{Catalog, Ledger, Money};
    use shop_db::{PurchaseStore, StoreConfig};
    use std::io::Cursor;
    use tempfile::TempDir;

    async fn run_script(
        dir: &TempDir,
        opening: Money,
        script: &str,
    ) -> (AppResult<()>, ShopSession, String) {
        let store = PurchaseStore::open(StoreConfig::new(dir.path().join("shop.db")))
            .await
            .unwrap();
        let session = ShopSession::new(
            Catalog::standard().unwrap(),
            Ledger::with_balance(opening).unwrap(),
            CheckoutEngine::new(store),
        );

        let mut shell = Shell::new(
            session,
            ShopConfig::default(),
            Cursor::new(script.to_string()),
            Vec::new(),
        );
        let result = shell.run().await;
        let Shell {
            session, output, ..
        } = shell;
        (result, session, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn test_buy_book_with_exact_balance() {
        let dir = tempfile::tempdir().unwrap();
        let script = "1\n1\n1\n2\ny\n3\n4\n0\n";

        let (result, session, out) = run_script(&dir, Money::from_major(500), script).await;

        result.unwrap();
        assert!(out.contains("1. Book: 1984, Author: George Orwell, Price: 500.00"));
        assert!(out.contains("Added to cart."));
        assert!(out.contains("Total: 500.00 RUB"));
        assert!(out.contains("Purchase completed."));
        assert!(out.contains("1984 - 500.00 RUB"));
        assert!(out.contains("Your balance: 0.00 RUB"));
        assert!(out.ends_with("Goodbye!\n"));
        assert!(session.cart().is_empty());
        assert!(session.balance().is_zero());
    }

    #[tokio::test]
    async fn test_insufficient_funds_returns_to_menu() {
        let dir = tempfile::tempdir().unwrap();
        let script = "1\n2\n1\n2\ny\n3\n0\n";

        let (result, session, out) = run_script(&dir, Money::from_major(500), script).await;

        result.unwrap();
        assert!(out.contains("Insufficient funds!"));
        assert!(out.contains("Purchase history is empty."));
        assert_eq!(session.cart().len(), 1);
        assert_eq!(session.balance(), Money::from_major(500));
    }

    #[tokio::test]
    async fn test_declining_checkout_keeps_cart() {
        let dir = tempfile::tempdir().unwrap();
        let (result, session, out) =
            run_script(&dir, Money::from_major(500), "1\n1\n2\n2\nn\n0\n").await;

        result.unwrap();
        assert!(!out.contains("Purchase completed."));
        assert_eq!(session.cart().items()[0].name(), "The Master and Margarita");
        assert_eq!(session.balance(), Money::from_major(500));
    }

    #[tokio::test]
    async fn test_invalid_inputs_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let script = "9\nabc\n1\n3\n1\nx\n2\n0\n";

        let (result, session, out) = run_script(&dir, Money::zero(), script).await;

        result.unwrap();
        assert_eq!(out.matches("Invalid choice.").count(), 4);
        assert!(out.contains("Cart is empty."));
        assert!(!out.contains("Checkout?"));
        assert!(session.cart().is_empty());
    }

    #[tokio::test]
    async fn test_deposit_flow() {
        let dir = tempfile::tempdir().unwrap();
        let script = "5\n-10\n5\nlots\n5\n1500.50\n4\n0\n";

        let (result, session, out) = run_script(&dir, Money::zero(), script).await;

        result.unwrap();
        assert!(out.contains("Deposit amount must be greater than zero."));
        assert!(out.contains("Invalid amount."));
        assert!(out.contains("Deposited 1500.50 RUB. Current balance: 1500.50 RUB"));
        assert_eq!(session.balance(), Money::from_cents(150_050));
    }

    #[tokio::test]
    async fn test_deposit_past_maximum_balance() {
        let dir = tempfile::tempdir().unwrap();
        let opening = Money::from_cents(i64::MAX - 5);

        let (result, session, out) = run_script(&dir, opening, "5\n1\n0\n").await;

        result.unwrap();
        assert!(out.contains("Amount is too large."));
        assert!(!out.contains("greater than zero"));
        assert_eq!(session.balance(), opening);
    }

    #[tokio::test]
    async fn test_end_of_input_quits() {
        let dir = tempfile::tempdir().unwrap();

        let (result, _, out) = run_script(&dir, Money::zero(), "").await;
        result.unwrap();
        assert!(out.ends_with("Goodbye!\n"));

        let (result, _, out) = run_script(&dir, Money::zero(), "1\n").await;
        result.unwrap();
        assert!(out.contains("Choose a category: "));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[tokio::test]
    async fn test_history_survives_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let (result, _, _) =
            run_script(&dir, Money::from_major(1_000), "1\n1\n1\n2\nyes\n0\n").await;
        result.unwrap();

        let (result, _, out) = run_script(&dir, Money::zero(), "3\n0\n").await;
        result.unwrap();
        assert!(out.contains("1984 - 500.00 RUB"));
    }

    #[tokio::test]
    async fn test_store_failure_ends_session() {
        let dir = tempfile::tempdir().unwrap();
        let broken = PurchaseStore::new(StoreConfig::new(dir.path().join("gone").join("shop.db")));
        let session = ShopSession::new(
            Catalog::standard().unwrap(),
            Ledger::with_balance(Money::zero()).unwrap(),
            CheckoutEngine::new(broken),
        );
        let mut shell = Shell::new(
            session,
            ShopConfig::default(),
            Cursor::new("3\n0\n".to_string()),
            Vec::new(),
        );

        let err = shell.run().await.unwrap_err();
        assert!(!err.is_recoverable());
        let out = String::from_utf8(shell.into_output()).unwrap();
        assert!(!out.contains("Goodbye!"));
    }
}
