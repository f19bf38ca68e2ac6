mod session;

use std::io::{stdin, stdout, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::application::ExpenseService;
use crate::config::Settings;
use crate::logging::init_tracing;

pub use session::*;

/// Impensa - Expense Tracker
#[derive(Parser)]
#[command(name = "impensa")]
#[command(about = "Log expenses and keep a running total across currencies")]
#[command(version)]
pub struct Cli {
    /// Currency the running total is shown in
    #[arg(short, long, env = "IMPENSA_BASE_CURRENCY", default_value = "USD")]
    pub base_currency: String,

    /// JSON exchange-rate file ({"reference": "EUR", "rates": {"USD": 1.08}});
    /// the built-in table is used when omitted
    #[arg(short, long, env = "IMPENSA_RATES")]
    pub rates: Option<PathBuf>,

    /// Fail the total when a currency cannot be converted instead of leaving it out
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn settings(&self) -> Result<Settings> {
        Settings::new(
            &self.base_currency,
            self.rates.clone(),
            self.strict,
            self.verbose,
        )
    }

    pub fn run(self) -> Result<()> {
        let settings = self.settings()?;
        init_tracing(settings.verbose);

        let rates = settings.rate_table()?;
        tracing::info!(
            reference = %rates.reference(),
            base = %settings.base_currency,
            "exchange rates loaded"
        );

        let service = ExpenseService::new(rates)
            .with_base_currency(settings.base_currency.clone())
            .with_policy(settings.policy);

        let input = stdin();
        let interactive = input.is_terminal();
        let mut session = Session::new(service).with_prompt(interactive);
        session.run(input.lock(), stdout().lock())
    }
}
