use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use crate::application::{AppError, ExpenseService};
use crate::domain::{format_date, Category, ExpenseDraft, ExpenseRecord, PaymentMethod};
use crate::io::Exporter;
use crate::rates::RateProvider;

/// One line typed into the session.
#[derive(Parser, Debug)]
#[command(multicall = true, disable_help_subcommand = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Fill in the form and submit it (unset fields keep their current value)
    Add {
        /// Amount (e.g. "50" or "12.5")
        #[arg(allow_negative_numbers = true)]
        amount: Option<String>,

        /// Currency code (e.g. USD, EUR)
        #[arg(short, long)]
        currency: Option<String>,

        /// Category (e.g. "Grocery", "Life Expenses")
        #[arg(short = 'k', long)]
        category: Option<String>,

        /// Date of the expense (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Payment method: Cash, "Credit Card", Paypal
        #[arg(short, long)]
        method: Option<String>,
    },

    /// Show the current form
    Form,

    /// List all expenses
    List {
        /// Output format: table, json, csv
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Delete the expense at a row
    Delete {
        /// Row number as shown by `list`
        row: usize,
    },

    /// Take the expense at a row out of the ledger and into the form
    Edit {
        /// Row number as shown by `list`
        row: usize,
    },

    /// Abandon the current edit and put the expense back
    Cancel,

    /// Show the running total
    Total,

    /// List currencies with known exchange rates
    Currencies,

    /// List expense categories
    Categories,

    /// List payment methods
    Methods,

    /// Show available commands
    Help,

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

impl SessionCommand {
    /// Parse a typed line. Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse_line(line: &str) -> Result<Option<Self>, clap::Error> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let words = shell_words::split(trimmed).map_err(|e| {
            SessionLine::command().error(clap::error::ErrorKind::InvalidValue, e.to_string())
        })?;
        SessionLine::try_parse_from(words).map(|l| Some(l.command))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-oriented front end: a form, the expense table and the total.
pub struct Session<P> {
    service: ExpenseService<P>,
    form: ExpenseDraft,
    prompt: bool,
}

impl<P: RateProvider> Session<P> {
    pub fn new(service: ExpenseService<P>) -> Self {
        Self {
            service,
            form: ExpenseDraft::default(),
            prompt: false,
        }
    }

    /// Print a `> ` prompt before each line (for terminals).
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn service(&self) -> &ExpenseService<P> {
        &self.service
    }

    pub fn form(&self) -> &ExpenseDraft {
        &self.form
    }

    /// Process commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        if self.prompt {
            writeln!(out, "Impensa - type `help` for commands.")?;
        }

        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(out, "> ")?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read input")?;

            match self.execute(&line, &mut out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => writeln!(out, "Error: {:#}", err)?,
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Run a single line.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let command = match SessionCommand::parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(err) => {
                write!(out, "{}", err)?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            SessionCommand::Add {
                amount,
                currency,
                category,
                date,
                method,
            } => self.run_add(out, amount, currency, category, date, method)?,

            SessionCommand::Form => self.print_form(out)?,

            SessionCommand::List { format } => self.run_list(out, &format)?,

            SessionCommand::Delete { row } => {
                let removed = self.service.delete(row_index(row)?)?;
                writeln!(out, "Deleted: {}", describe(&removed))?;
                self.print_table(out)?;
                self.print_total(out)?;
            }

            SessionCommand::Edit { row } => {
                self.form = self.service.begin_edit(row_index(row)?)?;
                writeln!(
                    out,
                    "Editing row {}. It stays out of the ledger until you `add` to save or `cancel` to restore it.",
                    row
                )?;
                self.print_form(out)?;
                self.print_total(out)?;
            }

            SessionCommand::Cancel => {
                let restored = describe(self.service.cancel_edit()?);
                self.form = ExpenseDraft::default();
                writeln!(out, "Restored: {}", restored)?;
                self.print_total(out)?;
            }

            SessionCommand::Total => self.print_total(out)?,

            SessionCommand::Currencies => {
                let codes: Vec<String> = self
                    .service
                    .supported_currencies()
                    .into_iter()
                    .map(|c| c.to_string())
                    .collect();
                writeln!(out, "{}", codes.join(", "))?;
            }

            SessionCommand::Categories => {
                for category in Category::ALL {
                    writeln!(out, "{}", category.as_str())?;
                }
            }

            SessionCommand::Methods => {
                for method in PaymentMethod::ALL {
                    writeln!(out, "{}", method.as_str())?;
                }
            }

            SessionCommand::Help => {
                let command = SessionLine::command();
                for sub in command.get_subcommands() {
                    let about = sub.get_about().map(|a| a.to_string()).unwrap_or_default();
                    writeln!(out, "  {:<12} {}", sub.get_name(), about)?;
                }
                writeln!(out, "Use `<command> --help` for options.")?;
            }

            SessionCommand::Quit => {
                if self.service.is_editing() {
                    writeln!(out, "Discarding the unsaved edit.")?;
                }
                return Ok(Flow::Quit);
            }
        }

        Ok(Flow::Continue)
    }

    fn run_add<W: Write>(
        &mut self,
        out: &mut W,
        amount: Option<String>,
        currency: Option<String>,
        category: Option<String>,
        date: Option<String>,
        method: Option<String>,
    ) -> Result<()> {
        if let Some(amount) = amount {
            self.form.amount = amount;
        }
        if let Some(currency) = currency {
            self.form.currency = currency;
        }
        if let Some(category) = category {
            self.form.category = category;
        }
        if let Some(date) = date {
            self.form.date = date;
        }
        if let Some(method) = method {
            self.form.payment_method = method;
        }

        let verb = if self.service.is_editing() {
            "Saved"
        } else {
            "Added"
        };

        match self.service.submit(&self.form) {
            Ok(record) => writeln!(out, "{}: {}", verb, describe(record))?,
            Err(AppError::Validation(err)) => {
                writeln!(out, "Invalid {}: {}", err.field(), err)?;
                writeln!(out, "Fix the {} field and try again.", err.field())?;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }

        self.form = ExpenseDraft::default();
        self.print_table(out)?;
        self.print_total(out)
    }

    fn run_list<W: Write>(&self, out: &mut W, format: &str) -> Result<()> {
        let records = self.service.records();
        match format {
            "table" => {
                self.print_table(out)?;
                self.print_total(out)?;
            }
            "csv" => {
                Exporter::new(records).export_csv(&mut *out)?;
            }
            "json" => {
                let total = self.service.total().ok();
                Exporter::new(records).export_json(&mut *out, total.as_ref())?;
            }
            _ => anyhow::bail!("Invalid format '{}'. Valid formats: table, json, csv", format),
        }
        Ok(())
    }

    fn print_form<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "  Amount:         {}", self.form.amount)?;
        writeln!(out, "  Currency:       {}", self.form.currency)?;
        writeln!(out, "  Category:       {}", self.form.category)?;
        writeln!(out, "  Date:           {}", self.form.date)?;
        writeln!(out, "  Payment method: {}", self.form.payment_method)?;
        Ok(())
    }

    fn print_table<W: Write>(&self, out: &mut W) -> Result<()> {
        let records = self.service.records();
        if records.is_empty() {
            writeln!(out, "No expenses recorded.")?;
            return Ok(());
        }

        writeln!(
            out,
            "{:<4} {:>12} {:<8} {:<14} {:<10} {:<12}",
            "ROW", "AMOUNT", "CURRENCY", "CATEGORY", "DATE", "METHOD"
        )?;
        writeln!(out, "{}", "-".repeat(65))?;
        for (index, record) in records.iter().enumerate() {
            writeln!(
                out,
                "{:<4} {:>12} {:<8} {:<14} {:<10} {:<12}",
                index + 1,
                truncate(&record.amount, 12),
                record.currency.as_str(),
                record.category.as_str(),
                format_date(record.date),
                record.payment_method.as_str()
            )?;
        }
        Ok(())
    }

    fn print_total<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.service.total() {
            Ok(total) => {
                writeln!(out, "Total Expenses: {} {}", total.display(), total.base)?;
                for skipped in &total.skipped {
                    writeln!(
                        out,
                        "  row {} not counted: {}",
                        skipped.index + 1,
                        skipped.reason
                    )?;
                }
            }
            Err(err) => writeln!(out, "Total Expenses: unavailable ({})", err)?,
        }
        Ok(())
    }
}

fn row_index(row: usize) -> Result<usize> {
    row.checked_sub(1).context("Rows are numbered from 1")
}

fn describe(record: &ExpenseRecord) -> String {
    format!(
        "{} {} {} on {} ({})",
        record.amount,
        record.currency,
        record.category,
        format_date(record.date),
        record.payment_method
    )
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
