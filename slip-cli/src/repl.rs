//! Line-oriented command loop driving a [`ReceiptSession`].

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::NaiveDate;
use slip_core::db::save_batch;
use slip_core::{EntryField, ReceiptSession, RecordStore, Section};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("{0}")]
    BadArgument(String),
}

/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Section(Section),
    Date(NaiveDate),
    Name(String),
    Edit(EntryField, String),
    Add,
    Remove(u64),
    Purchase(String),
    Show,
    Save,
    Help,
    Quit,
}

impl Command {
    /// Parses a trimmed, non-empty input line.
    ///
    /// Field edits pass their argument through untouched (including an
    /// empty argument, which clears the field): the permissive-input
    /// policy lives in the session, not here.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "section" => rest
                .parse::<Section>()
                .map(Command::Section)
                .map_err(|e| CommandError::BadArgument(e.to_string())),
            "date" => NaiveDate::parse_from_str(rest, "%Y-%m-%d")
                .map(Command::Date)
                .map_err(|_| {
                    CommandError::BadArgument(format!("invalid date '{rest}' (want YYYY-MM-DD)"))
                }),
            "name" => Ok(Command::Name(rest.to_string())),
            "label" => Ok(Command::Edit(EntryField::Label, rest.to_string())),
            "weight" => Ok(Command::Edit(EntryField::Weight, rest.to_string())),
            "rate" => Ok(Command::Edit(EntryField::Rate, rest.to_string())),
            "total" => Ok(Command::Edit(EntryField::Total, rest.to_string())),
            "add" => Ok(Command::Add),
            "rm" => rest
                .parse::<u64>()
                .map(Command::Remove)
                .map_err(|_| CommandError::BadArgument(format!("invalid id '{rest}'"))),
            "purchase" => Ok(Command::Purchase(rest.to_string())),
            "show" => Ok(Command::Show),
            "save" => Ok(Command::Save),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

const HELP: &str = "\
commands:
  section <label>     select section ((A+), (A), (B), 2up/Tor)
  date <YYYY-MM-DD>   set the item date
  name <text>         set the customer name
  label <text>        size grade (e.g. 10/20) or piece count (e.g. 4)
  weight <n>          weight; acts as per-piece rate when the label is a count
  rate <n>            rate per unit
  total <n>           amount; back-solves the rate
  add                 commit the draft row to the slip
  rm <id>             remove a committed row
  purchase <n>        set the purchase amount
  show                print the receipt
  save                save all committed rows to the store
  quit                leave";

/// Runs the command loop until end of input or `quit`.
///
/// All slip output goes to `out`; a save failure is reported there as a
/// single message for the whole batch and the loop continues.
pub async fn run<R: BufRead, W: Write>(
    mut session: ReceiptSession,
    store: &dyn RecordStore,
    input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "receipt slip — 'help' for commands")?;
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Command::parse(trimmed) {
            Err(e) => writeln!(out, "{e}")?,
            Ok(Command::Quit) => break,
            Ok(command) => apply(command, &mut session, store, &mut out).await?,
        }
    }
    Ok(())
}

async fn apply<W: Write>(
    command: Command,
    session: &mut ReceiptSession,
    store: &dyn RecordStore,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Section(section) => {
            session.set_section(section);
            writeln!(out, "section: {section}")?;
        }
        Command::Date(date) => {
            session.set_item_date(date);
            writeln!(out, "date: {date}")?;
        }
        Command::Name(name) => {
            session.set_customer_name(&name);
            writeln!(out, "customer: {}", session.customer_name())?;
        }
        Command::Edit(field, raw) => {
            session.update_field(field, &raw);
            writeln!(out, "{}", draft_line(session))?;
        }
        Command::Add => {
            let id = session.commit_entry();
            writeln!(
                out,
                "added row {id} — {} rows, total {}",
                session.committed_items().len(),
                session.total_amount()
            )?;
        }
        Command::Remove(id) => {
            session.remove_entry(id);
            writeln!(
                out,
                "removed {id} — {} rows, total {}",
                session.committed_items().len(),
                session.total_amount()
            )?;
        }
        Command::Purchase(raw) => {
            session.set_purchase_amount(&raw);
            writeln!(out, "profit/loss: {}", session.profit_loss())?;
        }
        Command::Show => {
            write!(out, "{}", crate::render::render_receipt(session))?;
        }
        Command::Save => match save_batch(store, session.batch_records()).await {
            Ok(saved) => writeln!(out, "saved {} records", saved.len())?,
            Err(e) => {
                tracing::error!(error = %e, "batch save failed");
                writeln!(out, "failed to save data: {e}")?;
            }
        },
        Command::Help => writeln!(out, "{HELP}")?,
        // Handled by the caller.
        Command::Quit => {}
    }
    Ok(())
}

fn draft_line(session: &ReceiptSession) -> String {
    let draft = session.draft();
    let fmt = |v: Option<rust_decimal::Decimal>| match v {
        Some(d) => d.to_string(),
        None => "-".to_string(),
    };
    format!(
        "draft [{}] label '{}' weight {} rate {} total {}",
        draft.section,
        draft.label,
        fmt(draft.weight),
        fmt(draft.rate),
        fmt(draft.total)
    )
}
