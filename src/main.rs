use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use partner_ledger::application::aggregate;
use partner_ledger::application::filter::filter;
use partner_ledger::application::session::LedgerSession;
use partner_ledger::domain::ports::{IdGeneratorBox, LedgerStoreBox};
use partner_ledger::domain::transaction::{TransactionDraft, TxId};
use partner_ledger::error::LedgerError;
use partner_ledger::infrastructure::id::UuidIdGenerator;
use partner_ledger::infrastructure::json_file::JsonFileStore;
use partner_ledger::interfaces::cli::report;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the ledger JSON file
    #[arg(long, default_value = "ledger.json")]
    ledger: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Form {
    /// Partner the money moved to or from
    #[arg(long)]
    partner: String,

    /// Transaction type: received or given
    #[arg(long)]
    direction: String,

    /// Amount in currency units
    #[arg(long)]
    amount: String,

    /// Calendar date, YYYY-MM-DD
    #[arg(long)]
    date: String,

    /// What the transaction was for
    #[arg(long)]
    description: String,
}

impl Form {
    fn draft(&self) -> std::result::Result<TransactionDraft, LedgerError> {
        Ok(TransactionDraft {
            partner_name: self.partner.clone(),
            direction: self.direction.parse()?,
            amount: self.amount.clone(),
            date: self.date.clone(),
            description: self.description.clone(),
        })
    }
}

#[derive(Subcommand)]
enum Command {
    /// Record a new transaction
    Add {
        #[command(flatten)]
        form: Form,
    },
    /// Overwrite an existing transaction, keeping its id
    Edit {
        /// Id of the transaction to edit
        id: String,
        #[command(flatten)]
        form: Form,
    },
    /// Delete a transaction by id
    Delete {
        /// Id of the transaction to delete
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List transactions, optionally filtered
    List {
        /// Case-insensitive search over partner name and description
        #[arg(long)]
        search: Option<String>,
    },
    /// Per-partner received/given/net balances
    Balances,
    /// Ledger-wide totals and net balance
    Totals,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store: LedgerStoreBox = Box::new(JsonFileStore::new(&cli.ledger));
    let ids: IdGeneratorBox = Box::new(UuidIdGenerator);
    let mut session = LedgerSession::new(store, ids);

    match cli.command {
        Command::Add { form } => {
            let ledger = submit(&mut session, &form).await?;
            if let Some(tx) = ledger.last() {
                println!("recorded {}", tx.id);
            }
        }
        Command::Edit { id, form } => {
            let id = TxId::new(id);
            let token = session.request_edit(&id).await.into_diagnostic()?;
            session.confirm_edit(token).await.into_diagnostic()?;
            submit(&mut session, &form).await?;
            println!("updated {id}");
        }
        Command::Delete { id, yes } => {
            let id = TxId::new(id);
            let token = session.request_delete(&id).await.into_diagnostic()?;
            if !yes && !confirmed(&session, &id).await? {
                session.cancel(token).into_diagnostic()?;
                println!("cancelled");
                return Ok(());
            }
            session.confirm_delete(token).await.into_diagnostic()?;
            println!("deleted {id}");
        }
        Command::List { search } => {
            let ledger = session.ledger().await.into_diagnostic()?;
            let term = search.unwrap_or_default();
            let matched = filter(&ledger, &term);
            print!("{}", report::render_transactions(&matched));
        }
        Command::Balances => {
            let ledger = session.ledger().await.into_diagnostic()?;
            let balances = aggregate::partner_balances(&ledger);
            print!("{}", report::render_balances(&balances));
        }
        Command::Totals => {
            let ledger = session.ledger().await.into_diagnostic()?;
            let totals = aggregate::totals(&ledger);
            print!("{}", report::render_totals(&totals));
        }
    }

    Ok(())
}

/// Commits a form, printing field errors one per line on validation failure.
async fn submit(
    session: &mut LedgerSession,
    form: &Form,
) -> Result<Vec<partner_ledger::domain::transaction::Transaction>> {
    let draft = form.draft().into_diagnostic()?;
    match session.submit(&draft).await {
        Ok(ledger) => Ok(ledger),
        Err(LedgerError::Validation(errors)) => {
            for (field, message) in errors.iter() {
                eprintln!("{field}: {message}");
            }
            std::process::exit(1);
        }
        Err(e) => Err(e).into_diagnostic(),
    }
}

/// Shows the pending record and asks for a y/N answer on stdin.
async fn confirmed(session: &LedgerSession, id: &TxId) -> Result<bool> {
    let ledger = session.ledger().await.into_diagnostic()?;
    if let Some(tx) = ledger.iter().find(|tx| tx.id == *id) {
        print!("{}", report::render_transactions(&[tx]));
    }
    print!("delete {id}? [y/N] ");
    std::io::stdout().flush().into_diagnostic()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer).into_diagnostic()?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
