use ledger_editor::{AppConfig, Notification, Session,
    display::{Intent, render_categories, render_json, render_table},
    form::{Field, FormError, TransactionForm},
    session::Opened,
    transaction::TransactionId};

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use colored::Colorize;
use clap::{Args, Parser, Subcommand};
use log::info;

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
    /// Path to a TOML configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Start without the configured seed transactions
    #[clap(long)]
    empty: bool,
}

/// One line typed at the prompt.
#[derive(Parser, Debug)]
#[clap(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[clap(subcommand)]
    action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// List all transactions
    List {
        /// Print the list as JSON instead of a table
        #[clap(long)]
        json: bool
    },
    /// Add a new transaction
    Add(FormFields),
    /// Change an existing transaction
    Edit {
        #[clap(value_parser)]
        id: TransactionId,

        #[clap(flatten)]
        fields: FormFields
    },
    /// Delete a transaction
    Delete {
        #[clap(value_parser)]
        id: TransactionId
    },
    /// Show the suggested categories
    Categories,
    /// Leave the editor
    #[clap(alias = "exit")]
    Quit,
}

#[derive(Args, Debug)]
struct FormFields {
    /// Date as YYYY-MM-DD
    #[clap(short, long, value_parser)]
    date: Option<String>,

    #[clap(short, long, value_parser, allow_negative_numbers = true)]
    amount: Option<String>,

    /// Income or Expense
    #[clap(short = 't', long = "type", value_parser)]
    kind: Option<String>,

    #[clap(short, long, value_parser)]
    category: Option<String>,
}

impl FormFields {
    fn fill(&self, form: &mut TransactionForm) -> Result<(), FormError> {
        let fields = [
            (Field::Date, &self.date),
            (Field::Amount, &self.amount),
            (Field::Type, &self.kind),
            (Field::Category, &self.category)
        ];
        for (field, value) in fields {
            if let Some(raw) = value {
                form.set_field(field, raw)?;
            }
        }
        return Ok(());
    }
}

#[derive(Debug)]
enum Flow {
    Continue,
    Quit
}

fn toast(notification: Notification) {
    println!("{}", notification.message().cyan());
}

fn add(session: &mut Session, fields: &FormFields) -> anyhow::Result<()> {
    if let Opened::Form(mut form) = session.open(Intent::Add) {
        fields.fill(&mut form)?;
        let id = form.submit(|submission| session.submit(submission))??;
        info!("transaction {} added from prompt", id);
    }
    return Ok(());
}

fn edit(session: &mut Session, id: TransactionId, fields: &FormFields) -> anyhow::Result<()> {
    let mut form = match session.open(Intent::Edit(id)) {
        Opened::Form(form) => form,
        _ => {
            println!("{}", format!("No such transaction {}", id).yellow());
            return Ok(());
        }
    };

    let submitted = fields.fill(&mut form)
        .map_err(anyhow::Error::from)
        .and_then(|_| Ok(form.submit(|submission| session.submit(submission))??));
    if submitted.is_err() {
        session.cancel_edit();
    }
    submitted?;
    return Ok(());
}

fn run(session: &mut Session, action: Subcommands) -> anyhow::Result<Flow> {
    match action {
        Subcommands::List { json: true } => {
            println!("{}", render_json(session.snapshot())?);
            return Ok(Flow::Continue);
        },
        Subcommands::List { json: false } => (),
        Subcommands::Add(fields) => add(session, &fields)?,
        Subcommands::Edit { id, fields } => edit(session, id, &fields)?,
        Subcommands::Delete { id } => {
            session.open(Intent::Delete(id));
        },
        Subcommands::Categories => {
            println!("{}", render_categories(session.categories()));
            return Ok(Flow::Continue);
        },
        Subcommands::Quit => return Ok(Flow::Quit)
    }

    println!("{}", render_table(session.snapshot()));
    return Ok(Flow::Continue);
}

/// Splits a prompt line into words, honouring shell-style quotes.
fn words(line: &str) -> anyhow::Result<Vec<String>> {
    shlex::split(line).ok_or_else(|| anyhow::anyhow!("unbalanced quotes in: {}", line))
}

fn prompt() -> io::Result<()> {
    print!("{} ", ">".bold());
    io::stdout().flush()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::read(path)?,
        None => AppConfig::default()
    };
    if args.empty {
        config.seed.clear();
    }

    let mut session = config.into_session(Some(Box::new(toast)))?;
    println!("{}", render_table(session.snapshot()));

    prompt()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        let words = match words(&line) {
            Ok(words) => words,
            Err(err) => {
                eprintln!("{}: {}", "error".bright_red(), err);
                prompt()?;
                continue;
            }
        };
        if words.is_empty() {
            prompt()?;
            continue;
        }

        match Line::try_parse_from(words) {
            Ok(parsed) => match run(&mut session, parsed.action) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => (),
                Err(err) => eprintln!("{}: {}", "error".bright_red(), err)
            },
            Err(err) => err.print()?
        }
        prompt()?;
    }

    return Ok(());
}
