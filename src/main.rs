// src/main.rs
//
// Calculatrice Z — point d’entrée (ligne de commande)
// ---------------------------------------------------
// But:
// - Lire les options (clap)
// - Initialiser le journal (env_logger, stderr) : --journal, --quiet, RUST_LOG
// - Lancer la boucle sur stdin/stdout

use std::io;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use env_logger::Builder;
use log::LevelFilter;

use calculatrice_z::app::{executer, AppCalc};

/// Calculatrice sur entiers non bornés : + - * / ^, parenthèses, variables.
/// Commandes : /help, /exit.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Niveau du journal (stderr). RUST_LOG reste prioritaire.
    #[arg(long, value_enum, default_value_t = NiveauJournal::Warn)]
    journal: NiveauJournal,

    /// Aucun journal.
    #[arg(short, long)]
    quiet: bool,

    /// Invite écrite avant chaque ligne lue.
    #[arg(long)]
    invite: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum NiveauJournal {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<NiveauJournal> for LevelFilter {
    fn from(n: NiveauJournal) -> Self {
        match n {
            NiveauJournal::Off => LevelFilter::Off,
            NiveauJournal::Error => LevelFilter::Error,
            NiveauJournal::Warn => LevelFilter::Warn,
            NiveauJournal::Info => LevelFilter::Info,
            NiveauJournal::Debug => LevelFilter::Debug,
            NiveauJournal::Trace => LevelFilter::Trace,
        }
    }
}

fn init_journal(args: &Args) -> Result<()> {
    let mut builder = Builder::new();

    if args.quiet {
        builder.filter_level(LevelFilter::Off);
    } else {
        builder.filter_level(args.journal.into());
        // RUST_LOG en dernier : il écrase --journal
        if let Ok(filtres) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filtres);
        }
    }

    builder.format_timestamp_secs().try_init()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_journal(&args)?;

    let mut app = AppCalc::new().avec_invite(args.invite);

    let stdin = io::stdin();
    let stdout = io::stdout();
    executer(&mut app, stdin.lock(), stdout.lock())?;

    Ok(())
}
