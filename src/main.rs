use adducts::{CleanOptions, CleanedAdduct, clean_with};
use clap::Parser;
use log::{LevelFilter, debug};
use miette::{IntoDiagnostic, Result};
use rustyline::{DefaultEditor, error::ReadlineError};

/// Harmonizes mass-spectrometry adduct notations into a single canonical form
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Adducts to harmonize; when none are given, they're read interactively instead
    adducts: Vec<String>,
    /// Leave the harmonized adducts unbracketed
    #[arg(long)]
    no_brackets: bool,
    /// Don't append a charge when an adduct doesn't state one
    #[arg(long)]
    no_missing_charge: bool,
    /// Replace synonyms like `FA` or `ACN` with their chemical formulas
    #[arg(long)]
    formulas: bool,
    /// Print the charge of each adduct alongside its harmonized form
    #[arg(long)]
    charge: bool,
}

impl Args {
    fn options(&self) -> CleanOptions {
        CleanOptions::default()
            .with_brackets(!self.no_brackets)
            .with_missing_charge(!self.no_missing_charge)
            .with_formulas(self.formulas)
    }

    fn report(&self, adduct: &str) {
        let cleaned = clean_with(adduct, self.options());
        println!("{}", self.describe(&cleaned));
    }

    fn describe(&self, cleaned: &CleanedAdduct) -> String {
        if self.charge {
            format!("{cleaned}\t{}", cleaned.charge())
        } else {
            cleaned.to_string()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("RUST_LOG", "warn"))
        .init();
    let args = Args::parse();
    debug!("harmonizing with {:?}", args.options());

    if !args.adducts.is_empty() {
        for adduct in &args.adducts {
            args.report(adduct);
        }
        return Ok(());
    }

    let mut rl = DefaultEditor::new().into_diagnostic()?;
    loop {
        match rl.readline("Adduct: ") {
            Ok(adduct) => {
                rl.add_history_entry(&adduct).into_diagnostic()?;
                args.report(&adduct);
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(error) => return Err(error).into_diagnostic(),
        }
    }
}
