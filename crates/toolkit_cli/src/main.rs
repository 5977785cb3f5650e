//! Command-line front end for the toolkit converters.
//!
//! # Responsibility
//! - Play the form layer: turn flags into raw `(field, value)` edits.
//! - Keep all arithmetic inside `toolkit_core`.

use clap::{Args, Parser, Subcommand};
use log::info;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use toolkit_core::{
    default_log_level, init_logging, quote_emi_raw, AreaQuantity, CurrencyConverter,
    LandConverter, LandField, RateTable,
};

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "toolkit")]
#[command(about = "Land, currency and loan converters", version)]
struct Cli {
    #[command(flatten)]
    logging: LoggingArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct LoggingArgs {
    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; file logging is off when omitted
    #[arg(long, global = true)]
    log_dir: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert land area between sq.ft, Ropani/Aana/Paisa/Dam and Bigha/Kattha/Dhur
    Land {
        /// Starting area in square feet
        #[arg(long, default_value = "0")]
        sqft: String,

        /// Field edit as `<field>=<value>`, applied in order
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        edits: Vec<String>,

        /// Print the display values as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert an amount between currencies
    Currency {
        /// Amount to convert
        amount: String,

        #[arg(long, default_value = toolkit_core::model::currency::DEFAULT_FROM_CODE)]
        from: String,

        #[arg(long, default_value = toolkit_core::model::currency::DEFAULT_TO_CODE)]
        to: String,

        /// JSON file with a custom rate table
        #[arg(long)]
        rates: Option<PathBuf>,
    },
    /// List the currency rate table
    Currencies {
        /// JSON file with a custom rate table
        #[arg(long)]
        rates: Option<PathBuf>,
    },
    /// Compute the monthly instalment of a loan
    Emi {
        /// Loan amount
        principal: String,
        /// Annual interest rate in percent
        annual_rate: String,
        /// Tenure in years
        years: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    if let Some(log_dir) = cli.logging.log_dir.as_deref() {
        let level = cli
            .logging
            .log_level
            .as_deref()
            .unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
        info!("event=cli_start module=cli status=ok");
    }

    match cli.command {
        Commands::Land { sqft, edits, json } => run_land(&sqft, &edits, json),
        Commands::Currency {
            amount,
            from,
            to,
            rates,
        } => {
            let converter = CurrencyConverter::new(load_rates(rates.as_deref())?);
            let quote = converter.quote_raw(&amount, &from, &to)?;
            println!(
                "{} {} = {} {}",
                quote.amount,
                quote.from,
                quote.converted_text(),
                quote.to
            );
            println!("{}", quote.rate_summary());
            Ok(())
        }
        Commands::Currencies { rates } => {
            for entry in load_rates(rates.as_deref())?.rates() {
                println!(
                    "{} {:<4} {:<20} {}",
                    entry.flag, entry.code, entry.name, entry.rate
                );
            }
            Ok(())
        }
        Commands::Emi {
            principal,
            annual_rate,
            years,
        } => {
            let quote = quote_emi_raw(&principal, &annual_rate, &years)?;
            println!("Monthly EMI: {}", quote.emi_text());
            println!("Total payment: {}", quote.total_payment_text());
            println!("Total interest: {}", quote.total_interest_text());
            Ok(())
        }
    }
}

fn run_land(sqft: &str, edits: &[String], json: bool) -> CliResult<()> {
    let start = AreaQuantity::from_sq_ft(toolkit_core::parse_or_zero(sqft))?;
    let mut converter = LandConverter::with_quantity(start);
    for edit in edits {
        let (field, value) = split_edit(edit)?;
        converter.apply_edit(field, value)?;
    }

    let text = converter.display().formatted();
    if json {
        println!("{}", serde_json::to_string_pretty(&text)?);
        return Ok(());
    }
    for field in LandField::ALL {
        println!("{:<7} {}", field.as_str(), text.get(field));
    }
    Ok(())
}

fn split_edit(edit: &str) -> CliResult<(&str, &str)> {
    edit.split_once('=')
        .ok_or_else(|| format!("edit `{edit}` must look like <field>=<value>").into())
}

fn load_rates(path: Option<&Path>) -> CliResult<RateTable> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            Ok(RateTable::from_json_str(&json)?)
        }
        None => Ok(RateTable::builtin()),
    }
}
