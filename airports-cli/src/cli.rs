use std::path::PathBuf;

use airports_core::{
    AirportCatalog, Config, CountrySource, PromptError, Prompter, SearchLoop,
    provider::{country_source_from_config, schedule_source_from_config},
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, Text};

use crate::console::{ConsoleRenderer, InquirePrompter};

const COUNTRY_PROMPT: &str = "Search for a country";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "airports", version, about = "Airport departures lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log verbosity; logs are written to stderr.
    #[arg(long, global = true, default_value_t = log::LevelFilter::Warn)]
    pub log_level: log::LevelFilter,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the AirLabs API key (and optionally the dataset path).
    Configure,

    /// Search airports by name and show their departures, until Esc / Ctrl-C.
    Search {
        /// Airport dataset (JSON array); defaults to the configured path or ./airports.json.
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// AirLabs API key; overrides the configured one.
        #[arg(long, env = "AIRLABS_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Also write every rendered table to a timestamped file in this directory.
        #[arg(long)]
        save_dir: Option<PathBuf>,
    },

    /// Look up a country's capital and currency, until Esc / Ctrl-C.
    Countries,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        match self.command {
            Command::Configure => configure(config),
            Command::Search { dataset, api_key, save_dir } => {
                search(config, dataset, api_key, save_dir).await
            }
            Command::Countries => countries(&config).await,
        }
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let api_key = Password::new("AirLabs API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key.trim().to_string());

    let current = config.airports_path();
    let dataset = Text::new("Airport dataset path:")
        .with_default(&current.display().to_string())
        .prompt()
        .context("Failed to read dataset path")?;
    config.airports_path = Some(PathBuf::from(dataset.trim()));

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}

async fn search(
    config: Config,
    dataset: Option<PathBuf>,
    api_key: Option<String>,
    save_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let api_key = config.resolve_api_key(api_key.as_deref())?;
    let catalog = AirportCatalog::load(dataset.unwrap_or_else(|| config.airports_path()))?;
    let schedules = schedule_source_from_config(&config, api_key)?;

    banner("Welcome to the Airports Informer Tool", "✈️ ✈️ ✈️ ✈️ ✈️ ✈️ ✈️ ✈️");

    let mut search = SearchLoop::new(
        catalog,
        schedules,
        InquirePrompter,
        ConsoleRenderer::new(save_dir),
    );
    search.run().await?;

    println!("Goodbye!");
    Ok(())
}

async fn countries(config: &Config) -> anyhow::Result<()> {
    let source = country_source_from_config(config)?;
    let mut prompter = InquirePrompter;

    banner("Welcome to the REST Countries Searcher", "####################");

    while let Some(entry) = next_query(&mut prompter, COUNTRY_PROMPT)? {
        println!("You searched for: {entry}");
        println!("Fetching...");
        println!();

        match source.fetch_country(&entry).await {
            Ok(country) => println!("{country}"),
            Err(err) => eprintln!("{:#}", anyhow::Error::from(err)),
        }
        println!();
    }

    Ok(())
}

/// `None` once the user cancels the prompt.
fn next_query(prompter: &mut dyn Prompter, message: &str) -> anyhow::Result<Option<String>> {
    match prompter.ask(message) {
        Ok(entry) => Ok(Some(entry)),
        Err(PromptError::Cancelled) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn banner(title: &str, rule: &str) {
    println!();
    println!("{rule}");
    println!("{title}");
    println!("{rule}");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_flags_parse() {
        let cli = Cli::try_parse_from([
            "airports",
            "search",
            "--dataset",
            "data/airports.json",
            "--api-key",
            "KEY",
            "--save-dir",
            "out",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.log_level, log::LevelFilter::Debug);
        match cli.command {
            Command::Search { dataset, api_key, save_dir } => {
                assert_eq!(dataset, Some(PathBuf::from("data/airports.json")));
                assert_eq!(api_key.as_deref(), Some("KEY"));
                assert_eq!(save_dir, Some(PathBuf::from("out")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn log_level_defaults_to_warn() {
        let cli = Cli::try_parse_from(["airports", "countries"]).unwrap();

        assert_eq!(cli.log_level, log::LevelFilter::Warn);
        assert!(matches!(cli.command, Command::Countries));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["airports"]).is_err());
    }
}
