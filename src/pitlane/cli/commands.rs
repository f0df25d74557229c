use super::menu;
use super::render::{print_messages, render_driver_table, render_search_hits, render_standings};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use pitlane::api::{self, is_affirmative, ConfigAction, PitlaneApi};
use pitlane::config::PitlaneConfig;
use pitlane::error::{PitlaneError, Result};
use pitlane::model::Driver;
use pitlane::store::fs::CsvFileStore;
use pitlane::store::DataStore;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const CONFIG_DIR_ENV: &str = "PITLANE_CONFIG_DIR";
const DATA_FILE_ENV: &str = "PITLANE_DATA";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = config_dir()?;

    // Config never touches the roster file.
    if let Some(Commands::Config { key, value }) = cli.command {
        return handle_config(&config_dir, key, value);
    }

    let (mut api, startup) = init_context(&cli, &config_dir)?;
    print_messages(&startup.messages);

    match cli.command {
        None | Some(Commands::Menu) => menu::run(&mut api),
        Some(Commands::List) => handle_list(&api),
        Some(Commands::Add(args)) => {
            let result = api.add_driver(Driver::from(args))?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Search { term }) => handle_search(&api, &term.join(" ")),
        Some(Commands::Standings { top }) => handle_standings(&api, top),
        Some(Commands::Edit {
            number,
            field,
            value,
        }) => {
            let result = api.edit_driver(number, &field, &value)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Delete { number, yes }) => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut confirm = |driver: &Driver| yes || ask_delete(&mut input, driver);
            let result = api.delete_driver(number, &mut confirm)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Save) => {
            let result = api.save_now()?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "pitlane=debug" } else { "pitlane=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "pitlane", "pitlane")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PitlaneError::Config("Could not determine config dir".to_string()))
}

fn init_context(
    cli: &Cli,
    config_dir: &Path,
) -> Result<(PitlaneApi<CsvFileStore>, api::CmdResult)> {
    let config = PitlaneConfig::load(config_dir)?;

    let data_file = cli
        .file
        .clone()
        .or_else(|| std::env::var_os(DATA_FILE_ENV).map(PathBuf::from))
        .unwrap_or_else(|| config.data_file.clone());
    tracing::debug!(path = %data_file.display(), config = %config_dir.display(), "starting session");

    PitlaneApi::open(CsvFileStore::new(data_file), config)
}

pub(super) fn handle_list<S: DataStore>(api: &PitlaneApi<S>) -> Result<()> {
    let result = api.list_drivers()?;
    print!("{}", render_driver_table(&result.listed_drivers));
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_search<S: DataStore>(api: &PitlaneApi<S>, term: &str) -> Result<()> {
    let result = api.search_drivers(term)?;
    print!("{}", render_search_hits(&result.listed_drivers));
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_standings<S: DataStore>(api: &PitlaneApi<S>, top: Option<usize>) -> Result<()> {
    let result = api.standings(top)?;
    print!("{}", render_standings(&result.listed_drivers));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key.parse()?),
        (Some(key), Some(value)) => ConfigAction::Set(key.parse()?, value),
    };
    let result = api::config(config_dir, action)?;
    print_messages(&result.messages);
    Ok(())
}

/// Ask before deleting. EOF or a read error counts as "no".
pub(super) fn ask_delete<R: BufRead>(input: &mut R, driver: &Driver) -> bool {
    print!("Delete #{} {}? [y/N]: ", driver.number, driver.name);
    let _ = io::stdout().flush();
    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) | Err(_) => false,
        Ok(_) => is_affirmative(&answer),
    }
}
