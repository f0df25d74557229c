use clap::{Args, Parser, Subcommand};
use pitlane::model::Driver;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pitlane", bin_name = "pitlane", version)]
#[command(about = "Manage a roster of Formula 1 drivers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Roster file (overrides PITLANE_DATA and the configured data-file)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu (the default)
    #[command(display_order = 1)]
    Menu,

    /// Show all drivers
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Add a driver
    #[command(alias = "n", display_order = 3)]
    Add(AddArgs),

    /// Search drivers by name or team
    #[command(display_order = 4)]
    Search {
        /// Search words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// Show the top drivers by current season points
    #[command(display_order = 5)]
    Standings {
        /// How many drivers to show (defaults to the configured standings-size)
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },

    /// Change one field of a driver (team, season-points, age, podiums, championships)
    #[command(alias = "e", display_order = 6)]
    Edit {
        /// Racing number of the driver
        #[arg(allow_negative_numbers = true)]
        number: i64,

        /// Field to change
        field: String,

        /// New value
        value: String,
    },

    /// Delete a driver
    #[command(alias = "rm", display_order = 7)]
    Delete {
        /// Racing number of the driver
        #[arg(allow_negative_numbers = true)]
        number: i64,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Write the roster back to its file
    #[command(display_order = 8)]
    Save,

    /// Get or set configuration
    #[command(display_order = 9)]
    Config {
        /// Configuration key (data-file, standings-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Racing number (must be unused)
    #[arg(long, allow_negative_numbers = true)]
    pub number: i64,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub team: String,

    #[arg(long)]
    pub age: i64,

    #[arg(long)]
    pub nationality: String,

    #[arg(long)]
    pub podiums: i64,

    /// Grands Prix entered
    #[arg(long)]
    pub entries: i64,

    /// World championships won
    #[arg(long)]
    pub championships: i64,

    #[arg(long)]
    pub career_points: f64,

    #[arg(long)]
    pub season_points: f64,
}

impl From<AddArgs> for Driver {
    fn from(args: AddArgs) -> Self {
        Driver {
            number: args.number,
            name: args.name.trim().to_string(),
            team: args.team.trim().to_string(),
            age: args.age,
            nationality: args.nationality.trim().to_string(),
            podiums: args.podiums,
            entries: args.entries,
            championships: args.championships,
            career_points: args.career_points,
            season_points: args.season_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["pitlane"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_add_into_driver() {
        let cli = Cli::try_parse_from([
            "pitlane",
            "add",
            "--number",
            "44",
            "--name",
            "Lewis Hamilton",
            "--team",
            "Ferrari",
            "--age",
            "40",
            "--nationality",
            "British",
            "--podiums",
            "200",
            "--entries",
            "350",
            "--championships",
            "7",
            "--career-points",
            "5000",
            "--season-points",
            "120",
        ])
        .unwrap();
        let Some(Commands::Add(args)) = cli.command else {
            panic!("expected add");
        };
        let driver = Driver::from(args);
        assert_eq!(driver.number, 44);
        assert_eq!(driver.career_points, 5000.0);
    }

    #[test]
    fn add_rejects_non_numeric_age() {
        let parsed = Cli::try_parse_from([
            "pitlane", "add", "--number", "1", "--name", "X", "--team", "Y", "--age", "old",
            "--nationality", "Z", "--podiums", "0", "--entries", "0", "--championships", "0",
            "--career-points", "0", "--season-points", "0",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn search_joins_words() {
        let cli = Cli::try_parse_from(["pitlane", "search", "red", "bull"]).unwrap();
        let Some(Commands::Search { term }) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(term.join(" "), "red bull");
    }

    #[test]
    fn global_file_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["pitlane", "list", "--file", "grid.csv"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("grid.csv")));
    }
}
