pub mod add;
pub mod config;
pub mod dashboard;
pub mod git;
pub mod list;
pub mod push;
pub mod set;
pub mod status;
pub mod weekly;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Open the interactive workout dashboard")]
    Dashboard,
    #[command(about = "Add progress to an exercise for today")]
    Add(add::AddArgs),
    #[command(about = "Set today's exact value for an exercise")]
    Set(set::SetArgs),
    #[command(about = "Show today's workout status")]
    Status,
    #[command(about = "List configured exercises")]
    List,
    #[command(about = "Add or redefine an exercise")]
    ConfigAdd(config::ConfigAddArgs),
    #[command(about = "Remove an exercise")]
    ConfigRemove(config::ConfigRemoveArgs),
    #[command(about = "Plan an exercise for a weekday")]
    WeeklyAdd(weekly::WeeklyAddArgs),
    #[command(about = "Unplan an exercise from a weekday")]
    WeeklyRemove(weekly::WeeklyRemoveArgs),
    #[command(about = "Show the weekly timetable")]
    WeeklyList(weekly::WeeklyListArgs),
    #[command(about = "Clear the weekly timetable")]
    WeeklyClear(weekly::WeeklyClearArgs),
    #[command(about = "Seed a day's log from the weekly plan")]
    WeeklyApply(weekly::WeeklyApplyArgs),
    #[command(about = "Commit and push workout data to the backup remote")]
    Push,
    #[command(about = "Initialize a git repository in the data directory")]
    GitInit,
    #[command(about = "Show git status of the data directory")]
    GitStatus,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command.unwrap_or(Commands::Dashboard) {
            Commands::Dashboard => dashboard::cmd(),
            Commands::Add(args) => add::cmd(args),
            Commands::Set(args) => set::cmd(args),
            Commands::Status => status::cmd(),
            Commands::List => list::cmd(),
            Commands::ConfigAdd(args) => config::cmd_add(args),
            Commands::ConfigRemove(args) => config::cmd_remove(args),
            Commands::WeeklyAdd(args) => weekly::cmd_add(args),
            Commands::WeeklyRemove(args) => weekly::cmd_remove(args),
            Commands::WeeklyList(args) => weekly::cmd_list(args),
            Commands::WeeklyClear(args) => weekly::cmd_clear(args),
            Commands::WeeklyApply(args) => weekly::cmd_apply(args),
            Commands::Push => push::cmd(),
            Commands::GitInit => git::cmd_init(),
            Commands::GitStatus => git::cmd_status(),
        }
    }
}
