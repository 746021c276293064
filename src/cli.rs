use clap::{Parser, Subcommand, ValueEnum};

/// Weekday lookup for the thirteen-month calendar.
#[derive(Parser, Debug)]
#[command(
    name = "custom-calendar",
    version,
    about = "Weekday lookup for a thirteen-month calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the weekday of one or more `dd.mm.yyyy` dates.
    Weekday(WeekdayArgs),
    /// Report whether years are leap years.
    Leap(LeapArgs),
    /// Show the first weekday and length of a month.
    Month(MonthArgs),
}

/// Output format for the `weekday` subcommand.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `date: weekday` line per input.
    #[default]
    Text,
    /// A single JSON array.
    Json,
}

/// Arguments for the `weekday` subcommand.
#[derive(clap::Args, Debug)]
pub struct WeekdayArgs {
    /// Dates in `dd.mm.yyyy` form.
    #[arg(required = true)]
    pub dates: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `leap` subcommand.
#[derive(clap::Args, Debug)]
pub struct LeapArgs {
    /// Years to check.
    #[arg(required = true, allow_negative_numbers = true)]
    pub years: Vec<i64>,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args, Debug)]
pub struct MonthArgs {
    /// Month number (1-13).
    #[arg(value_parser = clap::value_parser!(u8).range(1..=13))]
    pub month: u8,

    /// Year.
    #[arg(allow_negative_numbers = true)]
    pub year: i64,
}
