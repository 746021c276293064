use anyhow::{Result, bail};
use serde::Serialize;
use tracing::{debug, info, warn};

use custom_calendar::{CalendarDate, Weekday, days_in_month, is_leap_year, try_resolve_weekday};

use crate::cli::{LeapArgs, MonthArgs, OutputFormat, WeekdayArgs};

/// Outcome of resolving a single input date.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Resolution {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<Weekday>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run the `weekday` subcommand.
pub fn weekday(args: WeekdayArgs) -> Result<()> {
    let resolutions = resolve_all(&args.dates);

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&resolutions)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolutions)?),
    }

    let failed = resolutions.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        bail!("{failed} of {} dates could not be resolved", resolutions.len());
    }
    Ok(())
}

/// Run the `leap` subcommand.
pub fn leap(args: LeapArgs) -> Result<()> {
    for year in args.years {
        let kind = if is_leap_year(year) { "leap year" } else { "common year" };
        println!("{year}: {kind}");
    }
    Ok(())
}

/// Run the `month` subcommand.
pub fn month(args: MonthArgs) -> Result<()> {
    let first = CalendarDate::from_parts(args.year, args.month, 1)?;
    let length = days_in_month(args.year, args.month);
    info!(year = args.year, month = args.month, "resolving first day of month");

    println!("{:02}.{}: starts on {}, {length} days", args.month, args.year, first.weekday());
    Ok(())
}

pub(crate) fn resolve_all(dates: &[String]) -> Vec<Resolution> {
    dates
        .iter()
        .map(|date| match try_resolve_weekday(date) {
            Ok(weekday) => {
                debug!(%date, %weekday, "resolved");
                Resolution {
                    date:    date.clone(),
                    weekday: Some(weekday),
                    error:   None,
                }
            },
            Err(err) => {
                warn!(%date, "{err}");
                Resolution {
                    date:    date.clone(),
                    weekday: None,
                    error:   Some(err.to_string()),
                }
            },
        })
        .collect()
}

pub(crate) fn render_text(resolutions: &[Resolution]) -> String {
    resolutions
        .iter()
        .filter_map(|r| r.weekday.map(|weekday| format!("{}: {weekday}\n", r.date)))
        .collect()
}
