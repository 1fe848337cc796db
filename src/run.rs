use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::{eyre::Context, Result};
use jiff::Zoned;
use log::{debug, info};

use crate::config::Config;
use crate::file_io;
use crate::minute::Minute;
use crate::report::{self, IntervalReport};
use crate::time_interval::TimeInterval;

/// Working-hours and delivery-hours arithmetic on the 24 hour clock.
#[derive(Parser, Debug)]
#[command(name = "courier-hours", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse an HH:MM-HH:MM interval and show its bounds and duration
    Parse {
        interval: TimeInterval,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether a time of day falls inside an interval
    Contains {
        interval: TimeInterval,
        /// Time of day to check (HH:MM), defaults to the current local time
        #[arg(long)]
        at: Option<Minute>,
    },
    /// Show the overlap of two intervals
    Intersect {
        first: TimeInterval,
        second: TimeInterval,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate an hours file
    Check {
        path: PathBuf,
        /// Rewrite the file in canonical form
        #[arg(long)]
        normalize: bool,
    },
    /// List every courier/order pair of intervals that share time
    Overlaps { path: PathBuf },
}

pub fn run(cli: Cli) -> Result<()> {
    for line in execute(cli.command)? {
        println!("{line}");
    }
    Ok(())
}

fn execute(command: Command) -> Result<Vec<String>> {
    let lines = match command {
        Command::Parse { interval, json } => {
            vec![interval_output(interval, interval.duration(), json)?]
        }
        Command::Contains { interval, at } => {
            let point = at.unwrap_or_else(|| Minute::of(&Zoned::now()));
            debug!("Checking {point} against {interval}");
            let verdict = if interval.contains(point) {
                "inside"
            } else {
                "outside"
            };
            vec![format!("{point} is {verdict} {interval}")]
        }
        Command::Intersect {
            first,
            second,
            json,
        } => {
            let (common, minutes) = first.intersect(&second);
            vec![interval_output(common, minutes, json)?]
        }
        Command::Check { path, normalize } => {
            let config = Config::load(&path)?;
            info!(
                "{} holds {} couriers and {} orders",
                path.display(),
                config.couriers.len(),
                config.orders.len()
            );
            if normalize {
                config.store(&path);
            }
            vec![format!("{} is valid", path.display())]
        }
        Command::Overlaps { path } => {
            Config::load(&path)?
                .overlaps()
                .map(|overlap| report::describe_overlap(&overlap))
                .collect()
        }
    };

    Ok(lines)
}

fn interval_output(interval: TimeInterval, minutes: u16, json: bool) -> Result<String> {
    if json {
        file_io::to_string(&IntervalReport::new(interval, minutes))
            .wrap_err("Couldn't serialize interval report")
    } else {
        Ok(report::describe(&interval, minutes))
    }
}
