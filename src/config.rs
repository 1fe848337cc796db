use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use color_eyre::{eyre::Context, Result};
use serde_derive::{Deserialize, Serialize};

use crate::file_io;
use crate::logging::log_error;
use crate::time_interval::TimeInterval;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("{party} {id} has no hours")]
    EmptyHours { party: Party, id: String },
    #[error("{party} {id} lists {interval} more than once")]
    DuplicateHours {
        party: Party,
        id: String,
        interval: TimeInterval,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Party {
    Courier,
    Order,
}

/// Working hours per courier and delivery hours per order, keyed by id.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub couriers: BTreeMap<String, Vec<TimeInterval>>,
    #[serde(default)]
    pub orders: BTreeMap<String, Vec<TimeInterval>>,
}

/// A working-hours interval and a delivery-hours interval that share time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlap<'a> {
    pub courier: &'a str,
    pub order: &'a str,
    pub working: TimeInterval,
    pub delivery: TimeInterval,
    pub common: TimeInterval,
    pub minutes: u16,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let new_config: Self = file_io::load(path)
            .wrap_err(format!("Couldn't read hours from file {}", path.display()))?;

        new_config
            .check_correct()
            .wrap_err("Hours file has errors")?;

        Ok(new_config)
    }

    pub fn store(&self, path: &Path) {
        log_error(
            file_io::store(self, path),
            &format!("Couldn't store hours to {}", path.display()),
        );
    }

    pub fn check_correct(&self) -> Result<(), Error> {
        check_hours(Party::Courier, &self.couriers)?;
        check_hours(Party::Order, &self.orders)
    }

    /// Every courier/order interval pair with a non-empty intersection.
    pub fn overlaps(&self) -> impl Iterator<Item = Overlap<'_>> + '_ {
        self.couriers.iter().flat_map(move |(courier, working_hours)| {
            self.orders.iter().flat_map(move |(order, delivery_hours)| {
                working_hours.iter().flat_map(move |working| {
                    delivery_hours.iter().filter_map(move |delivery| {
                        let (common, minutes) = working.intersect(delivery);
                        (minutes > 0).then(|| Overlap {
                            courier: courier.as_str(),
                            order: order.as_str(),
                            working: *working,
                            delivery: *delivery,
                            common,
                            minutes,
                        })
                    })
                })
            })
        })
    }
}

fn check_hours(
    party: Party,
    hours: &BTreeMap<String, Vec<TimeInterval>>,
) -> Result<(), Error> {
    for (id, intervals) in hours {
        if intervals.is_empty() {
            return Err(Error::EmptyHours {
                party,
                id: id.clone(),
            });
        }

        let mut seen = HashSet::new();
        for interval in intervals {
            if !seen.insert(interval.to_string()) {
                return Err(Error::DuplicateHours {
                    party,
                    id: id.clone(),
                    interval: *interval,
                });
            }
        }
    }

    Ok(())
}
