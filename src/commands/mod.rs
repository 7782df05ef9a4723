// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod calendar;
pub mod doctor;
pub mod exporter;
pub mod reports;
pub mod suggest;
pub mod transactions;

use anyhow::Result;
use chrono::Local;
use clap::ArgMatches;

use crate::models::Month;

pub(crate) fn month_arg(m: &ArgMatches) -> Result<Option<Month>> {
    Ok(match m.get_one::<String>("month") {
        Some(s) => Some(s.parse::<Month>()?),
        None => None,
    })
}

pub(crate) fn month_or_current(m: &ArgMatches) -> Result<Month> {
    Ok(month_arg(m)?.unwrap_or_else(|| Month::of(Local::now().date_naive())))
}
