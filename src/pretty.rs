// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

//! Human readable renderings of image metadata

use std::fmt::{Display, Formatter, Result};

/// A byte count in binary units, truncated to an integer
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Size(pub u64);

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

        let mut size = self.0;
        let mut unit = 0;
        while size > 1024 && unit + 1 < UNITS.len() {
            size /= 1024;
            unit += 1;
        }

        write!(f, "{} {}", size, UNITS[unit])
    }
}

/// A creation timestamp reduced to its date and time of day
///
/// `2018-06-12T09:21:34.123456789Z` is shown as `2018-06-12 09:21:34`, as
/// is `2018-06-12T09:21:34+02:00`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Created<'a>(pub &'a str);

impl Display for Created<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.0.is_empty() {
            return f.write_str("-");
        }

        // Fractions and any zone designator follow the time of day.
        match self.0.split_once('T') {
            Some((date, time)) => {
                let end = time
                    .find(|c| matches!(c, '.' | 'Z' | '+' | '-'))
                    .unwrap_or(time.len());
                write!(f, "{} {}", date, &time[..end])
            }
            None => f.write_str(self.0),
        }
    }
}
