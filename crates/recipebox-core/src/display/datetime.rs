//! Timestamp formatting for recipe cards.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Shows a recipe's post or edit date in the system timezone, as
/// `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl LocalDateTime<'_> {
    /// Format against an explicit zone instead of the system one.
    pub fn in_zone(&self, zone: TimeZone) -> String {
        self.0.to_zoned(zone).strftime("%Y-%m-%d %H:%M:%S %Z").to_string()
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.in_zone(TimeZone::system()))
    }
}
