//! Display of submission alerts.

use std::fmt;

use crate::submission::{Alert, AlertSeverity, SubmissionState};

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::Success => write!(f, "Success:"),
            AlertSeverity::Error => write!(f, "Error:"),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.severity, self.message)
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alert() {
            Some(alert) => write!(f, "{alert}"),
            None => writeln!(f, "Submission {}", self.as_str()),
        }
    }
}
