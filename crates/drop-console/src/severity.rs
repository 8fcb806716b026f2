//! Log severity classification

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Classification of a log event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Assertion,
    Error,
    Exception,
}

impl Severity {
    /// Whether entries of this severity are rendered without colour markup
    pub fn is_plain(self) -> bool {
        matches!(self, Severity::Info)
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info | log::Level::Debug | log::Level::Trace => Severity::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_log_level() {
        assert_eq!(Severity::from(log::Level::Error), Severity::Error);
        assert_eq!(Severity::from(log::Level::Warn), Severity::Warning);
        assert_eq!(Severity::from(log::Level::Info), Severity::Info);
        assert_eq!(Severity::from(log::Level::Debug), Severity::Info);
        assert_eq!(Severity::from(log::Level::Trace), Severity::Info);
    }

    #[test]
    fn test_only_info_is_plain() {
        let plain: Vec<Severity> = Severity::iter().filter(|s| s.is_plain()).collect();
        assert_eq!(plain, vec![Severity::Info]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Severity::Assertion.to_string(), "Assertion");
    }
}
