use std::env;

use business::domain::controller::state::LookupOrdering;

use super::error::ConfigError;

#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    pub ordering: LookupOrdering,
}

impl ControllerConfig {
    /// Environment variables:
    /// - LOOKUP_ORDERING: "latest-issued" (default) or "last-completed"
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(env::var("LOOKUP_ORDERING").ok())
    }

    pub fn from_value(ordering: Option<String>) -> Result<Self, ConfigError> {
        let ordering = match ordering {
            Some(raw) => raw
                .trim()
                .parse::<LookupOrdering>()
                .map_err(ConfigError::InvalidLookupOrdering)?,
            None => LookupOrdering::default(),
        };

        Ok(Self { ordering })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_latest_issued() {
        let config = ControllerConfig::from_value(None).unwrap();

        assert_eq!(config.ordering, LookupOrdering::LatestIssued);
    }

    #[test]
    fn should_parse_last_completed() {
        let config = ControllerConfig::from_value(Some("last-completed".to_string())).unwrap();

        assert_eq!(config.ordering, LookupOrdering::LastCompleted);
    }

    #[test]
    fn should_reject_unknown_ordering() {
        assert!(ControllerConfig::from_value(Some("fifo".to_string())).is_err());
    }
}
