//! UCT Configuration
//!
//! All tunable parameters of the search. The defaults reproduce the plain UCT rule:
//! exploration coefficient 1, square-root widening, and node creation on the first
//! visit of a pending edge.

use crate::mcts::progressive_widening::ProgressiveWideningConfig;
use crate::{Result, UctError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// UCT search configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UctConfig {
    /// Visits a pending edge needs before its state gets its own node.
    /// 1 creates the node on the first visit.
    /// Default: 1
    pub creation_threshold: u64,

    /// Maximum number of tree moves in one simulation.
    /// Default: 100
    pub max_depth: usize,

    /// Optional cap on the number of actions a node keeps (best-ranked first).
    /// Default: None
    pub max_actions: Option<usize>,

    /// Multiplier of the exploration term of the bandit score.
    /// Default: 1.0
    pub exploration: f64,

    /// Progressive widening rule
    pub widening: ProgressiveWideningConfig,

    /// Thinking time per move used by the UCT strategy, in milliseconds.
    /// Default: 10
    pub think_time_ms: u64,
}

impl Default for UctConfig {
    fn default() -> Self {
        Self {
            creation_threshold: 1,
            max_depth: 100,
            max_actions: None,
            exploration: 1.0,
            widening: ProgressiveWideningConfig::default(),
            think_time_ms: 10,
        }
    }
}

impl UctConfig {
    /// Loads and validates a JSON configuration. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: UctConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Checks the capacity constants before any search runs.
    pub fn validate(&self) -> Result<()> {
        if self.creation_threshold == 0 {
            return Err(UctError::InvalidConfig(
                "creation_threshold must be at least 1".to_string(),
            ));
        }
        if self.max_depth == 0 {
            return Err(UctError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        if self.max_actions == Some(0) {
            return Err(UctError::InvalidConfig(
                "max_actions must be at least 1 when set".to_string(),
            ));
        }
        if !(self.exploration >= 0.0) || !self.exploration.is_finite() {
            return Err(UctError::InvalidConfig(format!(
                "exploration must be a non-negative number, got {}",
                self.exploration
            )));
        }
        self.widening.validate().map_err(UctError::InvalidConfig)
    }

    /// Create a configuration string for logging
    pub fn to_config_string(&self) -> String {
        format!(
            "quota[{}]_depth[{}]_actions[{}]_explore[{:.2}]_pw[{:.2},{:.2},{}]_time[{}ms]",
            self.creation_threshold,
            self.max_depth,
            self.max_actions
                .map_or_else(|| "all".to_string(), |cap| cap.to_string()),
            self.exploration,
            self.widening.c_constant,
            self.widening.alpha,
            self.widening.min_actions,
            self.think_time_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn test_default_is_valid() {
        let config = UctConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.creation_threshold, 1);
        assert_eq!(config.max_depth, 100);
    }

    #[test]
    fn test_zero_quota_rejected() {
        let config = UctConfig {
            creation_threshold: 0,
            ..Default::default()
        };
        assert_matches!(config.validate(), Err(UctError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_depth_and_zero_cap_rejected() {
        let shallow = UctConfig {
            max_depth: 0,
            ..Default::default()
        };
        assert_matches!(shallow.validate(), Err(UctError::InvalidConfig(_)));

        let capped = UctConfig {
            max_actions: Some(0),
            ..Default::default()
        };
        assert_matches!(capped.validate(), Err(UctError::InvalidConfig(_)));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: UctConfig =
            serde_json::from_str(r#"{"creation_threshold": 4, "widening": {"alpha": 0.25}}"#)
                .unwrap();
        assert_eq!(config.creation_threshold, 4);
        assert_eq!(config.max_depth, 100);
        assert_eq!(config.widening.alpha, 0.25);
        assert_eq!(config.widening.c_constant, 1.0);
    }

    #[test]
    fn test_json_file_round_trip_and_validation() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("uct.json");

        let config = UctConfig {
            creation_threshold: 3,
            max_actions: Some(12),
            ..Default::default()
        };
        config.to_json_file(&path)?;
        assert_eq!(UctConfig::from_json_file(&path)?, config);

        fs::write(&path, r#"{"max_depth": 0}"#)?;
        assert_matches!(
            UctConfig::from_json_file(&path),
            Err(UctError::InvalidConfig(_))
        );
        Ok(())
    }

    #[test]
    fn test_config_string() {
        let config = UctConfig::default();
        let text = config.to_config_string();
        assert!(text.contains("quota[1]"));
        assert!(text.contains("actions[all]"));
        assert!(text.contains("pw[1.00,0.50,1]"));
    }
}
