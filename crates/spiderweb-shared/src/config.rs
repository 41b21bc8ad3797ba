//! Configuration types for the Spider Web system

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use spiderweb_domain::{User, UserId, UserRole, DEFAULT_LOG_CAPACITY};

use crate::error::{Result, SpiderWebError};

/// Top-level configuration file (`spiderweb.json` / `spiderweb.yaml`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpiderWebConfig {
    /// The operator whose session this is
    pub operator: OperatorConfig,

    /// How many audit entries the dashboard keeps, at most 50
    pub log_capacity: usize,

    pub autopilot: AutopilotConfig,

    /// Places-shaped JSON file served by the offline lead discovery
    pub discovery_fixture: Option<PathBuf>,
}

impl Default for SpiderWebConfig {
    fn default() -> Self {
        Self {
            operator: OperatorConfig::default(),
            log_capacity: DEFAULT_LOG_CAPACITY,
            autopilot: AutopilotConfig::default(),
            discovery_fixture: None,
        }
    }
}

/// Opening state of the operator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperatorConfig {
    pub id: String,
    pub name: String,
    pub role: OperatorRole,
    pub score: i64,
    pub wallet: i64,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            id: "u1".to_string(),
            name: "Alex Sales".to_string(),
            role: OperatorRole::Staff,
            score: 100,
            wallet: 500,
        }
    }
}

impl OperatorConfig {
    /// Build the session's opening user record
    pub fn to_user(&self) -> User {
        User::new(UserId::new(self.id.clone()), self.name.clone(), self.role.into())
            .with_score(self.score)
            .with_wallet(self.wallet)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorRole {
    Admin,
    Manager,
    #[default]
    Staff,
}

impl From<OperatorRole> for UserRole {
    fn from(role: OperatorRole) -> Self {
        match role {
            OperatorRole::Admin => UserRole::Admin,
            OperatorRole::Manager => UserRole::Manager,
            OperatorRole::Staff => UserRole::Staff,
        }
    }
}

/// Background AI worker settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutopilotConfig {
    pub enabled: bool,
    pub interval_secs: u64,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 15,
        }
    }
}

impl AutopilotConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl SpiderWebConfig {
    /// Load configuration from a JSON or YAML file (by extension)
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let config: Self = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the runtime cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.log_capacity == 0 || self.log_capacity > DEFAULT_LOG_CAPACITY {
            return Err(SpiderWebError::Config(format!(
                "logCapacity must be between 1 and {}",
                DEFAULT_LOG_CAPACITY
            )));
        }
        if self.autopilot.enabled && self.autopilot.interval_secs == 0 {
            return Err(SpiderWebError::Config(
                "autopilot.intervalSecs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_demo_operator() {
        let config = SpiderWebConfig::default();
        let user = config.operator.to_user();

        assert_eq!(user.id().as_str(), "u1");
        assert_eq!(user.name(), "Alex Sales");
        assert_eq!(user.role(), UserRole::Staff);
        assert_eq!(user.score(), 100);
        assert_eq!(user.wallet(), 500);
        assert_eq!(config.log_capacity, 50);
        assert_eq!(config.autopilot.interval(), Duration::from_secs(15));
    }

    #[test]
    fn test_config_parse_partial_json() {
        let json = r#"{
            "operator": { "name": "Minh Tran", "role": "manager" },
            "autopilot": { "enabled": false }
        }"#;

        let config: SpiderWebConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.operator.name, "Minh Tran");
        assert_eq!(config.operator.role, OperatorRole::Manager);
        assert_eq!(config.operator.score, 100);
        assert!(!config.autopilot.enabled);
        assert_eq!(config.autopilot.interval_secs, 15);
    }

    #[test]
    fn test_from_file_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "logCapacity: 20\nautopilot:\n  intervalSecs: 5").unwrap();

        let config = SpiderWebConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_capacity, 20);
        assert_eq!(config.autopilot.interval_secs, 5);
    }

    #[test]
    fn test_from_file_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"discoveryFixture": "fixtures/places.json"}}"#).unwrap();

        let config = SpiderWebConfig::from_file(file.path()).unwrap();
        assert_eq!(
            config.discovery_fixture,
            Some(PathBuf::from("fixtures/places.json"))
        );
    }

    #[test]
    fn test_zero_log_capacity_rejected() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"logCapacity": 0}}"#).unwrap();

        let err = SpiderWebConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, SpiderWebError::Config(_)));
    }

    #[test]
    fn test_log_capacity_above_default_rejected() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"logCapacity": 200}}"#).unwrap();

        let err = SpiderWebConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, SpiderWebError::Config(_)));

        let mut config = SpiderWebConfig::default();
        config.log_capacity = DEFAULT_LOG_CAPACITY;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_rejected_only_when_enabled() {
        let mut config = SpiderWebConfig::default();
        config.autopilot.interval_secs = 0;
        assert!(config.validate().is_err());

        config.autopilot.enabled = false;
        assert!(config.validate().is_ok());
    }
}
