//! Configuration system for GroupForge.
//!
//! Load grouping configuration from TOML or YAML files to control group
//! sizing, the rating scale and optional improvement phases without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use groupforge_config::{GroupSizing, GroupingConfig};
//!
//! let config = GroupingConfig::from_toml_str(r#"
//!     group_size = 3
//!     random_seed = 7
//!
//!     [rating_scale]
//!     min = 1
//!     max = 5
//!     neutral = 3
//!
//!     [[phases]]
//!     type = "local_search"
//!     [phases.acceptor]
//!     type = "late_acceptance"
//!     late_acceptance_size = 50
//!     [phases.termination]
//!     step_count_limit = 1000
//! "#).unwrap();
//!
//! assert_eq!(config.sizing().unwrap(), GroupSizing::Size(3));
//! assert_eq!(config.group_size_for(10).unwrap(), 3);
//! assert_eq!(config.phases.len(), 1);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use groupforge_config::GroupingConfig;
//!
//! let config = GroupingConfig::load("groupforge.toml").unwrap_or_default();
//! assert_eq!(config.group_size_for(8).unwrap(), 4);
//! ```

use std::path::Path;
use std::time::Duration;

use groupforge_core::RatingScale;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Group size used when neither `group_size` nor `group_count` is set.
pub const DEFAULT_GROUP_SIZE: usize = 4;

/// Seed used by improvement phases when `random_seed` is not set.
pub const DEFAULT_RANDOM_SEED: u64 = 0;

/// Late acceptance history length when not configured.
pub const DEFAULT_LATE_ACCEPTANCE_SIZE: usize = 100;

/// Step limit for a local search phase without a termination section.
pub const DEFAULT_STEP_COUNT_LIMIT: u64 = 10_000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// How the number of people per group is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSizing {
    /// Fixed number of people per group.
    Size(usize),
    /// Fixed number of groups; the size is `ceil(n / count)`.
    Count(usize),
}

impl GroupSizing {
    /// Resolves the group size for `people` entities.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero size or zero count.
    pub fn group_size_for(self, people: usize) -> Result<usize, ConfigError> {
        match self {
            GroupSizing::Size(0) => Err(ConfigError::Invalid(
                "group size must be at least 1".to_string(),
            )),
            GroupSizing::Size(size) => Ok(size),
            GroupSizing::Count(0) => Err(ConfigError::Invalid(
                "group count must be at least 1".to_string(),
            )),
            GroupSizing::Count(count) => Ok(people.div_ceil(count).max(1)),
        }
    }
}

impl Default for GroupSizing {
    fn default() -> Self {
        GroupSizing::Size(DEFAULT_GROUP_SIZE)
    }
}

/// Main grouping configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GroupingConfig {
    /// People per group. Mutually exclusive with `group_count`.
    #[serde(default)]
    pub group_size: Option<usize>,

    /// Number of groups. Mutually exclusive with `group_size`.
    #[serde(default)]
    pub group_count: Option<usize>,

    /// Rating bounds and the neutral value for unrated pairs.
    #[serde(default)]
    pub rating_scale: RatingScale,

    /// Random seed for improvement phases.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Improvement phases run after the greedy construction.
    #[serde(default)]
    pub phases: Vec<PhaseConfig>,
}

impl GroupingConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a TOML or YAML file depending on its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Sets a fixed group size, clearing any group count.
    pub fn with_group_size(mut self, size: usize) -> Self {
        self.group_size = Some(size);
        self.group_count = None;
        self
    }

    /// Sets a fixed group count, clearing any group size.
    pub fn with_group_count(mut self, count: usize) -> Self {
        self.group_count = Some(count);
        self.group_size = None;
        self
    }

    pub fn with_rating_scale(mut self, scale: RatingScale) -> Self {
        self.rating_scale = scale;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Adds a phase configuration.
    pub fn with_phase(mut self, phase: PhaseConfig) -> Self {
        self.phases.push(phase);
        self
    }

    /// Returns the configured sizing strategy.
    pub fn sizing(&self) -> Result<GroupSizing, ConfigError> {
        match (self.group_size, self.group_count) {
            (Some(_), Some(_)) => Err(ConfigError::Invalid(
                "group_size and group_count are mutually exclusive".to_string(),
            )),
            (Some(size), None) => Ok(GroupSizing::Size(size)),
            (None, Some(count)) => Ok(GroupSizing::Count(count)),
            (None, None) => Ok(GroupSizing::default()),
        }
    }

    /// Resolves the group size for `people` entities.
    pub fn group_size_for(&self, people: usize) -> Result<usize, ConfigError> {
        self.sizing()?.group_size_for(people)
    }

    pub fn seed(&self) -> u64 {
        self.random_seed.unwrap_or(DEFAULT_RANDOM_SEED)
    }

    /// Checks the configuration for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Only `Count` depends on the person count.
        self.group_size_for(1)?;

        if !self.rating_scale.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "rating scale {}..={} must contain neutral {}",
                self.rating_scale.min, self.rating_scale.max, self.rating_scale.neutral
            )));
        }

        for phase in &self.phases {
            let PhaseConfig::LocalSearch(local_search) = phase;
            if let Some(AcceptorConfig::LateAcceptance(late)) = &local_search.acceptor {
                if late.late_acceptance_size == Some(0) {
                    return Err(ConfigError::Invalid(
                        "late_acceptance_size must be at least 1".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Phase configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PhaseConfig {
    /// Swap-based local search phase.
    LocalSearch(LocalSearchConfig),
}

/// Local search configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LocalSearchConfig {
    /// Acceptor configuration. Defaults to late acceptance.
    pub acceptor: Option<AcceptorConfig>,

    /// Phase termination configuration.
    pub termination: Option<TerminationConfig>,
}

impl LocalSearchConfig {
    /// Returns the configured step limit or [`DEFAULT_STEP_COUNT_LIMIT`].
    pub fn step_count_limit(&self) -> u64 {
        self.termination
            .as_ref()
            .and_then(|t| t.step_count_limit)
            .unwrap_or(DEFAULT_STEP_COUNT_LIMIT)
    }
}

/// Acceptor configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AcceptorConfig {
    /// Only accept moves that do not lower the score.
    HillClimbing,

    /// Late acceptance acceptor.
    LateAcceptance(LateAcceptanceConfig),
}

/// Late acceptance configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LateAcceptanceConfig {
    /// Size of late acceptance list.
    pub late_acceptance_size: Option<usize>,
}

impl LateAcceptanceConfig {
    pub fn size(&self) -> usize {
        self.late_acceptance_size
            .unwrap_or(DEFAULT_LATE_ACCEPTANCE_SIZE)
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum number of steps.
    pub step_count_limit: Option<u64>,

    /// Maximum consecutive steps without a new best score.
    pub unimproved_step_count_limit: Option<u64>,

    /// Maximum seconds to spend. Runs bounded by time are not reproducible.
    pub seconds_spent_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        self.seconds_spent_limit.map(Duration::from_secs)
    }
}
