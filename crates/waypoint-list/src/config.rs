//! List Configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Points rendered by `init`
pub const INITIAL_COUNT_OF_POINTS: usize = 6;
/// Points revealed by each load-more activation
pub const POINT_COUNT_PER_STEP: usize = 1;

/// What happens to other open forms when a point is opened for editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditPolicy {
    /// Every point edits on its own; several forms may be open at once
    #[default]
    Independent,
    /// Opening a form closes every other open form first
    Exclusive,
}

/// Paging and editing settings for a [`ListPresenter`](crate::presenter::ListPresenter)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub initial_count: usize,
    pub step: usize,
    pub edit_policy: EditPolicy,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            initial_count: INITIAL_COUNT_OF_POINTS,
            step: POINT_COUNT_PER_STEP,
            edit_policy: EditPolicy::default(),
        }
    }
}

impl ListConfig {
    /// Parse from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ListConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step == 0 {
            return Err(ConfigError::Invalid("step must be at least 1".to_string()));
        }
        Ok(())
    }
}
