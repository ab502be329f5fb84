//! Generation input limits

use serde::Deserialize;

use super::error::ValidationError;

/// Maximum lengths accepted for each generation request field.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct GenerationLimits {
    #[serde(default = "default_title_max")]
    pub title_max_length: usize,

    #[serde(default = "default_objective_max")]
    pub objective_max_length: usize,

    #[serde(default = "default_data_max")]
    pub data_max_length: usize,

    #[serde(default = "default_return_max")]
    pub return_max_length: usize,
}

impl GenerationLimits {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let limits = [
            ("TITLE_MAX_LENGTH", self.title_max_length),
            ("OBJECTIVE_MAX_LENGTH", self.objective_max_length),
            ("DATA_MAX_LENGTH", self.data_max_length),
            ("RETURN_MAX_LENGTH", self.return_max_length),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(ValidationError::InvalidLengthLimit(name));
            }
        }
        Ok(())
    }
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            title_max_length: default_title_max(),
            objective_max_length: default_objective_max(),
            data_max_length: default_data_max(),
            return_max_length: default_return_max(),
        }
    }
}

fn default_title_max() -> usize {
    200
}

fn default_objective_max() -> usize {
    2000
}

fn default_data_max() -> usize {
    10_000
}

fn default_return_max() -> usize {
    200
}
