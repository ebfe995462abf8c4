use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
    #[error("range '{name}' is empty or not finite: [{lower}, {upper}]")]
    InvalidRange {
        name: &'static str,
        lower: f64,
        upper: f64
    }
}

/// Parameters of the generator/integrator hand-off.
///
/// Every field is optional in the JSON document:
///
/// ```json
/// {
///     "task_count": 100,
///     "base_range": [1.0, 10.0],
///     "left_range": [0.0, 100.0],
///     "right_range": [100.0, 200.0],
///     "step_range": [0.0, 1.0],
///     "seed": 42
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Configuration {
    task_count: usize,
    base_range: (f64, f64),
    left_range: (f64, f64),
    right_range: (f64, f64),
    step_range: (f64, f64),
    seed: u64
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            task_count: 100,
            base_range: (1.0, 10.0),
            left_range: (0.0, 100.0),
            right_range: (100.0, 200.0),
            step_range: (0.0, 1.0),
            seed: 42
        }
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn from_reader(file_path: &str) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let configuration: Configuration = serde_json::from_reader(reader)?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        let configuration: Configuration = serde_json::from_str(json)?;
        configuration.validate()?;
        Ok(configuration)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        let ranges = [
            ("base_range", self.base_range),
            ("left_range", self.left_range),
            ("right_range", self.right_range),
            ("step_range", self.step_range)
        ];
        for (name, (lower, upper)) in ranges {
            if !(lower.is_finite() && upper.is_finite() && lower <= upper) {
                return Err(ConfigurationError::InvalidRange { name, lower, upper });
            }
        }
        Ok(())
    }

    pub fn with_task_count(mut self, task_count: usize) -> Configuration {
        self.task_count = task_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Configuration {
        self.seed = seed;
        self
    }

    pub fn task_count(&self) -> usize {
        self.task_count
    }

    pub fn base_range(&self) -> (f64, f64) {
        self.base_range
    }

    pub fn left_range(&self) -> (f64, f64) {
        self.left_range
    }

    pub fn right_range(&self) -> (f64, f64) {
        self.right_range
    }

    pub fn step_range(&self) -> (f64, f64) {
        self.step_range
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let configuration = Configuration::from_json_str(r#"{ "task_count": 5, "step_range": [0.1, 0.2] }"#).unwrap();
        assert_eq!(configuration.task_count(), 5);
        assert_eq!(configuration.step_range(), (0.1, 0.2));
        assert_eq!(configuration.base_range(), (1.0, 10.0));
        assert_eq!(configuration.seed(), 42);
    }

    #[test]
    fn rejects_inverted_range() {
        let result = Configuration::from_json_str(r#"{ "left_range": [5.0, 1.0] }"#);
        assert!(matches!(result, Err(ConfigurationError::InvalidRange { name: "left_range", .. })));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Configuration::from_json_str(r#"{ "task_count": "many" }"#),
            Err(ConfigurationError::JsonParseError(_))
        ));
        assert!(matches!(
            Configuration::from_reader("/nonexistent/tabfun/config.json"),
            Err(ConfigurationError::IOError(_))
        ));
    }
}
