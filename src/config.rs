//! Construction parameters for `HashTable`.

use crate::error::ConfigError;

pub const DEFAULT_INITIAL_CAPACITY: usize = 5;
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.8;

/// Initial bucket count and growth threshold.
///
/// `initial_capacity` is also the capacity `clear()` returns to. The table
/// grows once `len / capacity` would exceed `max_load_factor`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TableConfig {
    pub initial_capacity: usize,
    pub max_load_factor: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_max_load_factor(mut self, load_factor: f64) -> Self {
        self.max_load_factor = load_factor;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !(self.max_load_factor.is_finite() && self.max_load_factor > 0.0) {
            return Err(ConfigError::InvalidLoadFactor(self.max_load_factor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = TableConfig::new();
        assert_eq!(c.initial_capacity, 5);
        assert_eq!(c.max_load_factor, 0.8);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_zero_capacity_and_bad_load_factors() {
        assert_eq!(
            TableConfig::new().with_initial_capacity(0).validate(),
            Err(ConfigError::ZeroCapacity)
        );
        for lf in [0.0, -0.5, f64::INFINITY] {
            assert_eq!(
                TableConfig::new().with_max_load_factor(lf).validate(),
                Err(ConfigError::InvalidLoadFactor(lf))
            );
        }
        assert!(matches!(
            TableConfig::new().with_max_load_factor(f64::NAN).validate(),
            Err(ConfigError::InvalidLoadFactor(_))
        ));
    }

    #[test]
    fn load_factors_above_one_are_allowed() {
        assert!(TableConfig::new().with_max_load_factor(1.2).validate().is_ok());
    }
}
