//! Recursive encoded-size estimate for JSON values.

use serde_json::Value;

use super::config::PersistenceConfig;

/// Estimates how many bytes a value occupies once stored.
///
/// Numbers and booleans cost `scalar_cost`; null costs 1; strings cost their
/// UTF-8 length plus one; arrays sum their elements; objects sum
/// `key length + 1 + value cost` over entries plus `object_overhead`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeEstimator {
    pub scalar_cost: usize,
    pub object_overhead: usize,
}

impl Default for SizeEstimator {
    fn default() -> Self {
        Self::from_config(&PersistenceConfig::default())
    }
}

impl SizeEstimator {
    pub fn from_config(config: &PersistenceConfig) -> Self {
        Self {
            scalar_cost: config.scalar_cost,
            object_overhead: config.object_overhead,
        }
    }

    pub fn estimate(&self, value: &Value) -> usize {
        match value {
            Value::Null => 1,
            Value::Bool(_) | Value::Number(_) => self.scalar_cost,
            Value::String(s) => s.len() + 1,
            Value::Array(items) => items.iter().map(|v| self.estimate(v)).sum(),
            Value::Object(map) => {
                map.iter()
                    .map(|(k, v)| k.len() + 1 + self.estimate(v))
                    .sum::<usize>()
                    + self.object_overhead
            }
        }
    }
}
