//! Host statistics models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single sampled value of a statistic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatisticValue {
    #[serde(default)]
    pub datum: Option<Value>,
}

/// Values envelope of a statistic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatisticValues {
    #[serde(default)]
    pub value: Vec<StatisticValue>,
}

/// A named statistic reported for a host (e.g. `memory.total`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Statistic {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub values: Option<StatisticValues>,
}

impl Statistic {
    /// The first datum rendered as text.
    ///
    /// String data is returned without JSON quoting.
    pub fn first_datum(&self) -> Option<String> {
        let datum = self.values.as_ref()?.value.first()?.datum.as_ref()?;
        match datum {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
