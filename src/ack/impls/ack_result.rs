use serde_json::Value;
use crate::ack::enums::ack_result::AckResult;

impl AckResult {
    /// First delivered value, whichever variant it came in.
    pub fn first(&self) -> Option<&Value> {
        match self {
            AckResult::Single(value) => value.as_ref(),
            AckResult::Multi(values) => values.first(),
        }
    }

    pub fn into_values(self) -> Vec<Value> {
        match self {
            AckResult::Single(value) => value.into_iter().collect(),
            AckResult::Multi(values) => values,
        }
    }
}
