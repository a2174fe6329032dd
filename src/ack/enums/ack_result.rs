use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum AckResult {
    Single(Option<Value>),
    Multi(Vec<Value>),
}
