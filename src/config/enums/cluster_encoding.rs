use clap::ValueEnum;
use serde::{
    Deserialize,
    Serialize
};

/// Wire encoding used by distributed backends.
///
/// `binary` and `msgpack` are both MessagePack; `binary` is kept as the
/// default name for compact encoding.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default)]
pub enum ClusterEncoding {
    #[default]
    binary,
    json,
    msgpack,
}
