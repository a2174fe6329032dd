use serde::{Deserialize, Serialize};
use crate::common::structs::node_id::NodeId;
use crate::pubsub::enums::pub_sub_message::PubSubMessage;
use crate::pubsub::enums::pub_sub_type::PubSubType;

/// A message as it travels between nodes, stamped with its origin.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PubSubEvent {
    pub node_id: NodeId,
    pub kind: PubSubType,
    pub message: PubSubMessage,
}
