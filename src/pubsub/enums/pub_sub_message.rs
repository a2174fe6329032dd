use serde::{Deserialize, Serialize};
use crate::pubsub::structs::bulk_join_leave_message::BulkJoinLeaveMessage;
use crate::pubsub::structs::connect_message::ConnectMessage;
use crate::pubsub::structs::disconnect_message::DisconnectMessage;
use crate::pubsub::structs::dispatch_message::DispatchMessage;
use crate::pubsub::structs::join_leave_message::JoinLeaveMessage;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum PubSubMessage {
    Connect(ConnectMessage),
    Disconnect(DisconnectMessage),
    Dispatch(DispatchMessage),
    JoinLeave(JoinLeaveMessage),
    BulkJoinLeave(BulkJoinLeaveMessage),
}
