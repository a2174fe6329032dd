use std::sync::Arc;
use dashmap::DashMap;
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::task::AbortHandle;
use crate::common::structs::node_id::NodeId;
use crate::pubsub::enums::pub_sub_type::PubSubType;
use crate::pubsub::structs::pub_sub_event::PubSubEvent;
use crate::pubsub::traits::pub_sub_listener::PubSubListener;

pub type ListenerMap = DashMap<PubSubType, Vec<Arc<dyn PubSubListener>>>;

/// Pub/sub over an in-process broadcast bus.
///
/// Stores cloned from the same bus with `with_bus` behave like nodes of
/// one cluster. Each store drains the bus on a single task, so listeners
/// see events in bus order across all types.
pub struct MemoryPubSubStore {
    pub(crate) node_id: NodeId,
    pub(crate) bus: broadcast::Sender<PubSubEvent>,
    pub(crate) filter_self: bool,
    pub(crate) listeners: Arc<ListenerMap>,
    pub(crate) receiver_task: Mutex<Option<AbortHandle>>,
}
