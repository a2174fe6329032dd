use std::sync::Arc;
use log::{debug, warn};
use crate::namespace::traits::authorize_handler::AuthorizeHandler;
use crate::namespace::traits::namespace::Namespace;
use crate::namespace::traits::namespaces_hub::NamespacesHub;
use crate::pubsub::enums::pub_sub_message::PubSubMessage;
use crate::pubsub::enums::pub_sub_type::PubSubType;
use crate::pubsub::structs::pub_sub_event::PubSubEvent;
use crate::pubsub::traits::pub_sub_listener::PubSubListener;
use crate::store::structs::cluster_event_listener::ClusterEventListener;

impl ClusterEventListener {
    pub fn new(hub: Arc<dyn NamespacesHub>, authorize_handler: Arc<dyn AuthorizeHandler>) -> ClusterEventListener {
        ClusterEventListener { hub, authorize_handler }
    }

    fn namespace(&self, name: &str, kind: PubSubType) -> Option<Arc<dyn Namespace>> {
        let namespace = self.hub.get(name);
        if namespace.is_none() {
            debug!("[Cluster] Ignoring {} for namespace {} not registered on this node", kind, name);
        }
        namespace
    }
}

impl PubSubListener for ClusterEventListener {
    fn on_message(&self, event: PubSubEvent) {
        let PubSubEvent { node_id, kind, message } = event;
        match (kind, message) {
            (PubSubType::Connect, PubSubMessage::Connect(message)) => {
                self.authorize_handler.connect(&message.session_id);
            }
            (PubSubType::Disconnect, PubSubMessage::Disconnect(message)) => {
                debug!("[Cluster] Session {} disconnected from node {}", message.session_id, node_id);
            }
            (PubSubType::Dispatch, PubSubMessage::Dispatch(message)) => {
                if let Some(namespace) = self.namespace(&message.namespace, kind) {
                    namespace.dispatch(&message.room, &message.packet);
                }
            }
            (PubSubType::Join, PubSubMessage::JoinLeave(message)) => {
                if let Some(namespace) = self.namespace(&message.namespace, kind) {
                    namespace.join(&message.room, &message.session_id);
                }
            }
            (PubSubType::Leave, PubSubMessage::JoinLeave(message)) => {
                if let Some(namespace) = self.namespace(&message.namespace, kind) {
                    namespace.leave(&message.room, &message.session_id);
                }
            }
            (PubSubType::BulkJoin, PubSubMessage::BulkJoinLeave(message)) => {
                if let Some(namespace) = self.namespace(&message.namespace, kind) {
                    for room in &message.rooms {
                        namespace.join(room, &message.session_id);
                    }
                }
            }
            (PubSubType::BulkLeave, PubSubMessage::BulkJoinLeave(message)) => {
                if let Some(namespace) = self.namespace(&message.namespace, kind) {
                    for room in &message.rooms {
                        namespace.leave(room, &message.session_id);
                    }
                }
            }
            (kind, message) => {
                warn!("[Cluster] Ignoring {} event from node {} carrying a {} message", kind, node_id, message.variant_name());
            }
        }
    }
}
