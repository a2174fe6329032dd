use dashmap::DashMap;
use tokio::task::AbortHandle;
use crate::common::structs::node_id::NodeId;
use crate::config::enums::cluster_encoding::ClusterEncoding;
use crate::pubsub::enums::pub_sub_type::PubSubType;
use crate::store::structs::redis_store_factory::SharedConnection;

pub struct RedisPubSubStore {
    pub(crate) node_id: NodeId,
    pub(crate) publish_connection: SharedConnection,
    pub(crate) subscribe_client: redis::Client,
    pub(crate) prefix: String,
    pub(crate) encoding: ClusterEncoding,
    pub(crate) filter_self: bool,
    pub(crate) subscriptions: DashMap<PubSubType, Vec<AbortHandle>>,
}
