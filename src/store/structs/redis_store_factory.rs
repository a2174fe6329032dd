use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use parking_lot::RwLock;
use redis::aio::MultiplexedConnection;
use crate::config::enums::cluster_encoding::ClusterEncoding;
use crate::store::structs::redis_pub_sub_store::RedisPubSubStore;

/// Connection handed to every store and map of a factory. Emptied on
/// shutdown, which releases it for all of them.
pub type SharedConnection = Arc<RwLock<Option<MultiplexedConnection>>>;

pub struct RedisStoreFactory {
    pub(crate) connection: SharedConnection,
    pub(crate) pub_sub: Arc<RedisPubSubStore>,
    pub(crate) prefix: String,
    pub(crate) encoding: ClusterEncoding,
    pub(crate) shut_down: AtomicBool,
}
