use std::sync::atomic::AtomicBool;
use crate::common::structs::session_id::SessionId;
use crate::config::enums::cluster_encoding::ClusterEncoding;
use crate::store::structs::redis_store_factory::SharedConnection;

#[derive(Debug)]
pub struct RedisStore {
    pub(crate) session_id: SessionId,
    pub(crate) connection: SharedConnection,
    pub(crate) key: String,
    pub(crate) encoding: ClusterEncoding,
    pub(crate) destroyed: AtomicBool,
}
