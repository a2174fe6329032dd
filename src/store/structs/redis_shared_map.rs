use crate::config::enums::cluster_encoding::ClusterEncoding;
use crate::store::structs::redis_store_factory::SharedConnection;

#[derive(Debug, Clone)]
pub struct RedisSharedMap {
    pub(crate) name: String,
    pub(crate) connection: SharedConnection,
    pub(crate) key: String,
    pub(crate) encoding: ClusterEncoding,
}
