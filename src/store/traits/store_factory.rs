use std::sync::Arc;
use async_trait::async_trait;
use crate::common::structs::session_id::SessionId;
use crate::namespace::traits::authorize_handler::AuthorizeHandler;
use crate::namespace::traits::namespaces_hub::NamespacesHub;
use crate::pubsub::traits::pub_sub_store::PubSubStore;
use crate::store::errors::StoreError;
use crate::store::structs::base_store_factory::BaseStoreFactory;
use crate::store::traits::shared_map::SharedMap;
use crate::store::traits::store::Store;

#[async_trait]
pub trait StoreFactory: Send + Sync {
    async fn create_store(&self, session_id: &SessionId) -> Result<Arc<dyn Store>, StoreError>;

    /// Maps with the same name share their contents across the cluster.
    async fn create_map(&self, name: &str) -> Result<Arc<dyn SharedMap>, StoreError>;

    fn pub_sub_store(&self) -> Arc<dyn PubSubStore>;

    /// Subscribe this node to every cluster event type and replay received
    /// events against `hub` and `authorize_handler`.
    async fn init(&self, hub: Arc<dyn NamespacesHub>, authorize_handler: Arc<dyn AuthorizeHandler>) -> Result<(), StoreError> {
        BaseStoreFactory::init(&self.pub_sub_store(), hub, authorize_handler).await
    }

    /// Release the session's backend data. Failures are logged, never
    /// returned.
    async fn on_disconnect(&self, session_id: &SessionId);

    /// Stop pub/sub and release connections. Calling it again is a no-op.
    async fn shutdown(&self);
}
