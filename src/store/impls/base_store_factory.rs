use std::sync::Arc;
use log::info;
use crate::namespace::traits::authorize_handler::AuthorizeHandler;
use crate::namespace::traits::namespaces_hub::NamespacesHub;
use crate::pubsub::enums::pub_sub_type::PubSubType;
use crate::pubsub::traits::pub_sub_listener::PubSubListener;
use crate::pubsub::traits::pub_sub_store::PubSubStore;
use crate::store::errors::StoreError;
use crate::store::structs::base_store_factory::BaseStoreFactory;
use crate::store::structs::cluster_event_listener::ClusterEventListener;

impl BaseStoreFactory {
    /// Subscribe one `ClusterEventListener` to every event type of
    /// `pub_sub`. Nothing is published.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn init(
        pub_sub: &Arc<dyn PubSubStore>,
        hub: Arc<dyn NamespacesHub>,
        authorize_handler: Arc<dyn AuthorizeHandler>,
    ) -> Result<(), StoreError> {
        let listener: Arc<dyn PubSubListener> = Arc::new(ClusterEventListener::new(hub, authorize_handler));
        for kind in PubSubType::all() {
            pub_sub.subscribe(*kind, listener.clone()).await?;
        }
        info!("[Cluster] Node {} listening on {} event types", pub_sub.node_id(), PubSubType::all().len());
        Ok(())
    }
}
