use std::sync::Arc;
use crate::namespace::traits::authorize_handler::AuthorizeHandler;
use crate::namespace::traits::namespaces_hub::NamespacesHub;

pub struct ClusterEventListener {
    pub(crate) hub: Arc<dyn NamespacesHub>,
    pub(crate) authorize_handler: Arc<dyn AuthorizeHandler>,
}
