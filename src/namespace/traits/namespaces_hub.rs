use std::sync::Arc;
use crate::namespace::traits::namespace::Namespace;

#[cfg_attr(test, mockall::automock)]
pub trait NamespacesHub: Send + Sync {
    /// Look up a namespace by name, `None` when it is not registered here.
    fn get(&self, name: &str) -> Option<Arc<dyn Namespace>>;
}
