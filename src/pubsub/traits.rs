/// Listener invoked for received events.
pub mod pub_sub_listener;

/// Backend-neutral publish/subscribe store.
pub mod pub_sub_store;
