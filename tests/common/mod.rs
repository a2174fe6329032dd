#![allow(dead_code)]
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use dashmap::DashMap;
use parking_lot::Mutex;
use socketio_cluster::ack::enums::ack_callback_kind::AckCallbackKind;
use socketio_cluster::ack::enums::ack_result::AckResult;
use socketio_cluster::ack::traits::ack_callback::AckCallback;
use socketio_cluster::common::structs::node_id::NodeId;
use socketio_cluster::common::structs::session_id::SessionId;
use socketio_cluster::config::structs::configuration::Configuration;
use socketio_cluster::namespace::traits::authorize_handler::AuthorizeHandler;
use socketio_cluster::namespace::traits::namespace::Namespace;
use socketio_cluster::namespace::traits::namespaces_hub::NamespacesHub;
use socketio_cluster::protocol::structs::packet::Packet;
use socketio_cluster::store::structs::memory_pub_sub_store::MemoryPubSubStore;
use socketio_cluster::store::structs::memory_store_factory::MemoryStoreFactory;
use socketio_cluster::store::traits::store_factory::StoreFactory;

pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    Arc::new(Configuration::init())
}

#[derive(Default)]
pub struct RecordingNamespace {
    pub name: String,
    pub rooms: Mutex<BTreeMap<String, BTreeSet<SessionId>>>,
    pub dispatched: Mutex<Vec<(String, Packet)>>,
}

impl RecordingNamespace {
    pub fn new(name: &str) -> Arc<RecordingNamespace> {
        Arc::new(RecordingNamespace { name: name.to_string(), ..Default::default() })
    }

    pub fn members(&self, room: &str) -> BTreeSet<SessionId> {
        self.rooms.lock().get(room).cloned().unwrap_or_default()
    }

    pub fn snapshot(&self) -> BTreeMap<String, BTreeSet<SessionId>> {
        self.rooms.lock().clone()
    }

    pub fn dispatch_count(&self) -> usize {
        self.dispatched.lock().len()
    }
}

impl Namespace for RecordingNamespace {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn dispatch(&self, room: &str, packet: &Packet) {
        self.dispatched.lock().push((room.to_string(), packet.clone()));
    }

    fn join(&self, room: &str, session_id: &SessionId) {
        self.rooms.lock().entry(room.to_string()).or_default().insert(*session_id);
    }

    fn leave(&self, room: &str, session_id: &SessionId) {
        let mut rooms = self.rooms.lock();
        if let Some(members) = rooms.get_mut(room) {
            members.remove(session_id);
            if members.is_empty() {
                rooms.remove(room);
            }
        }
    }
}

#[derive(Default)]
pub struct RecordingHub {
    pub namespaces: DashMap<String, Arc<RecordingNamespace>>,
}

impl RecordingHub {
    pub fn with(namespaces: &[&str]) -> Arc<RecordingHub> {
        let hub = RecordingHub::default();
        for name in namespaces {
            hub.namespaces.insert(name.to_string(), RecordingNamespace::new(name));
        }
        Arc::new(hub)
    }

    pub fn namespace(&self, name: &str) -> Arc<RecordingNamespace> {
        self.namespaces
            .get(name)
            .map(|namespace| namespace.value().clone())
            .unwrap_or_else(|| panic!("namespace {} not registered", name))
    }
}

impl NamespacesHub for RecordingHub {
    fn get(&self, name: &str) -> Option<Arc<dyn Namespace>> {
        self.namespaces.get(name).map(|namespace| namespace.value().clone() as Arc<dyn Namespace>)
    }
}

#[derive(Default)]
pub struct RecordingAuthorize {
    pub connected: Mutex<Vec<SessionId>>,
}

impl AuthorizeHandler for RecordingAuthorize {
    fn connect(&self, session_id: &SessionId) {
        self.connected.lock().push(*session_id);
    }
}

#[derive(Default)]
pub struct RecordingCallback {
    pub timeout: i64,
    pub kind: AckCallbackKind,
    pub successes: Mutex<Vec<AckResult>>,
    pub timeouts: AtomicUsize,
}

impl RecordingCallback {
    pub fn single(timeout: i64) -> Arc<RecordingCallback> {
        Arc::new(RecordingCallback { timeout, ..Default::default() })
    }

    pub fn timeout_count(&self) -> usize {
        self.timeouts.load(Ordering::SeqCst)
    }

    pub fn success_count(&self) -> usize {
        self.successes.lock().len()
    }
}

impl AckCallback for RecordingCallback {
    fn timeout(&self) -> i64 {
        self.timeout
    }

    fn kind(&self) -> AckCallbackKind {
        self.kind
    }

    fn on_success(&self, result: AckResult) {
        self.successes.lock().push(result);
    }

    fn on_timeout(&self) {
        self.timeouts.fetch_add(1, Ordering::SeqCst);
    }
}

/// One node of an in-process cluster.
pub struct TestNode {
    pub factory: Arc<MemoryStoreFactory>,
    pub hub: Arc<RecordingHub>,
    pub authorize: Arc<RecordingAuthorize>,
}

/// Build `count` nodes sharing one broadcast bus, each initialised with
/// its own hub registering `namespaces`.
pub async fn create_cluster(count: u64, namespaces: &[&str], filter_self: bool) -> Vec<TestNode> {
    let seed = MemoryPubSubStore::new(NodeId::new(0), 256, filter_self);
    let mut nodes = Vec::new();
    for id in 1..=count {
        let factory = Arc::new(MemoryStoreFactory::with_pub_sub(Arc::new(seed.with_bus(NodeId::new(id)))));
        let hub = RecordingHub::with(namespaces);
        let authorize = Arc::new(RecordingAuthorize::default());
        factory.init(hub.clone(), authorize.clone()).await.unwrap();
        nodes.push(TestNode { factory, hub, authorize });
    }
    nodes
}

/// Poll `condition` until it holds or a second has passed.
pub async fn wait_for<F: Fn() -> bool>(condition: F) -> bool {
    for _ in 0..100 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
