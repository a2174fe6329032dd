#[cfg(test)]
mod store_tests {
    mod store_engine_tests {
        use crate::store::enums::store_engine::StoreEngine;

        #[test]
        fn test_store_engine_display() {
            assert_eq!(format!("{}", StoreEngine::memory), "memory");
            assert_eq!(format!("{}", StoreEngine::redis), "redis");
        }

        #[test]
        fn test_store_engine_url() {
            assert_eq!(StoreEngine::redis.url("127.0.0.1:6379"), "redis://127.0.0.1:6379");
            assert_eq!(StoreEngine::redis.url("rediss://cache:6380"), "rediss://cache:6380");
        }

        #[test]
        fn test_store_engine_deserialization() {
            let engine: StoreEngine = serde_json::from_str("\"redis\"").unwrap();
            assert_eq!(engine, StoreEngine::redis);
            assert!(serde_json::from_str::<StoreEngine>("\"memcache\"").is_err());
        }

        #[test]
        fn test_redis_keys() {
            use crate::common::structs::session_id::SessionId;
            use crate::store::structs::redis_shared_map::RedisSharedMap;
            use crate::store::structs::redis_store::RedisStore;

            let sid: SessionId = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
            assert_eq!(RedisStore::session_key("sio:", &sid), "sio:session:67e55044-10b1-426f-9247-bb680e5fe0c8");
            assert_eq!(RedisSharedMap::map_key("sio:", "users"), "sio:map:users");
        }
    }

    mod redis_connection_tests {
        use std::sync::Arc;
        use parking_lot::RwLock;
        use crate::store::errors::StoreError;
        use crate::store::impls::redis_store_factory::checkout;
        use crate::store::structs::redis_store_factory::SharedConnection;

        #[test]
        fn test_released_connection_reports_shut_down() {
            let slot: SharedConnection = Arc::new(RwLock::new(None));
            assert!(matches!(checkout(&slot), Err(StoreError::ShutDown)));
        }
    }

    mod memory_store_tests {
        use serde_json::json;
        use crate::common::structs::session_id::SessionId;
        use crate::store::errors::StoreError;
        use crate::store::structs::memory_store::MemoryStore;
        use crate::store::traits::store::Store;

        #[tokio::test]
        async fn test_set_get_has_del() {
            let store = MemoryStore::new(SessionId::new());
            store.set("name", json!("alice")).await.unwrap();
            assert_eq!(store.get("name").await.unwrap(), Some(json!("alice")));
            assert!(store.has("name").await.unwrap());
            store.del("name").await.unwrap();
            assert!(!store.has("name").await.unwrap());
            assert_eq!(store.get("name").await.unwrap(), None);
        }

        #[tokio::test]
        async fn test_null_rejected() {
            let store = MemoryStore::new(SessionId::new());
            let result = store.set("name", serde_json::Value::Null).await;
            assert!(matches!(result, Err(StoreError::NullValue(key)) if key == "name"));
            assert!(!store.has("name").await.unwrap());
        }

        #[tokio::test]
        async fn test_destroy_is_final() {
            let store = MemoryStore::new(SessionId::new());
            store.set("k", json!(1)).await.unwrap();
            store.destroy().await.unwrap();
            assert!(matches!(store.get("k").await, Err(StoreError::Destroyed(_))));
            assert!(matches!(store.set("k", json!(2)).await, Err(StoreError::Destroyed(_))));
            assert!(matches!(store.destroy().await, Err(StoreError::Destroyed(_))));
        }
    }

    mod memory_factory_tests {
        use serde_json::json;
        use crate::common::structs::node_id::NodeId;
        use crate::common::structs::session_id::SessionId;
        use crate::store::errors::StoreError;
        use crate::store::structs::memory_store_factory::MemoryStoreFactory;
        use crate::store::traits::store_factory::StoreFactory;

        #[tokio::test]
        async fn test_maps_shared_by_name() {
            let factory = MemoryStoreFactory::new(NodeId::new(1), 16, false);
            let first = factory.create_map("users").await.unwrap();
            let second = factory.create_map("users").await.unwrap();
            let other = factory.create_map("rooms").await.unwrap();

            assert_eq!(first.put("alice", json!(1)).await.unwrap(), None);
            assert_eq!(second.get("alice").await.unwrap(), Some(json!(1)));
            assert_eq!(second.put("alice", json!(2)).await.unwrap(), Some(json!(1)));
            assert!(!other.contains_key("alice").await.unwrap());
            assert_eq!(first.keys().await.unwrap(), vec!["alice".to_string()]);
            assert!(first.remove("alice").await.unwrap());
            assert!(!first.remove("alice").await.unwrap());
            assert!(second.is_empty().await.unwrap());
        }

        #[tokio::test]
        async fn test_stores_are_per_session() {
            let factory = MemoryStoreFactory::new(NodeId::new(1), 16, false);
            let a = factory.create_store(&SessionId::new()).await.unwrap();
            let b = factory.create_store(&SessionId::new()).await.unwrap();
            a.set("k", json!("a")).await.unwrap();
            assert_eq!(b.get("k").await.unwrap(), None);
        }

        #[tokio::test]
        async fn test_shutdown_idempotent() {
            let factory = MemoryStoreFactory::new(NodeId::new(1), 16, false);
            factory.on_disconnect(&SessionId::new()).await;
            factory.shutdown().await;
            factory.shutdown().await;
            assert!(matches!(factory.create_store(&SessionId::new()).await, Err(StoreError::ShutDown)));
            assert!(matches!(factory.create_map("m").await, Err(StoreError::ShutDown)));
        }
    }

    mod memory_pub_sub_tests {
        use std::sync::Arc;
        use std::time::Duration;
        use tokio::sync::mpsc;
        use crate::common::structs::node_id::NodeId;
        use crate::common::structs::session_id::SessionId;
        use crate::pubsub::enums::pub_sub_type::PubSubType;
        use crate::pubsub::structs::connect_message::ConnectMessage;
        use crate::pubsub::structs::pub_sub_event::PubSubEvent;
        use crate::pubsub::traits::pub_sub_listener::PubSubListener;
        use crate::pubsub::traits::pub_sub_store::PubSubStore;
        use crate::store::errors::StoreError;
        use crate::store::structs::memory_pub_sub_store::MemoryPubSubStore;

        struct ChannelListener(mpsc::UnboundedSender<PubSubEvent>);

        impl PubSubListener for ChannelListener {
            fn on_message(&self, event: PubSubEvent) {
                let _ = self.0.send(event);
            }
        }

        fn listener() -> (Arc<dyn PubSubListener>, mpsc::UnboundedReceiver<PubSubEvent>) {
            let (tx, rx) = mpsc::unbounded_channel();
            (Arc::new(ChannelListener(tx)), rx)
        }

        async fn next(rx: &mut mpsc::UnboundedReceiver<PubSubEvent>) -> Option<PubSubEvent> {
            tokio::time::timeout(Duration::from_millis(200), rx.recv()).await.ok().flatten()
        }

        #[tokio::test]
        async fn test_self_delivery_by_default() {
            let store = MemoryPubSubStore::new(NodeId::new(1), 16, false);
            let (listener, mut rx) = listener();
            store.subscribe(PubSubType::Connect, listener).await.unwrap();
            let sid = SessionId::new();
            store.publish(PubSubType::Connect, ConnectMessage::new(sid).into()).await.unwrap();

            let event = next(&mut rx).await.unwrap();
            assert_eq!(event.node_id, NodeId::new(1));
            assert_eq!(event.message.session_id(), Some(sid));
        }

        #[tokio::test]
        async fn test_only_subscribed_type_delivered() {
            let store = MemoryPubSubStore::new(NodeId::new(1), 16, false);
            let (listener, mut rx) = listener();
            store.subscribe(PubSubType::Disconnect, listener).await.unwrap();
            store.publish(PubSubType::Connect, ConnectMessage::new(SessionId::new()).into()).await.unwrap();
            assert!(next(&mut rx).await.is_none());
        }

        #[tokio::test]
        async fn test_filter_self() {
            let local = MemoryPubSubStore::new(NodeId::new(1), 16, true);
            let remote = local.with_bus(NodeId::new(2));
            let (listener, mut rx) = listener();
            local.subscribe(PubSubType::Connect, listener).await.unwrap();

            local.publish(PubSubType::Connect, ConnectMessage::new(SessionId::new()).into()).await.unwrap();
            remote.publish(PubSubType::Connect, ConnectMessage::new(SessionId::new()).into()).await.unwrap();

            let event = next(&mut rx).await.unwrap();
            assert_eq!(event.node_id, NodeId::new(2));
            assert!(next(&mut rx).await.is_none());
        }

        #[tokio::test]
        async fn test_unsubscribe_drops_listeners() {
            let store = MemoryPubSubStore::new(NodeId::new(1), 16, false);
            let (first, mut first_rx) = listener();
            let (second, _second_rx) = listener();
            store.subscribe(PubSubType::Connect, first).await.unwrap();
            store.subscribe(PubSubType::Connect, second).await.unwrap();
            assert_eq!(store.subscription_count(PubSubType::Connect), 2);

            store.unsubscribe(PubSubType::Connect).await;
            assert_eq!(store.subscription_count(PubSubType::Connect), 0);
            store.publish(PubSubType::Connect, ConnectMessage::new(SessionId::new()).into()).await.unwrap();
            assert!(next(&mut first_rx).await.is_none());
        }

        #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
        async fn test_cross_type_order_preserved() {
            use crate::pubsub::structs::join_leave_message::JoinLeaveMessage;

            let store = MemoryPubSubStore::new(NodeId::new(1), 512, false);
            let (listener, mut rx) = listener();
            store.subscribe(PubSubType::Join, listener.clone()).await.unwrap();
            store.subscribe(PubSubType::Leave, listener).await.unwrap();
            assert!(store.is_receiving());

            let sid = SessionId::new();
            let mut expected = Vec::new();
            for round in 0..100 {
                let kind = if round % 2 == 0 { PubSubType::Join } else { PubSubType::Leave };
                store.publish(kind, JoinLeaveMessage::new(sid, "room", "/").into()).await.unwrap();
                expected.push(kind);
            }

            let mut received = Vec::new();
            while received.len() < expected.len() {
                received.push(next(&mut rx).await.unwrap().kind);
            }
            assert_eq!(received, expected);

            store.shutdown().await;
            assert!(!store.is_receiving());
        }

        #[tokio::test]
        async fn test_publish_mismatch_rejected() {
            let store = MemoryPubSubStore::new(NodeId::new(1), 16, false);
            let result = store.publish(PubSubType::Join, ConnectMessage::new(SessionId::new()).into()).await;
            assert!(matches!(result, Err(StoreError::MessageTypeMismatch { .. })));
        }
    }

    mod cluster_event_listener_tests {
        use std::sync::Arc;
        use mockall::predicate::eq;
        use crate::common::structs::node_id::NodeId;
        use crate::common::structs::session_id::SessionId;
        use crate::namespace::traits::authorize_handler::MockAuthorizeHandler;
        use crate::namespace::traits::namespace::{MockNamespace, Namespace};
        use crate::namespace::traits::namespaces_hub::MockNamespacesHub;
        use crate::protocol::structs::packet::Packet;
        use crate::pubsub::enums::pub_sub_message::PubSubMessage;
        use crate::pubsub::enums::pub_sub_type::PubSubType;
        use crate::pubsub::structs::bulk_join_leave_message::BulkJoinLeaveMessage;
        use crate::pubsub::structs::connect_message::ConnectMessage;
        use crate::pubsub::structs::dispatch_message::DispatchMessage;
        use crate::pubsub::structs::join_leave_message::JoinLeaveMessage;
        use crate::pubsub::structs::pub_sub_event::PubSubEvent;
        use crate::pubsub::traits::pub_sub_listener::PubSubListener;
        use crate::store::structs::cluster_event_listener::ClusterEventListener;

        fn hub_with(name: &'static str, namespace: MockNamespace) -> MockNamespacesHub {
            let namespace: Arc<dyn Namespace> = Arc::new(namespace);
            let mut hub = MockNamespacesHub::new();
            hub.expect_get()
                .returning(move |requested| if requested == name { Some(namespace.clone()) } else { None });
            hub
        }

        fn event(kind: PubSubType, message: PubSubMessage) -> PubSubEvent {
            PubSubEvent::new(NodeId::new(9), kind, message).unwrap()
        }

        #[test]
        fn test_connect_authorizes() {
            let sid = SessionId::new();
            let mut authorize = MockAuthorizeHandler::new();
            authorize.expect_connect().with(eq(sid)).times(1).return_const(());
            let listener = ClusterEventListener::new(Arc::new(MockNamespacesHub::new()), Arc::new(authorize));
            listener.on_message(event(PubSubType::Connect, ConnectMessage::new(sid).into()));
        }

        #[test]
        fn test_join_and_leave() {
            let sid = SessionId::new();
            let mut namespace = MockNamespace::new();
            namespace.expect_join().withf(move |room, id| room == "lobby" && *id == sid).times(1).return_const(());
            namespace.expect_leave().withf(move |room, id| room == "lobby" && *id == sid).times(1).return_const(());
            let listener = ClusterEventListener::new(Arc::new(hub_with("/chat", namespace)), Arc::new(MockAuthorizeHandler::new()));

            listener.on_message(event(PubSubType::Join, JoinLeaveMessage::new(sid, "lobby", "/chat").into()));
            listener.on_message(event(PubSubType::Leave, JoinLeaveMessage::new(sid, "lobby", "/chat").into()));
        }

        #[test]
        fn test_bulk_join_joins_every_room() {
            let sid = SessionId::new();
            let mut namespace = MockNamespace::new();
            namespace.expect_join().withf(|room, _| room == "a" || room == "b").times(2).return_const(());
            let listener = ClusterEventListener::new(Arc::new(hub_with("/", namespace)), Arc::new(MockAuthorizeHandler::new()));
            listener.on_message(event(PubSubType::BulkJoin, BulkJoinLeaveMessage::new(sid, ["a", "b"], "/").into()));
        }

        #[test]
        fn test_dispatch_without_namespace_is_ignored() {
            let mut hub = MockNamespacesHub::new();
            hub.expect_get().times(1).returning(|_| None);
            let listener = ClusterEventListener::new(Arc::new(hub), Arc::new(MockAuthorizeHandler::new()));
            listener.on_message(event(PubSubType::Dispatch, DispatchMessage::new("room", Packet::event("/missing", "news", vec![]), "/missing").into()));
        }

        #[test]
        fn test_dispatch_to_namespace() {
            let packet = Packet::event("/", "news", vec![serde_json::json!("hello")]);
            let expected = packet.clone();
            let mut namespace = MockNamespace::new();
            namespace.expect_dispatch().withf(move |room, packet| room == "room1" && *packet == expected).times(1).return_const(());
            let listener = ClusterEventListener::new(Arc::new(hub_with("/", namespace)), Arc::new(MockAuthorizeHandler::new()));
            listener.on_message(event(PubSubType::Dispatch, DispatchMessage::new("room1", packet, "/").into()));
        }

        #[test]
        fn test_mismatched_event_ignored() {
            let mut hub = MockNamespacesHub::new();
            hub.expect_get().never();
            let listener = ClusterEventListener::new(Arc::new(hub), Arc::new(MockAuthorizeHandler::new()));
            // Built by hand: PubSubEvent::new refuses this pairing.
            listener.on_message(PubSubEvent {
                node_id: NodeId::new(3),
                kind: PubSubType::Join,
                message: ConnectMessage::new(SessionId::new()).into(),
            });
        }
    }

    mod base_store_factory_tests {
        use std::sync::Arc;
        use crate::common::structs::node_id::NodeId;
        use crate::namespace::traits::authorize_handler::MockAuthorizeHandler;
        use crate::namespace::traits::namespaces_hub::MockNamespacesHub;
        use crate::pubsub::enums::pub_sub_type::PubSubType;
        use crate::store::structs::memory_store_factory::MemoryStoreFactory;
        use crate::store::traits::store_factory::StoreFactory;

        #[tokio::test]
        async fn test_init_subscribes_every_type() {
            let factory = MemoryStoreFactory::new(NodeId::new(1), 16, false);
            factory.init(Arc::new(MockNamespacesHub::new()), Arc::new(MockAuthorizeHandler::new())).await.unwrap();
            let pub_sub = factory.memory_pub_sub();
            for kind in PubSubType::all() {
                assert_eq!(pub_sub.subscription_count(*kind), 1);
            }
            factory.shutdown().await;
            assert_eq!(pub_sub.subscription_count(PubSubType::Join), 0);
        }
    }
}
