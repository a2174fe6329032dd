use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use socketio_cluster::config::structs::configuration::Configuration;
use socketio_cluster::logging::setup_logging;
use socketio_cluster::pubsub::enums::pub_sub_type::PubSubType;
use socketio_cluster::pubsub::structs::pub_sub_event::PubSubEvent;
use socketio_cluster::pubsub::traits::pub_sub_listener::PubSubListener;
use socketio_cluster::structs::Cli;

struct LoggingListener;

impl PubSubListener for LoggingListener {
    fn on_message(&self, event: PubSubEvent) {
        match (event.message.session_id(), event.message.namespace()) {
            (Some(session_id), Some(namespace)) => info!("[PubSub] {} from node {}: session {} in {}", event.kind, event.node_id, session_id, namespace),
            (Some(session_id), None) => info!("[PubSub] {} from node {}: session {}", event.kind, event.node_id, session_id),
            (None, Some(namespace)) => info!("[PubSub] {} from node {} in {}", event.kind, event.node_id, namespace),
            (None, None) => info!("[PubSub] {} from node {}", event.kind, event.node_id),
        }
    }
}

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{}", error);
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let node_id = config.node.resolve();
            info!("[BOOT] Node {} using {} store engine", node_id, config.store.engine);

            let factory = match config.store.engine.connect(&config, node_id).await {
                Ok(factory) => factory,
                Err(error) => {
                    error!("[BOOT] Unable to connect store: {}", error);
                    exit(102);
                }
            };

            let pub_sub = factory.pub_sub_store();
            let listener: Arc<dyn PubSubListener> = Arc::new(LoggingListener);
            for kind in PubSubType::all() {
                if let Err(error) = pub_sub.subscribe(*kind, listener.clone()).await {
                    error!("[BOOT] Unable to subscribe to {}: {}", kind, error);
                    factory.shutdown().await;
                    exit(102);
                }
            }
            info!("[BOOT] Monitoring {} event types, press ctrl-c to stop", PubSubType::all().len());

            if let Err(error) = tokio::signal::ctrl_c().await {
                error!("[BOOT] Unable to listen for shutdown signal: {}", error);
            }
            info!("[BOOT] Shutting down...");
            factory.shutdown().await;
            info!("[BOOT] Shutdown complete");
            Ok(())
        })
}
