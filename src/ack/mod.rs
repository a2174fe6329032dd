//! Acknowledgment registry.
//!
//! Tracks the callbacks waiting for a client acknowledgment, per session.
//! Every callback reaches exactly one terminal outcome:
//!
//! - **success**: the client acked (`AckManager::on_ack`)
//! - **timeout**: the declared timeout elapsed first
//! - **timeout on disconnect**: the session went away (`AckManager::on_disconnect`)
//!
//! All three paths remove the callback from its entry before firing it, and
//! only the caller that actually removed it gets to fire.
//!
//! # Example
//!
//! ```rust,ignore
//! use socketio_cluster::ack::structs::ack_manager::AckManager;
//! use socketio_cluster::ack::structs::fn_ack_callback::FnAckCallback;
//!
//! let manager = AckManager::new(scheduler);
//! let index = manager.register_ack(&session_id, Arc::new(FnAckCallback::new(
//!     5,
//!     |result| println!("acked: {:?}", result),
//!     || println!("no ack in time"),
//! )));
//! ```

/// Callback kind and result enumerations.
pub mod enums;

/// Ack entry, manager and closure callback structures.
pub mod structs;

/// Implementation blocks for ack types.
pub mod impls;

/// Ack callback trait.
pub mod traits;
