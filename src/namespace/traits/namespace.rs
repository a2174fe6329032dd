use crate::common::structs::session_id::SessionId;
use crate::protocol::structs::packet::Packet;

/// A namespace registered on this node.
///
/// Cluster replays may deliver the same join or leave more than once, so
/// `join` and `leave` must be idempotent set operations.
#[cfg_attr(test, mockall::automock)]
pub trait Namespace: Send + Sync {
    fn name(&self) -> String;

    /// Send `packet` to every local member of `room`.
    fn dispatch(&self, room: &str, packet: &Packet);

    fn join(&self, room: &str, session_id: &SessionId);

    fn leave(&self, room: &str, session_id: &SessionId);
}
