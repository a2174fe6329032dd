use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of one client connection.
///
/// Created when the client connects and dropped when it disconnects. A
/// session id is only meaningful on the node that holds the connection.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub Uuid);
