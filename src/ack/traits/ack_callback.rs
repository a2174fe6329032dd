use crate::ack::enums::ack_callback_kind::AckCallbackKind;
use crate::ack::enums::ack_result::AckResult;

/// Timeout value meaning "wait for the ack forever".
pub const NO_TIMEOUT: i64 = -1;

pub trait AckCallback: Send + Sync {
    /// Seconds to wait for the ack. Negative values never time out.
    fn timeout(&self) -> i64 {
        NO_TIMEOUT
    }

    fn kind(&self) -> AckCallbackKind {
        AckCallbackKind::Single
    }

    fn on_success(&self, result: AckResult);

    fn on_timeout(&self);
}
