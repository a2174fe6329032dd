use crate::ack::enums::ack_callback_kind::AckCallbackKind;
use crate::ack::enums::ack_result::AckResult;

pub type SuccessHandler = Box<dyn Fn(AckResult) + Send + Sync>;
pub type TimeoutHandler = Box<dyn Fn() + Send + Sync>;

pub struct FnAckCallback {
    pub(crate) timeout: i64,
    pub(crate) kind: AckCallbackKind,
    pub(crate) on_success: SuccessHandler,
    pub(crate) on_timeout: TimeoutHandler,
}
