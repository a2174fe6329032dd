use crate::ack::enums::ack_callback_kind::AckCallbackKind;
use crate::ack::enums::ack_result::AckResult;
use crate::ack::structs::fn_ack_callback::FnAckCallback;
use crate::ack::traits::ack_callback::AckCallback;

impl FnAckCallback {
    pub fn new<S, T>(timeout: i64, on_success: S, on_timeout: T) -> FnAckCallback
    where
        S: Fn(AckResult) + Send + Sync + 'static,
        T: Fn() + Send + Sync + 'static,
    {
        FnAckCallback {
            timeout,
            kind: AckCallbackKind::Single,
            on_success: Box::new(on_success),
            on_timeout: Box::new(on_timeout),
        }
    }

    pub fn multi<S, T>(timeout: i64, on_success: S, on_timeout: T) -> FnAckCallback
    where
        S: Fn(AckResult) + Send + Sync + 'static,
        T: Fn() + Send + Sync + 'static,
    {
        FnAckCallback {
            kind: AckCallbackKind::Multi,
            ..Self::new(timeout, on_success, on_timeout)
        }
    }
}

impl AckCallback for FnAckCallback {
    fn timeout(&self) -> i64 {
        self.timeout
    }

    fn kind(&self) -> AckCallbackKind {
        self.kind
    }

    fn on_success(&self, result: AckResult) {
        (self.on_success)(result)
    }

    fn on_timeout(&self) {
        (self.on_timeout)()
    }
}
