#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AckCallbackKind {
    /// Expects exactly one ack argument.
    #[default]
    Single,
    /// Receives the full ack argument list.
    Multi,
}
