/// Wiring shared by every `StoreFactory`; holds no state of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseStoreFactory;
