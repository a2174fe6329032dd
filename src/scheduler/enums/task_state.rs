#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Pending = 0,
    Fired = 1,
    Cancelled = 2,
}
