use crate::common::structs::session_id::SessionId;

#[cfg_attr(test, mockall::automock)]
pub trait AuthorizeHandler: Send + Sync {
    fn connect(&self, session_id: &SessionId);
}
