pub mod messages;
pub mod pub_sub_event;
pub mod pub_sub_message;
pub mod pub_sub_type;
