pub mod ack_callback;
