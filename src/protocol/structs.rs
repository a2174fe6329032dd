/// Decoded protocol packet.
pub mod packet;
