/// Engine-level packet type.
pub mod packet_type;

/// Socket-level packet sub type.
pub mod packet_sub_type;
