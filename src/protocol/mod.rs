//! Protocol values consumed by the core.
//!
//! Framing and JSON encode/decode belong to the codec layer. The core only
//! reads a packet's ack id and argument list, and carries whole packets
//! inside cluster dispatch messages.

/// Packet type enumerations.
pub mod enums;

/// Packet structure.
pub mod structs;

/// Implementation blocks for packets.
pub mod impls;
