use serde::{de::DeserializeOwned, Serialize};
use crate::config::enums::cluster_encoding::ClusterEncoding;
use crate::encoding::enums::encoding_error::EncodingError;

/// Encode a value using the specified encoding format
pub fn encode<T: Serialize>(encoding: ClusterEncoding, value: &T) -> Result<Vec<u8>, EncodingError> {
    match encoding {
        ClusterEncoding::binary | ClusterEncoding::msgpack => encode_msgpack(value),
        ClusterEncoding::json => encode_json(value),
    }
}

/// Decode a value using the specified encoding format
pub fn decode<T: DeserializeOwned>(encoding: ClusterEncoding, data: &[u8]) -> Result<T, EncodingError> {
    match encoding {
        ClusterEncoding::binary | ClusterEncoding::msgpack => decode_msgpack(data),
        ClusterEncoding::json => decode_json(data),
    }
}

fn encode_json<T: Serialize>(value: &T) -> Result<Vec<u8>, EncodingError> {
    serde_json::to_vec(value)
        .map_err(|e| EncodingError::SerializationError(e.to_string()))
}

fn decode_json<T: DeserializeOwned>(data: &[u8]) -> Result<T, EncodingError> {
    serde_json::from_slice(data)
        .map_err(|e| EncodingError::DeserializationError(e.to_string()))
}

// Named fields so struct payloads survive schema reordering between nodes.
fn encode_msgpack<T: Serialize>(value: &T) -> Result<Vec<u8>, EncodingError> {
    rmp_serde::to_vec_named(value)
        .map_err(|e| EncodingError::SerializationError(e.to_string()))
}

fn decode_msgpack<T: DeserializeOwned>(data: &[u8]) -> Result<T, EncodingError> {
    rmp_serde::from_slice(data)
        .map_err(|e| EncodingError::DeserializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::protocol::structs::packet::Packet;

    #[test]
    fn test_encode_decode_json_packet() {
        let packet = Packet::event("/chat", "message", vec![json!({"text": "hi"}), json!(3)]).with_ack_id(12);
        let encoded = encode(ClusterEncoding::json, &packet).unwrap();
        let decoded: Packet = decode(ClusterEncoding::json, &encoded).unwrap();
        assert_eq!(packet, decoded);
    }

    #[test]
    fn test_encode_decode_msgpack_packet() {
        let packet = Packet::event("/chat", "message", vec![json!([1, 2, 3]), json!(null)]);
        let encoded = encode(ClusterEncoding::msgpack, &packet).unwrap();
        let decoded: Packet = decode(ClusterEncoding::binary, &encoded).unwrap();
        assert_eq!(packet, decoded);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result: Result<Packet, EncodingError> = decode(ClusterEncoding::json, b"{not json");
        assert!(matches!(result, Err(EncodingError::DeserializationError(_))));
    }
}
