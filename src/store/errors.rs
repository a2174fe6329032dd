use thiserror::Error;
use crate::encoding::enums::encoding_error::EncodingError;
use crate::pubsub::enums::pub_sub_type::PubSubType;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Operation error: {0}")]
    OperationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid argument: value for key '{0}' must not be null")]
    NullValue(String),

    #[error("Store {0} has been destroyed")]
    Destroyed(String),

    #[error("Store factory has been shut down")]
    ShutDown,

    #[error("Message type mismatch: {kind} does not carry a {message} message")]
    MessageTypeMismatch {
        kind: PubSubType,
        message: &'static str,
    },

    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),
}

impl From<EncodingError> for StoreError {
    fn from(error: EncodingError) -> Self {
        StoreError::SerializationError(error.to_string())
    }
}
