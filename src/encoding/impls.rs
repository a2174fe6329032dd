pub mod encoding_error;
