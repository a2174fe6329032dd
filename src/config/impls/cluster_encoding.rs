use std::fmt;
use crate::config::enums::cluster_encoding::ClusterEncoding;

impl fmt::Display for ClusterEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterEncoding::binary => write!(f, "binary"),
            ClusterEncoding::json => write!(f, "json"),
            ClusterEncoding::msgpack => write!(f, "msgpack"),
        }
    }
}
