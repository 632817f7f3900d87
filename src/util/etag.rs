use sha2::{Digest, Sha256};

/// Strong entity tag for a response body: the first 16 bytes of its sha256, hex encoded.
pub fn compute_etag(body: &[u8]) -> String {
    let hash = Sha256::digest(body);
    format!("\"{}\"", hex::encode(&hash[..16]))
}
