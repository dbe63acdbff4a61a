//! HMAC-SHA1 Webhook Signatures
//!
//! GitHub signs each delivery with the shared secret and sends the result in
//! `X-Hub-Signature` as `sha1=<lowercase hex>`.

use hmac::{Hmac, Mac};
use sha1::Sha1;
use subtle::ConstantTimeEq;

type HmacSha1 = Hmac<Sha1>;

/// Algorithm label prefixed to every signature header value.
pub const SIGNATURE_PREFIX: &str = "sha1=";

/// Sign a payload and return the full header value (`sha1=<hex>`).
pub fn sign_payload(secret: &[u8], payload: &[u8]) -> String {
    let mut mac = HmacSha1::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload);
    format!(
        "{SIGNATURE_PREFIX}{}",
        hex::encode(mac.finalize().into_bytes())
    )
}

/// Verify a signature header value against a payload.
///
/// The comparison covers the whole header value, prefix included, and runs in
/// constant time for equal-length inputs. Malformed values simply fail.
pub fn verify_signature(secret: &[u8], payload: &[u8], signature: impl AsRef<[u8]>) -> bool {
    let expected = sign_payload(secret, payload);
    expected.as_bytes().ct_eq(signature.as_ref()).into()
}
