//! Opaque token minting.
//!
//! Auth and proof-of-purchase tokens are JWT-shaped - three base64url
//! segments - so they survive any client-side plumbing that expects a JWT,
//! but they are unsigned and never parsed. Verification goes through the
//! fixture store's issuance record, not a signature check.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use rand::Rng as _;
use serde_json::json;

/// Mint a fresh opaque token.
///
/// Each call produces a distinct token (random 128-bit nonce).
#[must_use]
pub fn mint() -> String {
    let nonce: [u8; 16] = rand::rng().random();

    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        json!({
            "iat": Utc::now().timestamp(),
            "nonce": URL_SAFE_NO_PAD.encode(nonce),
        })
        .to_string(),
    );
    let signature = URL_SAFE_NO_PAD.encode(nonce);

    format!("{header}.{payload}.{signature}")
}
