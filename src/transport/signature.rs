use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use md5::{Digest, Md5};

use crate::domain::{AccountSid, AuthToken, Timestamp};

/// Per-request authentication material.
///
/// `signature` goes into the `sig` query parameter, `authorization` into the
/// `Authorization` header. Both are derived from the same [`Timestamp`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureMaterial {
    pub signature: String,
    pub authorization: String,
}

/// `signature = hex(MD5(sid ++ token ++ ts))`, `authorization = base64(sid ":" ts)`.
///
/// MD5 and the concatenation order are fixed by the gateway.
pub fn sign(
    account_sid: &AccountSid,
    auth_token: &AuthToken,
    timestamp: &Timestamp,
) -> SignatureMaterial {
    let mut hasher = Md5::new();
    hasher.update(account_sid.as_str().as_bytes());
    hasher.update(auth_token.as_str().as_bytes());
    hasher.update(timestamp.as_str().as_bytes());
    let signature = hex::encode(hasher.finalize());

    let authorization = BASE64.encode(format!(
        "{}:{}",
        account_sid.as_str(),
        timestamp.as_str()
    ));

    SignatureMaterial {
        signature,
        authorization,
    }
}
