//! Shared helpers for the HTTP integration tests.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use ccpsms::{Credentials, Host, SmsClient, TimestampZone};
use md5::{Digest, Md5};
use wiremock::{MockServer, Request};

pub const ACCOUNT_SID: &str = "aaf98f89";
pub const AUTH_TOKEN: &str = "secret";
pub const APP_ID: &str = "8a216da8";

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn client_for(server: &MockServer) -> SmsClient {
    let credentials = Credentials::new(ACCOUNT_SID, AUTH_TOKEN, APP_ID).unwrap();
    SmsClient::builder(Host::new("gw.invalid").unwrap(), credentials)
        .base_url(server.uri())
        .timestamp_zone(TimestampZone::Utc)
        .build()
        .unwrap()
}

pub fn account_path(endpoint: &str) -> String {
    format!("/2013-12-26/Accounts/{ACCOUNT_SID}/{endpoint}")
}

fn header<'a>(request: &'a Request, name: &str) -> &'a str {
    request
        .headers
        .get(name)
        .unwrap_or_else(|| panic!("missing header {name}"))
        .to_str()
        .unwrap()
}

/// Checks the fixed headers and that `sig` was computed from the timestamp carried in
/// `Authorization`.
pub fn assert_signed_json_request(request: &Request) {
    assert_eq!(header(request, "content-type"), "application/json;charset=utf-8;");
    assert_eq!(header(request, "accept"), "application/json;");

    let decoded = BASE64.decode(header(request, "authorization")).unwrap();
    let decoded = String::from_utf8(decoded).unwrap();
    let (sid, timestamp) = decoded.split_once(':').unwrap();
    assert_eq!(sid, ACCOUNT_SID);
    assert_eq!(timestamp.len(), 14);
    assert!(timestamp.bytes().all(|b| b.is_ascii_digit()));

    let expected = hex::encode(Md5::digest(
        format!("{ACCOUNT_SID}{AUTH_TOKEN}{timestamp}").as_bytes(),
    ));
    let sig = request
        .url
        .query_pairs()
        .find(|(k, _)| k == "sig")
        .map(|(_, v)| v.into_owned())
        .expect("missing sig query parameter");
    assert_eq!(sig, expected);
}
