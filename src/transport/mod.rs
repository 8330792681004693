//! Transport layer: HTTP and wire-format details (signing, serialization/deserialization).

mod endpoint;
mod query;
mod send_template_sms;
mod signature;

pub use endpoint::{API_VERSION, Endpoint, endpoint_url, redacted};
pub use query::{encode_get_sub_accounts_body, encode_query_templates_body};
pub use send_template_sms::{
    decode_send_template_sms_json_response, encode_send_template_sms_body,
};
pub use signature::{SignatureMaterial, sign};
