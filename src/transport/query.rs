use serde::Serialize;

use crate::domain::AppId;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct AppQueryJsonRequest<'a> {
    app_id: &'a str,
}

fn encode_app_query_body(app_id: &AppId) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&AppQueryJsonRequest {
        app_id: app_id.as_str(),
    })
}

pub fn encode_query_templates_body(app_id: &AppId) -> Result<Vec<u8>, serde_json::Error> {
    encode_app_query_body(app_id)
}

pub fn encode_get_sub_accounts_body(app_id: &AppId) -> Result<Vec<u8>, serde_json::Error> {
    encode_app_query_body(app_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_bodies_carry_only_app_id() {
        let app_id = AppId::new("8a216da8").unwrap();

        let templates = encode_query_templates_body(&app_id).unwrap();
        assert_eq!(templates, br#"{"appId":"8a216da8"}"#);

        let subs = encode_get_sub_accounts_body(&app_id).unwrap();
        assert_eq!(subs, br#"{"appId":"8a216da8"}"#);
    }

    #[test]
    fn app_id_is_json_escaped() {
        let app_id = AppId::new(r#"a"b"#).unwrap();
        let body = encode_query_templates_body(&app_id).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["appId"], r#"a"b"#);
    }
}
