use serde::{Deserialize, Serialize};

use crate::domain::{AppId, Recipient, SendTemplateSms, SendTemplateSmsResponse, StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendTemplateSmsJsonRequest<'a> {
    app_id: &'a str,
    to: String,
    template_id: &'a str,
    datas: &'a [String],
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendTemplateSmsJsonResponse {
    status_code: String,
    #[serde(default)]
    status_msg: Option<String>,
}

pub fn encode_send_template_sms_body(
    app_id: &AppId,
    request: &SendTemplateSms,
) -> Result<Vec<u8>, serde_json::Error> {
    let to = request
        .recipients()
        .iter()
        .map(Recipient::raw)
        .collect::<Vec<_>>()
        .join(",");

    serde_json::to_vec(&SendTemplateSmsJsonRequest {
        app_id: app_id.as_str(),
        to,
        template_id: request.template_id().as_str(),
        datas: request.data(),
    })
}

pub fn decode_send_template_sms_json_response(
    body: &[u8],
) -> Result<SendTemplateSmsResponse, TransportError> {
    let parsed: SendTemplateSmsJsonResponse = serde_json::from_slice(body)?;
    Ok(SendTemplateSmsResponse {
        status_code: StatusCode::new(parsed.status_code),
        status_text: parsed.status_msg.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::TemplateId;

    use super::*;

    fn app_id() -> AppId {
        AppId::new("8a216da8").unwrap()
    }

    #[test]
    fn encode_single_recipient_body() {
        let request = SendTemplateSms::new(
            TemplateId::new("1").unwrap(),
            Recipient::new("13800000000").unwrap(),
            ["6532", "5"],
        );
        let body = encode_send_template_sms_body(&app_id(), &request).unwrap();
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            r#"{"appId":"8a216da8","to":"13800000000","templateId":"1","datas":["6532","5"]}"#
        );
    }

    #[test]
    fn encode_joins_many_recipients_with_commas() {
        let request = SendTemplateSms::to_many(
            TemplateId::new("7").unwrap(),
            vec![
                Recipient::new("13800000000").unwrap(),
                Recipient::new("13900000000").unwrap(),
            ],
            Vec::<String>::new(),
        )
        .unwrap();
        let body = encode_send_template_sms_body(&app_id(), &request).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["to"], "13800000000,13900000000");
        assert_eq!(value["datas"], serde_json::json!([]));
    }

    #[test]
    fn decode_success_response() {
        let parsed =
            decode_send_template_sms_json_response(br#"{"statusCode":"000000","statusMsg":"OK"}"#)
                .unwrap();
        assert!(parsed.is_success());
        assert_eq!(parsed.status_text, "OK");
    }

    #[test]
    fn decode_ignores_extra_fields_and_missing_message() {
        let json = br#"
        {
          "statusCode": "000000",
          "templateSMS": {
            "dateCreated": "20240309150501",
            "smsMessageSid": "ff8080813c373cd7013c3d8a5f5c0041"
          }
        }
        "#;
        let parsed = decode_send_template_sms_json_response(json).unwrap();
        assert!(parsed.is_success());
        assert_eq!(parsed.status_text, "");
    }

    #[test]
    fn decode_rejects_non_json_and_missing_status() {
        assert!(matches!(
            decode_send_template_sms_json_response(b"<html>"),
            Err(TransportError::Json(_))
        ));
        assert!(decode_send_template_sms_json_response(br#"{"statusMsg":"x"}"#).is_err());
    }
}
