//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{SEND_MAX_RECIPIENTS, SendTemplateSms};
pub use response::SendTemplateSmsResponse;
pub use validation::ValidationError;
pub use value::{
    AccountSid, AppId, AuthToken, Host, Recipient, StatusCode, TemplateId, Timestamp,
    TimestampZone,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_id_rejects_empty() {
        assert!(matches!(
            AppId::new("   "),
            Err(ValidationError::Empty {
                field: AppId::FIELD
            })
        ));
    }

    #[test]
    fn auth_token_rejects_empty() {
        assert!(matches!(
            AuthToken::new(""),
            Err(ValidationError::Empty {
                field: AuthToken::FIELD
            })
        ));
    }

    #[test]
    fn send_single_recipient_keeps_data_order() {
        let request = SendTemplateSms::new(
            TemplateId::new("1").unwrap(),
            Recipient::new("13800000000").unwrap(),
            ["6532", "5"],
        );
        assert_eq!(request.template_id().as_str(), "1");
        assert_eq!(request.recipients().len(), 1);
        assert_eq!(request.data(), ["6532".to_owned(), "5".to_owned()]);
    }

    #[test]
    fn send_recipient_limit_is_enforced() {
        let to = Recipient::new("13800000000").unwrap();
        let recipients = vec![to; SEND_MAX_RECIPIENTS + 1];
        let err = SendTemplateSms::to_many(
            TemplateId::new("1").unwrap(),
            recipients,
            Vec::<String>::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TooManyRecipients {
                max: SEND_MAX_RECIPIENTS,
                actual: 201
            }
        ));
    }

    #[test]
    fn recipient_limit_cannot_be_bypassed_with_joined_numbers() {
        let joined = (0..=SEND_MAX_RECIPIENTS)
            .map(|idx| format!("138{idx:08}"))
            .collect::<Vec<_>>()
            .join(",");
        assert!(matches!(
            Recipient::new(joined),
            Err(ValidationError::InvalidRecipient { .. })
        ));
    }

    #[test]
    fn send_to_many_requires_non_empty() {
        let err = SendTemplateSms::to_many(
            TemplateId::new("1").unwrap(),
            Vec::new(),
            Vec::<String>::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Empty {
                field: Recipient::FIELD
            }
        ));
    }

    #[test]
    fn response_success_follows_status_code() {
        let ok = SendTemplateSmsResponse {
            status_code: StatusCode::new(StatusCode::SUCCESS),
            status_text: String::new(),
        };
        assert!(ok.is_success());

        let rejected = SendTemplateSmsResponse {
            status_code: StatusCode::new("160040"),
            status_text: "limit".to_owned(),
        };
        assert!(!rejected.is_success());
    }
}
