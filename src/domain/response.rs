use crate::domain::value::StatusCode;

/// Outcome reported by the gateway for a templated send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendTemplateSmsResponse {
    pub status_code: StatusCode,
    pub status_text: String,
}

impl SendTemplateSmsResponse {
    pub fn is_success(&self) -> bool {
        self.status_code.is_success()
    }
}
