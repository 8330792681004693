use crate::domain::validation::ValidationError;
use crate::domain::value::{Recipient, TemplateId};

pub const SEND_MAX_RECIPIENTS: usize = 200;

/// Templated SMS to one or more recipients.
///
/// `data` fills the template placeholders in order; it may be empty for templates
/// without variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendTemplateSms {
    template_id: TemplateId,
    recipients: Vec<Recipient>,
    data: Vec<String>,
}

impl SendTemplateSms {
    pub fn new<I, S>(template_id: TemplateId, to: Recipient, data: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            template_id,
            recipients: vec![to],
            data: data.into_iter().map(Into::into).collect(),
        }
    }

    pub fn to_many<I, S>(
        template_id: TemplateId,
        recipients: Vec<Recipient>,
        data: I,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: Recipient::FIELD,
            });
        }
        if recipients.len() > SEND_MAX_RECIPIENTS {
            return Err(ValidationError::TooManyRecipients {
                max: SEND_MAX_RECIPIENTS,
                actual: recipients.len(),
            });
        }
        Ok(Self {
            template_id,
            recipients,
            data: data.into_iter().map(Into::into).collect(),
        })
    }

    pub fn template_id(&self) -> &TemplateId {
        &self.template_id
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn data(&self) -> &[String] {
        &self.data
    }
}
