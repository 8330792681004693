use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Gateway host, optionally with a port (`host[:port]`).
///
/// Invariant: non-empty after trimming; no scheme, path, query, or whitespace.
pub struct Host(String);

impl Host {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "host";

    /// Create a validated [`Host`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if trimmed
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '@'))
        {
            return Err(ValidationError::InvalidHost {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated host.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Main account id (`accountSid`), used in the request path and the signature.
///
/// Invariant: non-empty after trimming.
pub struct AccountSid(String);

impl AccountSid {
    /// Field name used by the gateway (`accountSid`).
    pub const FIELD: &'static str = "accountSid";

    /// Create a validated [`AccountSid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated account id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Shared secret issued with the account (`authToken`).
///
/// Invariant: must not be empty (kept exactly as provided). Never sent over the wire;
/// it only feeds the request signature. `Debug` output is redacted.
pub struct AuthToken(String);

impl AuthToken {
    /// Field name used by the gateway (`authToken`).
    pub const FIELD: &'static str = "authToken";

    /// Create a validated [`AuthToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the token as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Application id (`appId`) carried in every request body.
///
/// Invariant: non-empty after trimming.
pub struct AppId(String);

impl AppId {
    /// JSON field name used by the gateway (`appId`).
    pub const FIELD: &'static str = "appId";

    /// Create a validated [`AppId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated application id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Id of a pre-approved message template (`templateId`).
///
/// Invariant: non-empty after trimming.
pub struct TemplateId(String);

impl TemplateId {
    /// JSON field name used by the gateway (`templateId`).
    pub const FIELD: &'static str = "templateId";

    /// Create a validated [`TemplateId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated template id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient phone number as sent to the gateway (`to`).
///
/// Invariant: non-empty after trimming and a single number (no `,` list separator).
/// No normalization is performed.
pub struct Recipient(String);

impl Recipient {
    /// JSON field name used by the gateway (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated recipient.
    ///
    /// Several recipients are joined with `,` on the wire, so a single value must not
    /// contain one; use [`crate::SendTemplateSms::to_many`] instead.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if trimmed.contains(',') {
            return Err(ValidationError::InvalidRecipient {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to the gateway.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Clock used to render the signing [`Timestamp`].
///
/// The gateway compares the timestamp against its own wall clock, so this has to match
/// the provider's expectation. Reference clients use local time.
pub enum TimestampZone {
    #[default]
    Local,
    Utc,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Signing timestamp in `YYYYMMDDHHMMSS` form.
///
/// Invariant: exactly 14 ASCII digits.
pub struct Timestamp(String);

impl Timestamp {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "timestamp";

    const FORMAT: &'static str = "%Y%m%d%H%M%S";
    const LEN: usize = 14;

    /// Take one snapshot of the current time in the given zone.
    pub fn now(zone: TimestampZone) -> Self {
        match zone {
            TimestampZone::Local => Self::from_datetime(&Local::now()),
            TimestampZone::Utc => Self::from_datetime(&Utc::now()),
        }
    }

    /// Render a date-time in its own offset.
    pub fn from_datetime<Tz>(value: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self(value.format(Self::FORMAT).to_string())
    }

    /// Parse an already formatted timestamp.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if trimmed.len() != Self::LEN || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidTimestamp {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the 14-digit representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Gateway status code (`statusCode`).
///
/// Preserved as-is; only [`StatusCode::SUCCESS`] means the request was accepted.
pub struct StatusCode(String);

impl StatusCode {
    /// The only code the gateway uses for success.
    pub const SUCCESS: &'static str = "000000";

    /// Wrap a status code as returned by the gateway.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Borrow the code as returned by the gateway.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for [`StatusCode::SUCCESS`].
    pub fn is_success(&self) -> bool {
        self.0 == Self::SUCCESS
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
