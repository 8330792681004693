use url::Url;

use crate::domain::AccountSid;

pub const API_VERSION: &str = "2013-12-26";

#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("base URL cannot carry a path: {url}")]
    CannotBeABase { url: String },
}

/// REST resources under `/{API_VERSION}/Accounts/{accountSid}/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    QuerySmsTemplate,
    GetSubAccounts,
    TemplateSms,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::QuerySmsTemplate => "SMS/QuerySMSTemplate",
            Self::GetSubAccounts => "GetSubAccounts",
            Self::TemplateSms => "SMS/TemplateSMS",
        }
    }
}

/// `{base}/{API_VERSION}/Accounts/{sid}/{endpoint}?sig={signature}`
pub fn endpoint_url(
    base: &Url,
    account_sid: &AccountSid,
    endpoint: Endpoint,
    signature: &str,
) -> Result<Url, EndpointError> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| EndpointError::CannotBeABase {
                url: base.to_string(),
            })?;
        segments
            .pop_if_empty()
            .push(API_VERSION)
            .push("Accounts")
            .push(account_sid.as_str())
            .extend(endpoint.path().split('/'));
    }

    url.query_pairs_mut().append_pair("sig", signature);
    Ok(url)
}

/// The request URL with the signature stripped, for logs.
pub fn redacted(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}
