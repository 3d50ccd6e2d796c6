use crate::domain::catalog::{DESTINATION_IDENTIFIER, MESSAGING_HOST};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Same escape set as `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Where composed messages are handed off: `https://<host>/<destination>?text=...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffTarget {
    host: String,
    destination: String,
}

impl HandoffTarget {
    pub fn new(host: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            destination: destination.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn url_for(&self, message: &str) -> String {
        format!(
            "https://{}/{}?text={}",
            self.host,
            self.destination,
            encode_component(message)
        )
    }
}

impl Default for HandoffTarget {
    fn default() -> Self {
        Self::new(MESSAGING_HOST, DESTINATION_IDENTIFIER)
    }
}

/// Builds the deep link on the default messaging host.
pub fn build_handoff_url(message: &str, destination: &str) -> String {
    HandoffTarget::new(MESSAGING_HOST, destination).url_for(message)
}
