use super::{class_of, Error, Registry, Result, StatusClass};
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

const MDN_STATUS_INDEX: &str = "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status";
const WIKIPEDIA_STATUS_LIST: &str = "https://en.wikipedia.org/wiki/List_of_HTTP_status_codes";

/// One status in a [`Registry`]: its code, canonical name, reason phrase, and class.
///
/// The class is always derived from the code, so an entry can never disagree
/// with [`class_of`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry {
    code: u16,
    canonical_name: &'static str,
    reason_phrase: &'static str,
    class: StatusClass,
}

impl Entry {
    pub const fn new(code: u16, canonical_name: &'static str, reason_phrase: &'static str) -> Self {
        Self {
            code,
            canonical_name,
            reason_phrase,
            class: class_of(code),
        }
    }

    /// Looks `name` up in the built-in registry.
    pub fn from_name(name: &str) -> Result<&'static Self> {
        Registry::global().by_name(name)
    }

    pub const fn code(&self) -> u16 {
        self.code
    }
    pub const fn canonical_name(&self) -> &'static str {
        self.canonical_name
    }
    pub const fn reason_phrase(&self) -> &'static str {
        self.reason_phrase
    }
    pub const fn class(&self) -> StatusClass {
        self.class
    }

    pub fn is_informational(&self) -> bool {
        self.class == StatusClass::Informational
    }
    pub fn is_success(&self) -> bool {
        self.class == StatusClass::Success
    }
    pub fn is_redirection(&self) -> bool {
        self.class == StatusClass::Redirection
    }
    pub fn is_client_error(&self) -> bool {
        self.class == StatusClass::ClientError
    }
    pub fn is_server_error(&self) -> bool {
        self.class == StatusClass::ServerError
    }
    pub fn is_error(&self) -> bool {
        self.is_client_error() || self.is_server_error()
    }
    pub fn is_nonstandard(&self) -> bool {
        self.class == StatusClass::Nonstandard
    }

    /// Reference documentation for this status.
    ///
    /// Registered codes link to their MDN page. The `0` sentinel has no page of
    /// its own and links to the MDN index; other nonstandard codes link to the
    /// Wikipedia list.
    pub fn docs_url(&self) -> Cow<'static, str> {
        match (self.class, self.code) {
            (StatusClass::Nonstandard, 0) => Cow::Borrowed(MDN_STATUS_INDEX),
            (StatusClass::Nonstandard, code) => Cow::Owned(format!("{WIKIPEDIA_STATUS_LIST}#{code}")),
            (_, code) => Cow::Owned(format!("{MDN_STATUS_INDEX}/{code}")),
        }
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code, self.reason_phrase)
    }
}

impl TryFrom<u16> for &'static Entry {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self> {
        Registry::global().by_code(code)
    }
}
