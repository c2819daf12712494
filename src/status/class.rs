use std::fmt::{Display, Formatter};

/// The class of a status code, taken from its leading digit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StatusClass {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
    /// Outside the registered 1xx–5xx classes: the `0` sentinel, `599`, and
    /// anything not in 100–598.
    Nonstandard,
}

/// Derives the class of `code`. Never fails.
///
/// ```
/// use statusreg::status::{class_of, StatusClass};
///
/// assert_eq!(class_of(404), StatusClass::ClientError);
/// assert_eq!(class_of(599), StatusClass::Nonstandard);
/// assert_eq!(class_of(0), StatusClass::Nonstandard);
/// ```
pub const fn class_of(code: u16) -> StatusClass {
    match code {
        100..=199 => StatusClass::Informational,
        200..=299 => StatusClass::Success,
        300..=399 => StatusClass::Redirection,
        400..=499 => StatusClass::ClientError,
        // 599 is used by proxies for upstream connect timeouts and is not registered.
        500..=598 => StatusClass::ServerError,
        _ => StatusClass::Nonstandard,
    }
}

impl StatusClass {
    pub const fn of(code: u16) -> Self {
        class_of(code)
    }

    /// The `x00` code a client should treat an unrecognised code of this class as,
    /// e.g. an unknown 4xx is handled like 400 Bad Request.
    pub const fn default_code(&self) -> Option<u16> {
        match self {
            Self::Informational => Some(100),
            Self::Success => Some(200),
            Self::Redirection => Some(300),
            Self::ClientError => Some(400),
            Self::ServerError => Some(500),
            Self::Nonstandard => None,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Informational => "Informational",
            Self::Success => "Success",
            Self::Redirection => "Redirection",
            Self::ClientError => "Client Error",
            Self::ServerError => "Server Error",
            Self::Nonstandard => "Nonstandard",
        }
    }
}

impl Display for StatusClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
