use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Error {
    pub(crate) kind: ErrorKind,
    pub(crate) message: String,
}

impl Error {
    pub fn new(message: &str, kind: ErrorKind) -> Self {
        Self {
            message: message.to_string(),
            kind,
        }
    }
    pub(crate) fn unknown_name(name: &str) -> Self {
        Self::new(
            &format!("no status is named {name:?}"),
            ErrorKind::UnknownName(name.to_string()),
        )
    }
    pub(crate) fn unknown_code(code: u16) -> Self {
        Self::new(
            &format!("no status has code {code}"),
            ErrorKind::UnknownCode(code),
        )
    }
    pub(crate) fn table(message: &str, fault: TableFault) -> Self {
        Self::new(message, ErrorKind::InvalidTable(fault))
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: {}\nKind: {:?}", self.message, self.kind)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// Lookup by a name that is neither canonical nor an alias.
    UnknownName(String),
    /// Lookup by a code absent from the table.
    UnknownCode(u16),
    /// The table handed to a builder is inconsistent; no registry was produced.
    InvalidTable(TableFault),
    #[cfg(feature = "json")]
    Serialize,
}

impl ErrorKind {
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::UnknownName(_) | Self::UnknownCode(_))
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TableFault {
    EmptyName,
    /// Codes must be the `0` sentinel or within 100-599.
    CodeOutOfRange(u16),
    EmptyReasonPhrase(u16),
    DuplicateName(&'static str),
    CodeCollision {
        code: u16,
        first: &'static str,
        second: &'static str,
    },
    DanglingAlias {
        alias: &'static str,
        target: &'static str,
    },
    ShadowedName(&'static str),
}
