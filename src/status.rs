#[macro_use]
mod macros;
pub mod class;
pub mod codes;
pub mod entry;
pub mod error;
pub mod registry;
#[cfg(test)]
pub(crate) mod test_utils;
#[cfg(test)]
mod tests;

pub use class::{class_of, StatusClass};
pub use entry::Entry;
pub use error::Error;
pub use error::ErrorKind;
pub use error::TableFault;
pub use registry::{Iter, Registry, RegistryBuilder};

pub type Result<T> = std::result::Result<T, Error>;

/// Resolves a canonical or alias name against the built-in registry.
pub fn by_name(name: &str) -> Result<&'static Entry> {
    Registry::global().by_name(name)
}

/// Resolves a numeric code against the built-in registry.
pub fn by_code(code: u16) -> Result<&'static Entry> {
    Registry::global().by_code(code)
}

/// Every built-in entry in ascending code order.
pub fn all() -> Iter<'static> {
    Registry::global().all()
}

/// The reason phrase of a built-in code, if the code is known.
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    by_code(code).ok().map(Entry::reason_phrase)
}
