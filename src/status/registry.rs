//! The status code registry and the builder that validates its table.
//!
//! A [`Registry`] is immutable once built. The built-in one is constructed on
//! first use of [`Registry::global`] and shared for the life of the process;
//! custom ones come from [`RegistryBuilder`], which refuses to produce a
//! registry from an inconsistent table.

use super::codes::{ALIASES, ENTRIES};
use super::error::TableFault;
use super::{Entry, Error, Result};
use std::collections::HashMap;
use std::sync::OnceLock;


static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Entries in ascending code order.
pub type Iter<'a> = std::slice::Iter<'a, Entry>;

#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<Entry>,
    names: HashMap<&'static str, usize>,
    aliases: Vec<(&'static str, &'static str)>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The registry built from the compiled-in status table.
    ///
    /// # Panics
    ///
    /// If the compiled-in table fails validation. Every call panics in that
    /// case; an inconsistent table is never served.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(|| init(RegistryBuilder::with_defaults()))
    }

    /// Resolves a canonical or alias name. Matching is exact and case-sensitive.
    pub fn by_name(&self, name: &str) -> Result<&Entry> {
        self.names
            .get(name)
            .map(|&index| &self.entries[index])
            .ok_or_else(|| Error::unknown_name(name))
    }

    pub fn by_code(&self, code: u16) -> Result<&Entry> {
        self.entries
            .binary_search_by_key(&code, Entry::code)
            .map(|index| &self.entries[index])
            .map_err(|_| Error::unknown_code(code))
    }

    /// Every entry in strictly ascending code order. The iterator is `Clone`,
    /// and each call starts from the lowest code again.
    pub fn all(&self) -> Iter<'_> {
        self.entries.iter()
    }

    /// The canonical name `name` resolves to.
    pub fn canonical_name(&self, name: &str) -> Result<&'static str> {
        self.by_name(name).map(Entry::canonical_name)
    }

    /// Aliases of the entry `name` resolves to, in declaration order.
    pub fn aliases_of(&self, name: &str) -> Result<impl Iterator<Item = &'static str> + '_> {
        let canonical = self.canonical_name(name)?;
        Ok(self
            .aliases
            .iter()
            .filter(move |(_, target)| *target == canonical)
            .map(|(alias, _)| *alias))
    }

    pub fn contains_code(&self, code: u16) -> bool {
        self.by_code(code).is_ok()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders every entry, with its aliases and reference link, as pretty JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String> {
        use super::ErrorKind;
        use std::borrow::Cow;

        #[derive(serde::Serialize)]
        struct Documented<'a> {
            #[serde(flatten)]
            entry: &'a Entry,
            aliases: Vec<&'static str>,
            docs_url: Cow<'static, str>,
        }

        let documented = self
            .all()
            .map(|entry| {
                Ok::<_, Error>(Documented {
                    entry,
                    aliases: self.aliases_of(entry.canonical_name())?.collect(),
                    docs_url: entry.docs_url(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        serde_json::to_string_pretty(&documented).map_err(|e| {
            Error::new(
                &format!("could not serialize status table: {e}"),
                ErrorKind::Serialize,
            )
        })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::global().clone()
    }
}

/// Collects entries and aliases for a [`Registry`] and validates them on [`build`].
///
/// [`build`]: RegistryBuilder::build
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    pub(crate) entries: Vec<Entry>,
    pub(crate) aliases: Vec<(&'static str, &'static str)>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the compiled-in table so callers can extend it.
    pub fn with_defaults() -> Self {
        Self {
            entries: ENTRIES
                .iter()
                .map(|&(code, name, reason)| Entry::new(code, name, reason))
                .collect(),
            aliases: ALIASES.to_vec(),
        }
    }

    pub fn entry(mut self, code: u16, name: &'static str, reason_phrase: &'static str) -> Self {
        self.entries.push(Entry::new(code, name, reason_phrase));
        self
    }

    pub fn alias(mut self, alias: &'static str, canonical: &'static str) -> Self {
        self.aliases.push((alias, canonical));
        self
    }

    pub fn build(self) -> Result<Registry> {
        self.try_into()
    }
}

impl TryFrom<RegistryBuilder> for Registry {
    type Error = Error;

    fn try_from(builder: RegistryBuilder) -> Result<Self> {
        let RegistryBuilder {
            mut entries,
            aliases,
        } = builder;
        entries.sort_by_key(Entry::code);

        let mut names = HashMap::with_capacity(entries.len() + aliases.len());
        for (index, entry) in entries.iter().enumerate() {
            if entry.canonical_name().is_empty() {
                return Err(reject(
                    &format!("status {} has an empty name", entry.code()),
                    TableFault::EmptyName,
                ));
            }
            if entry.code() > 599 || (entry.code() != 0 && entry.code() < 100) {
                return Err(reject(
                    &format!("code {} of {} is outside 100-599", entry.code(), entry.canonical_name()),
                    TableFault::CodeOutOfRange(entry.code()),
                ));
            }
            if entry.reason_phrase().is_empty() {
                return Err(reject(
                    &format!("status {} has an empty reason phrase", entry.code()),
                    TableFault::EmptyReasonPhrase(entry.code()),
                ));
            }
            if index > 0 && entries[index - 1].code() == entry.code() {
                let first = entries[index - 1].canonical_name();
                return Err(reject(
                    &format!(
                        "code {} is claimed by both {first} and {}",
                        entry.code(),
                        entry.canonical_name()
                    ),
                    TableFault::CodeCollision {
                        code: entry.code(),
                        first,
                        second: entry.canonical_name(),
                    },
                ));
            }
            if names.insert(entry.canonical_name(), index).is_some() {
                return Err(reject(
                    &format!("{} names more than one status", entry.canonical_name()),
                    TableFault::DuplicateName(entry.canonical_name()),
                ));
            }
        }

        for &(alias, target) in &aliases {
            if alias.is_empty() {
                return Err(reject(
                    &format!("an alias of {target} is empty"),
                    TableFault::EmptyName,
                ));
            }
            // Aliases may only point at canonical names, never at other aliases.
            let index = match names.get(target) {
                Some(&index) if entries[index].canonical_name() == target => index,
                _ => {
                    return Err(reject(
                        &format!("alias {alias} refers to {target}, which is not a canonical name"),
                        TableFault::DanglingAlias { alias, target },
                    ))
                }
            };
            if names.insert(alias, index).is_some() {
                return Err(reject(
                    &format!("alias {alias} is already in use"),
                    TableFault::ShadowedName(alias),
                ));
            }
        }

        tracing::debug!(
            entries = entries.len(),
            aliases = aliases.len(),
            "status registry built"
        );

        Ok(Self {
            entries,
            names,
            aliases,
        })
    }
}

/// Builds the registry served by [`Registry::global`], refusing to return an
/// inconsistent one.
fn init(builder: RegistryBuilder) -> Registry {
    match builder.build() {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!(error = %e.message(), "built-in status table is inconsistent");
            panic!("built-in status table is inconsistent: {}", e.message())
        }
    }
}

fn reject(message: &str, fault: TableFault) -> Error {
    tracing::warn!(fault = ?fault, "{message}");
    Error::table(message, fault)
}
