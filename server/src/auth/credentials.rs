//! Static credential store.
//!
//! Maps a principal name to its password and role. The table is built once
//! at startup and only read afterwards, so it can be shared freely between
//! requests.

use std::collections::HashMap;

/// Role granted to every seeded principal.
pub const REDPILL_ROLE: &str = "redpill";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Credential {
    password: String,
    role: String,
}

/// Immutable table of `name -> (password, role)`.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    entries: HashMap<String, Credential>,
}

impl CredentialStore {
    /// The principals the demo service ships with.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_entries([
            ("neo", "keanu", REDPILL_ROLE),
            ("morpheus", "lawrence", REDPILL_ROLE),
        ])
    }

    /// Build a store from `(name, password, role)` triples.
    ///
    /// A later entry for the same name replaces an earlier one.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S, S)>,
        S: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(name, password, role)| {
                (
                    name.into(),
                    Credential {
                        password: password.into(),
                        role: role.into(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Look up the role for a name/password pair.
    ///
    /// Matching is exact and case-sensitive. An unknown name and a wrong
    /// password both return `None`.
    #[must_use]
    pub fn role_for(&self, name: &str, password: &str) -> Option<&str> {
        self.entries
            .get(name)
            .filter(|credential| credential.password == password)
            .map(|credential| credential.role.as_str())
    }
}
