//! A parsed navigation-tree data file.

use thiserror::Error;

use crate::{
    entry::Entry,
    identifier::Id,
    section::{self, Section},
};

/// Error constructing a [`Document`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    /// The variable name was empty.
    #[error("document name must not be empty")]
    Empty,

    /// The variable name is not a valid JavaScript identifier.
    #[error("invalid JavaScript identifier: `{0}`")]
    InvalidIdentifier(String),
}

/// A named navigation-tree index: the contents of one data file.
///
/// The name is the JavaScript variable the file assigns to, e.g.
/// `_astc_textures_8h`; the entries are the top-level rows in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: Id,
    entries: Vec<Entry>,
}

impl Document {
    /// Create a document, validating the variable name.
    ///
    /// # Errors
    ///
    /// Returns [`NameError`] if `name` is empty or not a JavaScript
    /// identifier (`[A-Za-z_$][A-Za-z0-9_$]*`).
    pub fn new(name: &str, entries: Vec<Entry>) -> Result<Self, NameError> {
        let mut chars = name.chars();
        match chars.next() {
            None => return Err(NameError::Empty),
            Some(first) if !(first.is_ascii_alphabetic() || first == '_' || first == '$') => {
                return Err(NameError::InvalidIdentifier(name.to_string()));
            }
            Some(_) => {}
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
            return Err(NameError::InvalidIdentifier(name.to_string()));
        }

        Ok(Self {
            name: Id::new(name),
            entries,
        })
    }

    /// The variable name.
    pub fn name(&self) -> Id {
        self.name
    }

    /// Top-level entries in file order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Derive the document's sections.
    ///
    /// See [`section::partition`] for the derivation rules.
    pub fn sections(&self) -> Vec<Section> {
        section::partition(&self.entries)
    }
}
