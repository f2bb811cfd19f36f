//! Identifier management using string interning for efficient storage and comparison
//!
//! This module provides the [`Id`] type with an efficient string-interner based
//! approach. Entry names in a navigation index repeat across categories (the
//! same symbol can appear as a struct reference, a typedef, and a variable),
//! so names are stored once and compared by symbol.

use std::{
    cmp::Ordering,
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

use crate::order;

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// Efficient identifier type using string interning
///
/// # Examples
///
/// ```
/// use navtree_core::identifier::Id;
///
/// let name = Id::new("texture_set");
/// assert_eq!(name, "texture_set");
/// assert_eq!(name, Id::new("texture_set"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from `&str`.
    pub fn new(name: &str) -> Self {
        let mut interner = interner().lock().expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Borrow the interned text for the duration of the closure.
    ///
    /// The interner lock is held while `f` runs, so `f` must not construct
    /// or resolve other identifiers.
    pub fn with_str<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let text = interner
            .resolve(self.0)
            .expect("Id should exist in interner");
        f(text)
    }

    /// Compare two identifiers under the generator's case-folded ordering.
    ///
    /// Both identifiers are resolved under a single lock acquisition, then
    /// compared with [`order::folded_cmp`].
    pub fn folded_cmp(&self, other: &Id) -> Ordering {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let lhs = interner
            .resolve(self.0)
            .expect("Id should exist in interner");
        let rhs = interner
            .resolve(other.0)
            .expect("Id should exist in interner");
        order::folded_cmp(lhs, rhs)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_str(|text| write!(f, "{text}"))
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self.with_str(|text| text == *other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_interning() {
        let a = Id::new("load_shader");
        let b = Id::new("load_shader");
        assert_eq!(a, b);
        assert_eq!(a, "load_shader");
    }

    #[test]
    fn test_id_display() {
        let id = Id::new("astc_header");
        assert_eq!(id.to_string(), "astc_header");
    }

    #[test]
    fn test_id_distinct() {
        assert_ne!(Id::new("texture_set"), Id::new("texture_set_info"));
    }

    #[test]
    fn test_id_folded_cmp() {
        assert_eq!(
            Id::new("LOG_TAG").folded_cmp(&Id::new("LOGD")),
            Ordering::Less
        );
        assert_eq!(
            Id::new("create_program").folded_cmp(&Id::new("CREATE_PROGRAM")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_id_with_str() {
        let id = Id::new("earth_vertex_shader_source");
        let len = id.with_str(str::len);
        assert_eq!(len, 26);
    }
}
