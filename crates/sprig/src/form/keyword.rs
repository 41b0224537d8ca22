//! Keyword interning

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;

/// Process-wide keyword table. Only grows; never torn down.
static KEYWORDS: Lazy<KeywordTable> = Lazy::new(KeywordTable::new);

/// An interned keyword.
///
/// All keywords interned through the same table with the same name share one
/// allocation, so equality is pointer identity.
///
/// Keywords from different tables are never equal, even with the same name.
/// Hash-map lookup is the exception: [`MapKey`](super::MapKey) indexes
/// keywords by name, so any `:x` finds the value stored under `:x`. The reader
/// and [`Form::keyword`](super::Form::keyword) both use the process-wide
/// table, where the two notions agree.
///
/// ```
/// use sprig::Keyword;
///
/// let a = Keyword::intern("foo");
/// assert!(a.ptr_eq(&Keyword::intern("foo")));
/// assert_ne!(a, Keyword::intern("bar"));
/// ```
#[derive(Clone)]
pub struct Keyword(Arc<str>);

impl Keyword {
    /// Intern `name` (without the leading `:`) in the process-wide table.
    pub fn intern(name: &str) -> Keyword {
        KEYWORDS.intern(name)
    }

    /// The keyword's name, without the leading `:`.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether both handles refer to the same interned keyword.
    pub fn ptr_eq(&self, other: &Keyword) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Keyword {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Keyword {}

impl Hash for Keyword {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

/// A keyword registry.
///
/// [`Keyword::intern`] uses a single global table; tests that need a clean
/// slate can create their own.
#[derive(Debug, Default)]
pub struct KeywordTable {
    entries: DashMap<String, Keyword>,
}

impl KeywordTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the keyword for `name`, creating it on first use.
    pub fn intern(&self, name: &str) -> Keyword {
        if let Some(existing) = self.entries.get(name) {
            return existing.clone();
        }
        // entry() holds the shard lock, so racing writers agree on one keyword
        self.entries
            .entry(name.to_string())
            .or_insert_with(|| Keyword(Arc::from(name)))
            .clone()
    }

    /// Number of distinct keywords interned so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keyword has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `name` has been interned.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}
