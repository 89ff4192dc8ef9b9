use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Opaque identifier of an [`Account`](super::Account).
    AccountId
);
string_id!(
    /// Opaque identifier of a [`Category`](super::Category).
    CategoryId
);
string_id!(
    /// Opaque identifier of a [`Transaction`](super::Transaction).
    TransactionId
);

/// Source of fresh identifiers.
///
/// A generator never yields the same value twice over its lifetime. Callers
/// that mix generated ids with ids loaded from elsewhere go through
/// [`unique_id`], which skips values already taken.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic `<prefix><n>` identifiers, useful for deterministic replays.
#[derive(Debug, Clone)]
pub struct SequentialGenerator {
    prefix: String,
    next: u64,
}

impl SequentialGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::new("id-")
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Draws ids from `ids` until one is not reported as taken.
pub fn unique_id<F>(ids: &mut dyn IdGenerator, is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    loop {
        let candidate = ids.next_id();
        if !candidate.is_empty() && !is_taken(&candidate) {
            return candidate;
        }
    }
}
