/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    type Id: Eq + std::hash::Hash + std::fmt::Display;

    fn id(&self) -> &Self::Id;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Normalizes a user supplied name, rejecting blank input.
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
