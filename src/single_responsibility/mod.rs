//! Question 1: Single Responsibility
//!
//! A type should have one reason to change. The question's repository stores,
//! creates and edits widgets; the solution leaves it with storage only and
//! moves construction to a factory and edits to an operations type.

pub mod question;
pub mod solution;

/// Plain value type shared by both variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    name: String,
}

impl Widget {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Case-insensitive name comparison used by the repository lookups.
    pub fn is_named(&self, name: &str) -> bool {
        self.name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(name.chars().flat_map(char::to_lowercase))
    }
}
