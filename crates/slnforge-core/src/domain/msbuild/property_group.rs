//! Ordered property groups.
//!
//! A [`PropertyGroup`] is an ordered append-multimap keyed by
//! [`PropertyName`]: [`PropertyGroup::set`] always appends a new entry and
//! never overwrites, while [`PropertyGroup::get`] returns only the first
//! matching entry. Downstream consumers depend on exactly this asymmetry
//! (duplicate keys survive serialization in insertion order), so it is
//! preserved verbatim; see DESIGN.md before "fixing" it.

use super::condition::Condition;
use super::property::PropertyName;
use super::xml::XmlElement;

/// One `(name, value, optional condition)` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEntry {
    pub name: PropertyName,
    pub value: String,
    pub condition: Option<Condition>,
}

/// Ordered sequence of property entries; duplicates allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyGroup {
    entries: Vec<PropertyEntry>,
}

impl PropertyGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an unconditional entry. Never deduplicates.
    pub fn set(&mut self, name: PropertyName, value: impl Into<String>) {
        self.entries.push(PropertyEntry {
            name,
            value: value.into(),
            condition: None,
        });
    }

    /// Append an entry guarded by a condition.
    pub fn set_when(&mut self, name: PropertyName, value: impl Into<String>, condition: Condition) {
        self.entries.push(PropertyEntry {
            name,
            value: value.into(),
            condition: Some(condition),
        });
    }

    /// Value of the *first* entry with this name, if any.
    pub fn get(&self, name: &PropertyName) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| &e.name == name)
            .map(|e| e.value.as_str())
    }

    pub fn entries(&self) -> &[PropertyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn to_element(&self) -> XmlElement {
        let mut group = XmlElement::new("PropertyGroup");
        for entry in &self.entries {
            let mut property = XmlElement::new(entry.name.as_str());
            if let Some(condition) = &entry.condition {
                property.set_attr("Condition", condition.to_string());
            }
            property.set_text(entry.value.clone());
            group.push_child(property);
        }
        group
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
