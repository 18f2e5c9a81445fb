//! Composable boolean-condition expressions.
//!
//! A [`Condition`] is an opaque, already-rendered expression string in the
//! MSBuild condition syntax. The rendered form is the only observable form:
//! two conditions are equal iff their strings are equal, regardless of how
//! they were composed.
//!
//! `and`/`or` concatenate the operands with no added grouping. The consuming
//! build tool applies its own operator precedence, so a caller mixing AND and
//! OR across three or more levels must group explicitly with [`Condition::not`]
//! or by pre-rendering. This reproduces the output the downstream tooling was
//! written against; see DESIGN.md for the decision record.

use std::fmt;

/// A rendered boolean expression for a `Condition="..."` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Condition(String);

impl Condition {
    /// `'left' == 'right'`
    pub fn equal(left: impl fmt::Display, right: impl fmt::Display) -> Self {
        Self(format!("'{left}' == '{right}'"))
    }

    /// `'left' != 'right'`
    pub fn not_equal(left: impl fmt::Display, right: impl fmt::Display) -> Self {
        Self(format!("'{left}' != '{right}'"))
    }

    /// `'left' > 'right'`
    pub fn greater_than(left: impl fmt::Display, right: impl fmt::Display) -> Self {
        Self(format!("'{left}' > '{right}'"))
    }

    /// `'left' >= 'right'`
    pub fn greater_or_equal(left: impl fmt::Display, right: impl fmt::Display) -> Self {
        Self(format!("'{left}' >= '{right}'"))
    }

    /// `'left' < 'right'`
    pub fn less_than(left: impl fmt::Display, right: impl fmt::Display) -> Self {
        Self(format!("'{left}' < '{right}'"))
    }

    /// `'left' <= 'right'`
    pub fn less_or_equal(left: impl fmt::Display, right: impl fmt::Display) -> Self {
        Self(format!("'{left}' <= '{right}'"))
    }

    /// `{self} AND {other}` — no parentheses are added.
    pub fn and(self, other: Condition) -> Self {
        Self(format!("{} AND {}", self.0, other.0))
    }

    /// `{self} OR {other}` — no parentheses are added.
    pub fn or(self, other: Condition) -> Self {
        Self(format!("{} OR {}", self.0, other.0))
    }

    /// `!({condition})`
    pub fn not(condition: Condition) -> Self {
        Self(format!("!({})", condition.0))
    }

    /// `Exists('$(name)')` — true when the property's value names an existing path.
    pub fn property_exists(name: impl fmt::Display) -> Self {
        Self(format!("Exists('$({name})')"))
    }

    /// `Exists('path')`
    pub fn file_exists(path: impl fmt::Display) -> Self {
        Self(format!("Exists('{path}')"))
    }

    /// `'name' != ''`
    pub fn has_value(name: impl fmt::Display) -> Self {
        Self(format!("'{name}' != ''"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
