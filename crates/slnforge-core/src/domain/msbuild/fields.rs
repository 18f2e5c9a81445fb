//! Metadata-driven element serialization.
//!
//! Every task type declares its own ordered field table through
//! [`TaskModel::fields`]: for each member, a name, an attribute-vs-element
//! kind, a required flag, and the current value. The serializer is entirely
//! generic over that table, so adding a task type never touches this module.
//!
//! Serialization is two-phase. [`validate`] sweeps the whole field table
//! first — recursing into nested values — and fails fast on any unset
//! required member, naming it. Only after the sweep succeeds does [`to_element`]
//! produce markup, so a failure anywhere yields no partial output.
//!
//! Members a type chooses not to expose simply do not appear in its field
//! table; there is no separate ignore marker.

use thiserror::Error;

use super::xml::XmlElement;

/// Errors raised while turning a field table into markup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// A member declared `required` had no value. Fatal for the whole
    /// serialization call; the caller must fix its inputs and retry.
    #[error("required field '{element}.{field}' is not set")]
    MissingRequiredField {
        element: &'static str,
        field: &'static str,
    },
}

/// Where a field lands in the produced element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `Name="value"` on the element itself.
    Attribute,
    /// A nested child element named after the field.
    Element,
}

/// The current value of one declared field.
pub enum FieldValue<'a> {
    /// No value; omitted if optional, fatal if required.
    Unset,
    /// A scalar, rendered verbatim (after markup escaping).
    Text(String),
    /// An ordered list; attribute lists join with `;`.
    List(Vec<String>),
    /// A nested value serialized through its own field table.
    Nested(&'a dyn TaskModel),
}

/// One row of a type's field table.
pub struct Field<'a> {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    pub fn attribute(name: &'static str, required: bool, value: FieldValue<'a>) -> Self {
        Self {
            name,
            kind: FieldKind::Attribute,
            required,
            value,
        }
    }

    pub fn element(name: &'static str, required: bool, value: FieldValue<'a>) -> Self {
        Self {
            name,
            kind: FieldKind::Element,
            required,
            value,
        }
    }
}

/// A value serializable to one markup element via a declared field table.
pub trait TaskModel: std::fmt::Debug {
    /// Element name used when this value is serialized at the root.
    fn element_name(&self) -> &'static str;

    /// Ordered field table reflecting the current state of the value.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// Recursive required-field sweep. Runs to the first violation; nested
/// values are checked whether or not the enclosing member was required.
pub fn validate(model: &dyn TaskModel) -> Result<(), MarkupError> {
    for field in model.fields() {
        match field.value {
            FieldValue::Unset if field.required => {
                return Err(MarkupError::MissingRequiredField {
                    element: model.element_name(),
                    field: field.name,
                });
            }
            FieldValue::Unset => {}
            FieldValue::Nested(inner) => validate(inner)?,
            FieldValue::Text(_) | FieldValue::List(_) => {}
        }
    }
    Ok(())
}

/// Validate, then emit. No text is produced when validation fails.
pub fn to_element(model: &dyn TaskModel) -> Result<XmlElement, MarkupError> {
    validate(model)?;
    Ok(emit(model.element_name(), model))
}

fn emit(name: &str, model: &dyn TaskModel) -> XmlElement {
    let mut element = XmlElement::new(name);
    for field in model.fields() {
        match (field.kind, field.value) {
            (_, FieldValue::Unset) => {}
            (FieldKind::Attribute, FieldValue::Text(value)) => {
                element.set_attr(field.name, value);
            }
            (FieldKind::Attribute, FieldValue::List(values)) => {
                element.set_attr(field.name, values.join(";"));
            }
            (FieldKind::Element, FieldValue::Text(value)) => {
                element.push_child(XmlElement::new(field.name).text(value));
            }
            (FieldKind::Element, FieldValue::List(values)) => {
                element.push_child(XmlElement::new(field.name).text(values.join(";")));
            }
            // Nested values always become a child element named after the field.
            (_, FieldValue::Nested(inner)) => {
                element.push_child(emit(field.name, inner));
            }
        }
    }
    element
}

// ── Tests ─────────────────────────────────────────────────────────────────────
