//! Declarative model for MSBuild `Directory.Build.targets` documents.
//!
//! The model is built in three layers:
//!
//! - **Leaves**: [`PropertyName`], [`TargetName`], [`Condition`] and the
//!   task types in [`tasks`] — plain values with no serialization logic.
//! - **Serialization**: each task declares an ordered field table
//!   ([`TaskModel::fields`]) and the generic machinery in [`fields`] turns
//!   it into an [`XmlElement`], validating required members first.
//! - **Composition**: [`TargetBuilder`] and [`ProjectBuilder`] assemble
//!   tasks and property groups into a whole document and render it only
//!   after a document-wide validation sweep.

pub mod builder;
pub mod condition;
pub mod fields;
pub mod project;
pub mod property;
pub mod property_group;
pub mod target;
pub mod tasks;
pub mod xml;

pub use builder::ElementBuilder;
pub use condition::Condition;
pub use fields::{Field, FieldKind, FieldValue, MarkupError, TaskModel};
pub use project::ProjectBuilder;
pub use property::{PropertyName, TargetName};
pub use property_group::{PropertyEntry, PropertyGroup};
pub use target::{Target, TargetBuilder};
pub use tasks::{
    CallTarget, Exec, Message, MessageImportance, Output, ReadLinesFromFile, WriteLinesToFile,
};
pub use xml::XmlElement;
