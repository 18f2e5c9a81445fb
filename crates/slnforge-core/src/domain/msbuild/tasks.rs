//! The task family: one type per build-action node.
//!
//! Each task implements [`TaskModel`] with a statically declared field table
//! (ordered, attribute-vs-element, required flags). Every task carries an
//! optional [`Condition`] rendered as a plain attribute.

use std::fmt;

use super::condition::Condition;
use super::fields::{Field, FieldValue, TaskModel};
use super::property::TargetName;

/// Message verbosity understood by the build tool's logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageImportance {
    High,
    Normal,
    Low,
}

impl fmt::Display for MessageImportance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Normal => "Normal",
            Self::Low => "Low",
        })
    }
}

fn text_of<T: fmt::Display>(value: &Option<T>) -> FieldValue<'static> {
    value
        .as_ref()
        .map_or(FieldValue::Unset, |v| FieldValue::Text(v.to_string()))
}

fn list_of<T: fmt::Display>(values: &Option<Vec<T>>) -> FieldValue<'static> {
    values.as_ref().map_or(FieldValue::Unset, |vs| {
        FieldValue::List(vs.iter().map(ToString::to_string).collect())
    })
}

// ── Message ───────────────────────────────────────────────────────────────────

/// Logs a line during the build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Message {
    pub text: Option<String>,
    pub importance: Option<MessageImportance>,
    pub condition: Option<Condition>,
}

impl TaskModel for Message {
    fn element_name(&self) -> &'static str {
        "Message"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::attribute("Text", true, text_of(&self.text)),
            Field::attribute("Importance", false, text_of(&self.importance)),
            Field::attribute("Condition", false, text_of(&self.condition)),
        ]
    }
}

// ── Exec ──────────────────────────────────────────────────────────────────────

/// Runs a shell command.
#[derive(Debug, Clone, PartialEq)]
pub struct Exec {
    pub command: Option<String>,
    pub standard_output_importance: Option<MessageImportance>,
    pub standard_error_importance: Option<MessageImportance>,
    pub working_directory: Option<String>,
    pub condition: Option<Condition>,
}

impl Default for Exec {
    fn default() -> Self {
        Self {
            command: None,
            standard_output_importance: Some(MessageImportance::Normal),
            standard_error_importance: Some(MessageImportance::Normal),
            working_directory: None,
            condition: None,
        }
    }
}

impl TaskModel for Exec {
    fn element_name(&self) -> &'static str {
        "Exec"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::attribute("Command", true, text_of(&self.command)),
            Field::attribute(
                "StandardOutputImportance",
                false,
                text_of(&self.standard_output_importance),
            ),
            Field::attribute(
                "StandardErrorImportance",
                false,
                text_of(&self.standard_error_importance),
            ),
            Field::attribute("WorkingDirectory", false, text_of(&self.working_directory)),
            Field::attribute("Condition", false, text_of(&self.condition)),
        ]
    }
}

// ── CallTarget ────────────────────────────────────────────────────────────────

/// Invokes other targets by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallTarget {
    pub targets: Option<Vec<TargetName>>,
    pub condition: Option<Condition>,
}

impl TaskModel for CallTarget {
    fn element_name(&self) -> &'static str {
        "CallTarget"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::attribute("Targets", true, list_of(&self.targets)),
            Field::attribute("Condition", false, text_of(&self.condition)),
        ]
    }
}

// ── ReadLinesFromFile ─────────────────────────────────────────────────────────

/// Reads a file into an item list via a nested [`Output`] binding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadLinesFromFile {
    pub file: Option<String>,
    pub output: Option<Output>,
    pub condition: Option<Condition>,
}

impl TaskModel for ReadLinesFromFile {
    fn element_name(&self) -> &'static str {
        "ReadLinesFromFile"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::attribute("File", true, text_of(&self.file)),
            Field::attribute("Condition", false, text_of(&self.condition)),
            Field::element(
                "Output",
                true,
                self.output
                    .as_ref()
                    .map_or(FieldValue::Unset, |o| FieldValue::Nested(o)),
            ),
        ]
    }
}

/// Binds a task parameter to an item list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub task_parameter: Option<String>,
    pub item_name: Option<String>,
}

impl Output {
    /// Binding for `ReadLinesFromFile`: its `Lines` parameter into `item_name`.
    pub fn read_lines(item_name: impl Into<String>) -> Self {
        Self {
            task_parameter: Some("Lines".into()),
            item_name: Some(item_name.into()),
        }
    }
}

impl TaskModel for Output {
    fn element_name(&self) -> &'static str {
        "Output"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::attribute("TaskParameter", true, text_of(&self.task_parameter)),
            Field::attribute("ItemName", true, text_of(&self.item_name)),
        ]
    }
}

// ── WriteLinesToFile ──────────────────────────────────────────────────────────

/// Writes lines to a file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteLinesToFile {
    pub file: Option<String>,
    pub lines: Option<Vec<String>>,
    pub condition: Option<Condition>,
}

impl TaskModel for WriteLinesToFile {
    fn element_name(&self) -> &'static str {
        "WriteLinesToFile"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::attribute("File", true, text_of(&self.file)),
            Field::attribute("Lines", true, list_of(&self.lines)),
            Field::attribute("Condition", false, text_of(&self.condition)),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
