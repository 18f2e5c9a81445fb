//! Target composition.
//!
//! A target is a named, ordered unit of build actions. The builder records
//! children in call order and the serializer emits them in exactly that
//! order — interleaving tasks and nested conditional property groups is the
//! shape the generated restore/install targets rely on.
//!
//! Serialization is deferred: children are stored as live task values and
//! only turned into markup when the enclosing document renders, so the
//! document-wide validation sweep sees everything before any text exists.

use super::builder::ElementBuilder;
use super::condition::Condition;
use super::fields::{self, MarkupError, TaskModel};
use super::property::TargetName;
use super::property_group::PropertyGroup;
use super::tasks::{Exec, Message, MessageImportance, Output, ReadLinesFromFile, WriteLinesToFile};
use super::xml::XmlElement;

#[derive(Debug)]
enum TargetChild {
    Task(Box<dyn TaskModel>),
    PropertyGroup(PropertyGroup),
}

/// One named target with its ordered children.
#[derive(Debug)]
pub struct Target {
    name: TargetName,
    before_targets: Vec<TargetName>,
    condition: Option<Condition>,
    children: Vec<TargetChild>,
}

impl Target {
    pub fn name(&self) -> &TargetName {
        &self.name
    }

    /// Required-field sweep over every child task.
    pub(crate) fn validate(&self) -> Result<(), MarkupError> {
        for child in &self.children {
            if let TargetChild::Task(task) = child {
                fields::validate(task.as_ref())?;
            }
        }
        Ok(())
    }

    pub(crate) fn to_element(&self) -> Result<XmlElement, MarkupError> {
        let mut element = XmlElement::new("Target").attr("Name", self.name.as_str());
        if !self.before_targets.is_empty() {
            let joined = self
                .before_targets
                .iter()
                .map(TargetName::as_str)
                .collect::<Vec<_>>()
                .join(";");
            element.set_attr("BeforeTargets", joined);
        }
        if let Some(condition) = &self.condition {
            element.set_attr("Condition", condition.to_string());
        }
        for child in &self.children {
            match child {
                TargetChild::Task(task) => element.push_child(fields::to_element(task.as_ref())?),
                TargetChild::PropertyGroup(group) => element.push_child(group.to_element()),
            }
        }
        Ok(element)
    }
}

/// Fluent builder for [`Target`]. Emission order equals call order.
#[derive(Debug)]
pub struct TargetBuilder {
    target: Target,
}

impl TargetBuilder {
    pub fn new(name: TargetName) -> Self {
        Self {
            target: Target {
                name,
                before_targets: Vec::new(),
                condition: None,
                children: Vec::new(),
            },
        }
    }

    /// Targets this one must run before.
    pub fn before_targets(mut self, targets: impl IntoIterator<Item = TargetName>) -> Self {
        self.target.before_targets.extend(targets);
        self
    }

    /// Gate the whole target on a condition.
    pub fn condition(mut self, condition: Condition) -> Self {
        self.target.condition = Some(condition);
        self
    }

    /// High-importance progress message.
    pub fn add_message(self, text: impl Into<String>) -> Self {
        self.add_message_with(text, MessageImportance::High)
    }

    pub fn add_message_with(self, text: impl Into<String>, importance: MessageImportance) -> Self {
        self.push_task(Message {
            text: Some(text.into()),
            importance: Some(importance),
            condition: None,
        })
    }

    /// Shell invocation with quiet stdout and loud stderr.
    pub fn add_exec(self, command: impl Into<String>) -> Self {
        self.push_exec(command, None)
    }

    /// Shell invocation in a specific working directory.
    pub fn add_exec_in(
        self,
        command: impl Into<String>,
        working_directory: impl Into<String>,
    ) -> Self {
        self.push_exec(command, Some(working_directory.into()))
    }

    fn push_exec(self, command: impl Into<String>, working_directory: Option<String>) -> Self {
        self.push_task(Exec {
            command: Some(command.into()),
            standard_output_importance: Some(MessageImportance::Low),
            standard_error_importance: Some(MessageImportance::High),
            working_directory,
            condition: None,
        })
    }

    /// Read `file` into the item list named `output_item_name`.
    pub fn add_read_lines_from_file(
        self,
        file: impl Into<String>,
        output_item_name: impl Into<String>,
    ) -> Self {
        self.push_task(ReadLinesFromFile {
            file: Some(file.into()),
            output: Some(Output::read_lines(output_item_name)),
            condition: None,
        })
    }

    /// Write a single line to `file`.
    pub fn add_write_lines_to_file(
        self,
        file: impl Into<String>,
        line: impl Into<String>,
    ) -> Self {
        self.push_task(WriteLinesToFile {
            file: Some(file.into()),
            lines: Some(vec![line.into()]),
            condition: None,
        })
    }

    /// Any task, configured through its fluent [`ElementBuilder`].
    /// Validation happens when the enclosing document renders.
    pub fn add_task<T>(self, build: impl FnOnce(ElementBuilder<T>) -> ElementBuilder<T>) -> Self
    where
        T: TaskModel + Default + 'static,
    {
        let task = build(ElementBuilder::new()).into_inner();
        self.push_task(task)
    }

    /// Nested property group inside the target body.
    pub fn add_property_group(mut self, configure: impl FnOnce(&mut PropertyGroup)) -> Self {
        let mut group = PropertyGroup::new();
        configure(&mut group);
        self.target.children.push(TargetChild::PropertyGroup(group));
        self
    }

    fn push_task<T: TaskModel + 'static>(mut self, task: T) -> Self {
        self.target.children.push(TargetChild::Task(Box::new(task)));
        self
    }

    pub fn build(self) -> Target {
        self.target
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::msbuild::property::PropertyName;
    use crate::domain::msbuild::tasks::CallTarget;

    #[test]
    fn children_render_in_call_order() {
        let target = TargetBuilder::new(TargetName::Custom("T".into()))
            .add_message("a")
            .add_exec("b")
            .add_message("c")
            .build();

        let el = target.to_element().unwrap();
        let names: Vec<_> = el.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Message", "Exec", "Message"]);
        assert_eq!(el.children()[0].attribute("Text"), Some("a"));
        assert_eq!(el.children()[2].attribute("Text"), Some("c"));
    }

    #[test]
    fn before_targets_join_with_semicolons() {
        let target = TargetBuilder::new(TargetName::ToolsRestoreAndInstall)
            .before_targets([TargetName::Restore, TargetName::CollectPackageReferences])
            .build();

        let el = target.to_element().unwrap();
        assert_eq!(
            el.attribute("BeforeTargets"),
            Some("Restore;CollectPackageReferences")
        );
    }

    #[test]
    fn nested_property_group_keeps_position() {
        let target = TargetBuilder::new(TargetName::Custom("T".into()))
            .add_message("before")
            .add_property_group(|pg| {
                pg.set_when(
                    PropertyName::HUSKY_INSTALLED,
                    "true",
                    Condition::equal("%(ToolLines.Identity)", "Husky"),
                );
            })
            .add_message("after")
            .build();

        let el = target.to_element().unwrap();
        assert_eq!(el.children()[1].name(), "PropertyGroup");
    }

    #[test]
    fn validation_fails_for_incomplete_generic_task() {
        let target = TargetBuilder::new(TargetName::Custom("T".into()))
            .add_task::<CallTarget>(|task| task.with(|t| t.condition = Some(Condition::equal("a", "b"))))
            .build();

        assert_eq!(
            target.validate().unwrap_err(),
            MarkupError::MissingRequiredField {
                element: "CallTarget",
                field: "Targets",
            }
        );
    }

    #[test]
    fn exec_helper_sets_quiet_stdout_loud_stderr() {
        let target = TargetBuilder::new(TargetName::RestoreAndInstall)
            .add_exec_in("dotnet husky install", "$(DirectoryBuildTargetsDir)")
            .build();

        let el = target.to_element().unwrap();
        let exec = &el.children()[0];
        assert_eq!(exec.attribute("StandardOutputImportance"), Some("Low"));
        assert_eq!(exec.attribute("StandardErrorImportance"), Some("High"));
        assert_eq!(
            exec.attribute("WorkingDirectory"),
            Some("$(DirectoryBuildTargetsDir)")
        );
    }
}
