//! Whole-document composition.
//!
//! A [`ProjectBuilder`] collects top-level property groups and targets and
//! renders them as one `<Project>` document. Rendering validates every task
//! in every target before emitting any text, so an unset required field
//! anywhere means no output at all rather than a truncated file.

use super::fields::MarkupError;
use super::property_group::PropertyGroup;
use super::target::{Target, TargetBuilder};
use super::xml::XmlElement;

/// Builder for a complete `<Project>` document.
#[derive(Debug, Default)]
pub struct ProjectBuilder {
    property_groups: Vec<PropertyGroup>,
    targets: Vec<Target>,
}

impl ProjectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level property group, emitted before any target.
    pub fn add_property_group(mut self, configure: impl FnOnce(&mut PropertyGroup)) -> Self {
        let mut group = PropertyGroup::new();
        configure(&mut group);
        self.property_groups.push(group);
        self
    }

    pub fn add_target(mut self, target: TargetBuilder) -> Self {
        self.targets.push(target.build());
        self
    }

    /// Validate the whole document, then serialize it. The returned string
    /// ends with a trailing newline.
    pub fn render(&self) -> Result<String, MarkupError> {
        for target in &self.targets {
            target.validate()?;
        }
        let mut project = XmlElement::new("Project");
        for group in &self.property_groups {
            project.push_child(group.to_element());
        }
        for target in &self.targets {
            project.push_child(target.to_element()?);
        }
        Ok(format!("{project}\n"))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::msbuild::property::{PropertyName, TargetName};
    use crate::domain::msbuild::tasks::Exec;

    #[test]
    fn property_groups_precede_targets() {
        let doc = ProjectBuilder::new()
            .add_target(TargetBuilder::new(TargetName::Custom("T".into())).add_message("hi"))
            .add_property_group(|pg| pg.set(PropertyName::custom("X"), "1"))
            .render()
            .unwrap();

        let group_at = doc.find("<PropertyGroup>").unwrap();
        let target_at = doc.find("<Target").unwrap();
        assert!(group_at < target_at);
    }

    #[test]
    fn empty_project_renders_self_closing() {
        let doc = ProjectBuilder::new().render().unwrap();
        assert_eq!(doc, "<Project />\n");
    }

    #[test]
    fn invalid_task_anywhere_yields_no_output() {
        let result = ProjectBuilder::new()
            .add_property_group(|pg| pg.set(PropertyName::custom("X"), "1"))
            .add_target(TargetBuilder::new(TargetName::Custom("Ok".into())).add_message("fine"))
            .add_target(
                TargetBuilder::new(TargetName::Custom("Bad".into()))
                    .add_task::<Exec>(|task| task.with(|e| e.working_directory = Some(".".into()))),
            )
            .render();

        assert_eq!(
            result.unwrap_err(),
            MarkupError::MissingRequiredField {
                element: "Exec",
                field: "Command",
            }
        );
    }

    #[test]
    fn rendered_document_ends_with_newline() {
        let doc = ProjectBuilder::new()
            .add_property_group(|pg| pg.set(PropertyName::custom("X"), "1"))
            .render()
            .unwrap();
        assert!(doc.ends_with("</Project>\n"));
    }
}
