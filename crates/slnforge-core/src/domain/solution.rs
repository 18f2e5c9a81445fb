//! Solution-manifest folder augmentation.
//!
//! A Visual Studio solution manifest is line-oriented text. Solution folders
//! are `Project` entries with a fixed type id and an optional
//! `SolutionItems` section listing loose files. [`SolutionManifest`] appends
//! such entries to existing manifest text without touching what is already
//! there, and parses existing folder entries back out.
//!
//! Folder ids come from an injected [`FolderIdSource`] so that tests (and
//! anyone needing reproducible manifests) can supply deterministic ids.

use thiserror::Error;
use uuid::Uuid;

/// Project-type id that marks a solution folder.
pub const SOLUTION_FOLDER_TYPE_ID: &str = "2150E333-8FDC-42A3-9474-1A3956D46DE8";

const SECTION_START: &str = "ProjectSection(SolutionItems) = preProject";
const SECTION_END: &str = "EndProjectSection";
const PROJECT_END: &str = "EndProject";

/// Errors raised while reading folder entries back out of manifest text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolutionError {
    /// A folder header line did not carry the expected quoted fields.
    #[error("malformed solution folder header: {line}")]
    MalformedHeader { line: String },

    /// A solution-item line was not a single `name = path` pair.
    #[error("malformed solution item line: {line}")]
    MalformedItem { line: String },
}

/// Supplies ids for newly added solution folders.
pub trait FolderIdSource {
    fn next_id(&mut self) -> String;
}

/// Random ids, uppercased to match manifests written by the IDE.
#[derive(Debug, Default)]
pub struct UuidFolderIds;

impl FolderIdSource for UuidFolderIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string().to_uppercase()
    }
}

/// One loose file inside a solution folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionItem {
    pub name: String,
    pub path: String,
}

impl SolutionItem {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// The common case where the display name is the path itself.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: path.clone(),
            path,
        }
    }
}

/// A solution folder to append: a display name plus loose file items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionFolder {
    pub name: String,
    pub items: Vec<SolutionItem>,
}

impl SolutionFolder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, path: impl Into<String>) -> Self {
        self.items.push(SolutionItem::from_path(path));
        self
    }
}

/// A folder entry recovered from manifest text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSolutionFolder {
    pub name: String,
    pub id: String,
    pub items: Vec<SolutionItem>,
}

/// Mutable view over the text of a solution manifest.
///
/// Appending is not idempotent: adding the same folder twice produces two
/// entries, exactly as the raw text operation would.
#[derive(Debug, Clone)]
pub struct SolutionManifest {
    content: String,
}

impl SolutionManifest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }

    /// Append a folder entry at the end of the manifest. Existing text is
    /// left byte-for-byte unmodified; each appended line starts on its own
    /// new line.
    pub fn add_folder(&mut self, folder: &SolutionFolder, ids: &mut dyn FolderIdSource) {
        let id = ids.next_id();
        self.push_line(&format!(
            "Project(\"{{{SOLUTION_FOLDER_TYPE_ID}}}\") = \"{name}\", \"{name}\", \"{{{id}}}\"",
            name = folder.name,
        ));
        self.push_line(&format!("\t{SECTION_START}"));
        for item in &folder.items {
            self.push_line(&format!("\t\t{} = {}", item.name, item.path));
        }
        self.push_line(&format!("\t{SECTION_END}"));
        self.push_line(PROJECT_END);
    }

    fn push_line(&mut self, line: &str) {
        self.content.push('\n');
        self.content.push_str(line);
    }

    /// Every solution-folder entry currently present, in file order.
    pub fn folders(&self) -> Result<Vec<ParsedSolutionFolder>, SolutionError> {
        let mut folders = Vec::new();
        let mut lines = self.content.lines();
        while let Some(line) = lines.next() {
            let trimmed = line.trim();
            if !is_folder_header(trimmed) {
                continue;
            }
            let (name, id) = parse_header(trimmed)?;
            let mut items = Vec::new();
            for body_line in lines.by_ref() {
                let body = body_line.trim();
                if body == PROJECT_END {
                    break;
                }
                if body == SECTION_START || body == SECTION_END || body.is_empty() {
                    continue;
                }
                items.push(parse_item(body)?);
            }
            folders.push(ParsedSolutionFolder { name, id, items });
        }
        Ok(folders)
    }
}

fn is_folder_header(line: &str) -> bool {
    line.starts_with(&format!("Project(\"{{{SOLUTION_FOLDER_TYPE_ID}}}\")"))
}

/// Header shape: `Project("{type}") = "Name", "Name", "{ID}"`.
fn parse_header(line: &str) -> Result<(String, String), SolutionError> {
    let malformed = || SolutionError::MalformedHeader { line: line.into() };
    let (_, rest) = line.split_once('=').ok_or_else(malformed)?;
    let fields: Vec<&str> = rest.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(malformed());
    }
    let name = fields[0].trim_matches('"');
    let id = fields[2].trim_matches(['"', '{', '}']);
    if name.is_empty() || id.is_empty() {
        return Err(malformed());
    }
    Ok((name.to_string(), id.to_string()))
}

fn parse_item(line: &str) -> Result<SolutionItem, SolutionError> {
    let parts: Vec<&str> = line.split('=').map(str::trim).collect();
    match parts[..] {
        [name, path] if !name.is_empty() && !path.is_empty() => Ok(SolutionItem::new(name, path)),
        _ => Err(SolutionError::MalformedItem { line: line.into() }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    struct SequentialIds(u32);

    impl FolderIdSource for SequentialIds {
        fn next_id(&mut self) -> String {
            self.0 += 1;
            format!("00000000-0000-0000-0000-{:012}", self.0)
        }
    }

    const BASE: &str = "Microsoft Visual Studio Solution File, Format Version 12.00\n# Visual Studio Version 17";

    #[test]
    fn add_folder_appends_full_entry() {
        let mut manifest = SolutionManifest::new(BASE);
        let folder = SolutionFolder::new("SolutionSettings")
            .with_item("Directory.Build.targets")
            .with_item(".editorconfig");
        manifest.add_folder(&folder, &mut SequentialIds(0));

        let expected = format!(
            "{BASE}\n\
             Project(\"{{2150E333-8FDC-42A3-9474-1A3956D46DE8}}\") = \"SolutionSettings\", \"SolutionSettings\", \"{{00000000-0000-0000-0000-000000000001}}\"\n\
             \tProjectSection(SolutionItems) = preProject\n\
             \t\tDirectory.Build.targets = Directory.Build.targets\n\
             \t\t.editorconfig = .editorconfig\n\
             \tEndProjectSection\n\
             EndProject"
        );
        assert_eq!(manifest.content(), expected);
    }

    #[test]
    fn add_folder_leaves_existing_text_untouched() {
        let mut manifest = SolutionManifest::new(BASE);
        manifest.add_folder(&SolutionFolder::new("Empty"), &mut SequentialIds(0));
        assert!(manifest.content().starts_with(BASE));
    }

    // The section markers are part of the fixed block, items or not.
    #[test]
    fn folder_without_items_keeps_section_markers() {
        let mut manifest = SolutionManifest::new(BASE);
        manifest.add_folder(&SolutionFolder::new("Empty"), &mut SequentialIds(0));

        let expected = format!(
            "{BASE}\n\
             Project(\"{{2150E333-8FDC-42A3-9474-1A3956D46DE8}}\") = \"Empty\", \"Empty\", \"{{00000000-0000-0000-0000-000000000001}}\"\n\
             \tProjectSection(SolutionItems) = preProject\n\
             \tEndProjectSection\n\
             EndProject"
        );
        assert_eq!(manifest.content(), expected);
    }

    #[test]
    fn item_name_and_path_may_differ() {
        let mut manifest = SolutionManifest::new(BASE);
        let folder = SolutionFolder {
            name: "Docs".into(),
            items: vec![SolutionItem::new("readme", "docs/README.md")],
        };
        manifest.add_folder(&folder, &mut SequentialIds(0));
        assert!(manifest.content().contains("\t\treadme = docs/README.md"));
    }

    #[test]
    fn adding_twice_is_not_deduplicated() {
        let mut ids = SequentialIds(0);
        let mut manifest = SolutionManifest::new(BASE);
        let folder = SolutionFolder::new("Dup");
        manifest.add_folder(&folder, &mut ids);
        manifest.add_folder(&folder, &mut ids);

        let folders = manifest.folders().unwrap();
        assert_eq!(folders.len(), 2);
        assert_ne!(folders[0].id, folders[1].id);
    }

    #[test]
    fn parse_recovers_what_add_wrote() {
        let mut manifest = SolutionManifest::new(BASE);
        let folder = SolutionFolder::new("SolutionSettings")
            .with_item("Directory.Build.targets")
            .with_item(".husky/task-runner.json");
        manifest.add_folder(&folder, &mut SequentialIds(0));

        let folders = manifest.folders().unwrap();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].name, "SolutionSettings");
        assert_eq!(folders[0].id, "00000000-0000-0000-0000-000000000001");
        assert_eq!(
            folders[0].items,
            [
                SolutionItem::from_path("Directory.Build.targets"),
                SolutionItem::from_path(".husky/task-runner.json"),
            ]
        );
    }

    #[test]
    fn parse_ignores_ordinary_project_entries() {
        let text = format!(
            "{BASE}\n\
             Project(\"{{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}}\") = \"App\", \"src/App/App.csproj\", \"{{AAAA}}\"\n\
             EndProject"
        );
        let folders = SolutionManifest::new(text).folders().unwrap();
        assert!(folders.is_empty());
    }

    #[test]
    fn malformed_item_line_is_an_error() {
        let text = format!(
            "Project(\"{{{SOLUTION_FOLDER_TYPE_ID}}}\") = \"X\", \"X\", \"{{ID}}\"\n\
             \tProjectSection(SolutionItems) = preProject\n\
             \t\ta = b = c\n\
             \tEndProjectSection\n\
             EndProject"
        );
        let err = SolutionManifest::new(text).folders().unwrap_err();
        assert_eq!(
            err,
            SolutionError::MalformedItem {
                line: "a = b = c".into()
            }
        );
    }

    #[test]
    fn random_ids_are_uppercase() {
        let id = UuidFolderIds.next_id();
        assert_eq!(id, id.to_uppercase());
        assert_eq!(id.len(), 36);
    }
}
