//! Pull-request body assembly.

use std::fmt::Write;

use crate::domain::classify::Classification;
use crate::domain::commit::BREAKING_ICON;

/// Heading of the section holding commits without a recognised type prefix.
pub const UNCATEGORIZED_HEADING: &str = "Other Changes";

/// Task metadata supplied by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInfo {
    pub title: String,
    /// Rendered literally in the task-reference section
    pub task_link: String,
}

/// The rendered pull-request description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrDocument {
    pub title: String,
    pub body: String,
}

fn write_section(out: &mut String, heading: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    let _ = writeln!(out, "### {}", heading);
    for line in lines {
        let _ = writeln!(out, "{}", line);
    }
    out.push('\n');
}

/// Heading of a scope group; scopes that would repeat a fixed heading get a
/// `(scope)` suffix.
fn scope_heading(scope: &str, breaking_heading: &str) -> String {
    if scope == UNCATEGORIZED_HEADING || scope == breaking_heading {
        format!("{} (scope)", scope)
    } else {
        scope.to_string()
    }
}

/// Assemble the Markdown body.
///
/// Sections, in order: description header, breaking changes, scope groups
/// (in first-seen order), uncategorized commits, task reference, testing
/// instructions. Empty sections are left out entirely.
pub fn assemble(
    classification: &Classification,
    task: &TaskInfo,
    testing_instructions: &str,
) -> PrDocument {
    let mut body = String::from("## Description\n\n");
    let breaking_heading = format!("{} Breaking Changes", BREAKING_ICON);

    write_section(&mut body, &breaking_heading, &classification.breaking);
    for (scope, lines) in &classification.groups {
        write_section(&mut body, &scope_heading(scope, &breaking_heading), lines);
    }
    write_section(&mut body, UNCATEGORIZED_HEADING, &classification.uncategorized);

    let _ = writeln!(body, "## Related Task\n\n{}\n", task.task_link);

    let _ = writeln!(body, "## How to Test\n");
    body.push_str("```sh\n");
    body.push_str(testing_instructions.trim_end_matches('\n'));
    body.push_str("\n```\n");

    PrDocument {
        title: task.title.clone(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn task() -> TaskInfo {
        TaskInfo {
            title: "Add OAuth".to_string(),
            task_link: "https://tracker.example.com/TASK-42".to_string(),
        }
    }

    #[test]
    fn test_assemble_full_layout() {
        let mut groups = IndexMap::new();
        groups.insert("auth".to_string(), vec!["- ✨ [a](u/commit/1)".to_string()]);
        let classification = Classification {
            breaking: vec!["- ⚠️ [b](u/commit/2)".to_string()],
            groups,
            uncategorized: vec!["- 📝 [c](u/commit/3)".to_string()],
        };

        let doc = assemble(&classification, &task(), "cargo test");
        let expected = "\
## Description

### ⚠️ Breaking Changes
- ⚠️ [b](u/commit/2)

### auth
- ✨ [a](u/commit/1)

### Other Changes
- 📝 [c](u/commit/3)

## Related Task

https://tracker.example.com/TASK-42

## How to Test

```sh
cargo test
```
";
        assert_eq!(doc.body, expected);
        assert_eq!(doc.title, "Add OAuth");
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let mut groups = IndexMap::new();
        groups.insert("core".to_string(), vec!["- 🐛 [x](u/commit/1)".to_string()]);
        groups.insert("empty".to_string(), Vec::new());
        let classification = Classification {
            groups,
            ..Classification::default()
        };

        let doc = assemble(&classification, &task(), "make check\n");
        assert!(!doc.body.contains("Breaking Changes"));
        assert!(!doc.body.contains(UNCATEGORIZED_HEADING));
        assert!(!doc.body.contains("### empty"));
        assert!(doc.body.contains("```sh\nmake check\n```\n"));
    }

    #[test]
    fn test_scope_named_like_fixed_heading_is_suffixed() {
        let mut groups = IndexMap::new();
        groups.insert("Other Changes".to_string(), vec!["- ✨ [typed](u/commit/1)".to_string()]);
        groups.insert("⚠️ Breaking Changes".to_string(), vec!["- 🐛 [odd](u/commit/2)".to_string()]);
        let classification = Classification {
            groups,
            uncategorized: vec!["- 📝 [plain subject](u/commit/3)".to_string()],
            ..Classification::default()
        };

        let doc = assemble(&classification, &task(), "cargo test");
        assert_eq!(doc.body.matches("### Other Changes\n").count(), 1);
        assert!(doc.body.contains("### Other Changes (scope)\n- ✨ [typed]"));
        assert!(doc.body.contains("### ⚠️ Breaking Changes (scope)\n- 🐛 [odd]"));
        assert!(!doc.body.contains("### ⚠️ Breaking Changes\n"));
    }
}
