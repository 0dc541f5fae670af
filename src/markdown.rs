//! Markdown rendering of a generated PRD.
//!
//! Pure and byte-stable: the same PRD always renders to the identical
//! string, which is what makes re-runs and snapshot assertions possible.

use crate::prd::GeneratedPrd;

/// Render the PRD as a markdown document.
pub fn render(prd: &GeneratedPrd) -> String {
    let mut out = String::new();

    out.push_str(&format!("# PRD: {}\n\n", prd.name));
    out.push_str(&format!("**Branch:** `{}`\n", prd.branch_name));
    out.push_str(&format!("**Slug:** `{}`\n\n", prd.slug));

    out.push_str("## Overview\n\n");
    out.push_str(&format!("{}\n\n", prd.description));

    out.push_str("## User Stories\n\n");
    for story in &prd.user_stories {
        out.push_str(&format!(
            "- **{}** (P{}): {}\n",
            story.id, story.priority, story.title
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prd::UserStory;

    fn make_prd() -> GeneratedPrd {
        GeneratedPrd {
            name: "Dark mode toggle".into(),
            slug: "dark-mode-toggle".into(),
            branch_name: "feature/dark-mode-toggle".into(),
            description: "Add a dark mode toggle to settings".into(),
            user_stories: vec![
                UserStory {
                    id: "US-001".into(),
                    title: "Dark mode toggle".into(),
                    priority: 1,
                },
                UserStory {
                    id: "US-002".into(),
                    title: "Core problem: Reading at night hurts".into(),
                    priority: 1,
                },
                UserStory {
                    id: "US-003".into(),
                    title: "Design: Match the settings page".into(),
                    priority: 3,
                },
            ],
        }
    }

    #[test]
    fn test_render_contains_name_and_branch() {
        let doc = render(&make_prd());
        assert!(doc.contains("# PRD: Dark mode toggle"));
        assert!(doc.contains("`feature/dark-mode-toggle`"));
    }

    #[test]
    fn test_render_one_line_per_story_in_order() {
        let doc = render(&make_prd());
        let story_lines: Vec<&str> = doc.lines().filter(|l| l.starts_with("- **US-")).collect();

        assert_eq!(story_lines.len(), 3);
        assert_eq!(
            story_lines[0],
            "- **US-001** (P1): Dark mode toggle"
        );
        assert_eq!(
            story_lines[2],
            "- **US-003** (P3): Design: Match the settings page"
        );
    }

    #[test]
    fn test_render_is_byte_stable() {
        let prd = make_prd();
        assert_eq!(render(&prd), render(&prd));
    }

    #[test]
    fn test_render_ends_with_newline() {
        assert!(render(&make_prd()).ends_with('\n'));
    }
}
