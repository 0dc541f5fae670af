//! PRD generation.
//!
//! Pure transformation from collected answers to a [`GeneratedPrd`]. Given
//! the same answers this always produces the same document: same name, same
//! slug, same branch, same ordered story list.

use crate::prd::{ClarifyingAnswers, GeneratedPrd, UserStory};
use crate::questions;
use regex::Regex;

/// Branch names are the slug under a fixed prefix.
const BRANCH_PREFIX: &str = "feature/";

/// Names and story titles are clipped at a word boundary past this length.
const MAX_TITLE_LEN: usize = 60;

/// Slug used when the feature name normalizes to nothing.
const FALLBACK_SLUG: &str = "feature";

/// Name used when the description yields no usable sentence.
const FALLBACK_NAME: &str = "Untitled feature";

/// Generate the structured PRD from the collected answers.
///
/// Total over any well-formed [`ClarifyingAnswers`]: missing or empty
/// answers simply contribute no story.
pub fn generate(answers: &ClarifyingAnswers) -> GeneratedPrd {
    let name = derive_name(&answers.feature_description);
    let slug = slugify(&name);
    let branch_name = branch_name_for(&slug);

    let mut user_stories = Vec::new();

    // The lead story restates the feature itself and always comes first.
    user_stories.push(UserStory {
        id: story_id(1),
        title: name.clone(),
        priority: 1,
    });

    // One story per answered catalog question, in catalog order.
    for question in questions::catalog() {
        let answer = answers.answer(question.id);
        if answer.trim().is_empty() {
            continue;
        }
        user_stories.push(UserStory {
            id: story_id(user_stories.len() + 1),
            title: format!("{}: {}", question.story_topic, summarize(answer)),
            priority: question.story_priority,
        });
    }

    GeneratedPrd {
        name,
        slug,
        branch_name,
        description: answers.feature_description.trim().to_string(),
        user_stories,
    }
}

/// Derive the human-readable PRD name from the feature description:
/// the first sentence, whitespace-collapsed, clipped, capitalized.
pub fn derive_name(description: &str) -> String {
    let summary = summarize(description);
    if summary.is_empty() {
        return FALLBACK_NAME.to_string();
    }
    capitalize(&summary)
}

/// Normalize a name into a filesystem- and URL-safe slug.
///
/// Lowercase, non-alphanumeric runs collapsed to a single hyphen, no
/// leading or trailing hyphen. Never empty: a name with no alphanumerics
/// falls back to a fixed slug.
pub fn slugify(name: &str) -> String {
    let non_alnum = Regex::new(r"[^a-z0-9]+").unwrap();
    let slug = non_alnum
        .replace_all(&name.to_lowercase(), "-")
        .trim_matches('-')
        .to_string();

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// The branch a PRD targets: fixed prefix + slug.
pub fn branch_name_for(slug: &str) -> String {
    format!("{BRANCH_PREFIX}{slug}")
}

fn story_id(n: usize) -> String {
    format!("US-{:03}", n)
}

/// First sentence of a block of text, whitespace-collapsed and clipped at
/// a word boundary.
fn summarize(text: &str) -> String {
    let sentence_end = Regex::new(r"[.!?\n]").unwrap();
    let whitespace = Regex::new(r"\s+").unwrap();

    let first = sentence_end
        .split(text)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or("");

    let collapsed = whitespace.replace_all(first, " ").trim().to_string();
    clip_at_word(&collapsed, MAX_TITLE_LEN)
}

fn clip_at_word(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let mut out = String::new();
    for word in text.split_whitespace() {
        let next_len = if out.is_empty() {
            word.chars().count()
        } else {
            out.chars().count() + 1 + word.chars().count()
        };
        if next_len > max {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }

    if out.is_empty() {
        // Single word longer than the budget: hard clip.
        text.chars().take(max).collect()
    } else {
        out
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
