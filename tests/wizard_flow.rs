//! End-to-end wizard runs driven by a scripted prompter.

use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

use prdgen::collector::AnswerCollector;
use prdgen::config::WizardConfig;
use prdgen::prd::GeneratedPrd;
use prdgen::prompt::Prompter;
use prdgen::questions;
use prdgen::store::PrdStore;
use prdgen::wizard::{PrdGenerationResult, Wizard};
use tempfile::TempDir;

/// A long-enough answer that never triggers a follow-up nudge.
const LONG: &str = "a sufficiently detailed answer for this question";

#[derive(Debug, Clone)]
enum Reply {
    Text(&'static str),
    Bool(bool),
    Choice(usize),
    Cancel,
}

struct ScriptedPrompter {
    script: VecDeque<Reply>,
}

impl ScriptedPrompter {
    fn new(script: Vec<Reply>) -> Self {
        Self {
            script: script.into(),
        }
    }

    fn exhausted(&self) -> bool {
        self.script.is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, question: &str) -> Option<String> {
        match self.script.pop_front() {
            Some(Reply::Text(s)) => Some(s.to_string()),
            Some(Reply::Cancel) | None => None,
            other => panic!("unexpected input prompt {question:?}, script had {other:?}"),
        }
    }

    fn confirm(&mut self, question: &str, _default: bool) -> Option<bool> {
        match self.script.pop_front() {
            Some(Reply::Bool(b)) => Some(b),
            Some(Reply::Cancel) | None => None,
            other => panic!("unexpected confirm prompt {question:?}, script had {other:?}"),
        }
    }

    fn select(&mut self, question: &str, _options: &[&str], _default: usize) -> Option<usize> {
        match self.script.pop_front() {
            Some(Reply::Choice(i)) => Some(i),
            Some(Reply::Cancel) | None => None,
            other => panic!("unexpected select prompt {question:?}, script had {other:?}"),
        }
    }
}

/// The interview portion of a script: description plus one long answer per
/// catalog question.
fn interview(description: &'static str) -> Vec<Reply> {
    let mut script = vec![Reply::Text(description)];
    script.extend(questions::catalog().iter().map(|_| Reply::Text(LONG)));
    script
}

fn run_wizard(dir: &TempDir, force: bool, script: Vec<Reply>) -> PrdGenerationResult {
    let config = WizardConfig::new(dir.path().to_path_buf()).with_force(force);
    let mut prompter = ScriptedPrompter::new(script);
    let result = Wizard::new(config, &mut prompter).run();
    assert!(prompter.exhausted(), "script had unused replies");
    result
}

fn store_for(dir: &TempDir) -> PrdStore {
    PrdStore::from_config(&WizardConfig::new(dir.path().to_path_buf()))
}

// ===========================================
// Clean run
// ===========================================

#[test]
fn clean_run_writes_markdown_and_tracker_json() {
    let dir = TempDir::new().unwrap();

    let mut script = interview("Add dark mode toggle");
    script.push(Reply::Bool(true)); // emit tracker document
    script.push(Reply::Choice(0)); // json

    let result = run_wizard(&dir, false, script);

    assert!(result.success);
    assert!(!result.cancelled);
    assert_eq!(result.error, None);

    let markdown_path = result.markdown_path.as_ref().unwrap();
    assert!(markdown_path.ends_with("tasks/prd-add-dark-mode-toggle.md"));

    let markdown = fs::read_to_string(markdown_path).unwrap();
    assert!(markdown.contains("# PRD: Add dark mode toggle"));
    assert!(markdown.contains("`feature/add-dark-mode-toggle`"));

    // One lead story plus one per answered catalog question.
    let story_lines = markdown
        .lines()
        .filter(|l| l.starts_with("- **US-"))
        .count();
    assert_eq!(story_lines, 1 + questions::catalog().len());

    // The tracker document mirrors the generated PRD losslessly.
    let json_path = result.json_path.as_ref().unwrap();
    let loaded: GeneratedPrd =
        serde_json::from_str(&fs::read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(Some(loaded), result.prd);
}

// ===========================================
// Brevity follow-up
// ===========================================

#[test]
fn brief_answer_stores_concatenated_follow_up() {
    // Driven at the collector seam, where the stored answer is observable.
    let mut script = vec![
        Reply::Text("Add dark mode toggle"),
        Reply::Text("night"),        // under the brevity threshold
        Reply::Text("more context"), // follow-up reply
    ];
    script.extend(questions::catalog().iter().skip(1).map(|_| Reply::Text(LONG)));

    let mut prompter = ScriptedPrompter::new(script);
    let answers = AnswerCollector::new(&mut prompter).collect().unwrap();

    assert_eq!(answers.answer("problem"), "night. more context");
    assert!(prompter.exhausted());
}

// ===========================================
// Overwrite protection
// ===========================================

#[test]
fn declined_overwrite_cancels_and_preserves_file() {
    let dir = TempDir::new().unwrap();
    let store = store_for(&dir);
    store.ensure_dir().unwrap();

    let existing = store.markdown_path("add-dark-mode-toggle");
    store.write(&existing, "original content").unwrap();

    let mut script = interview("Add dark mode toggle");
    script.push(Reply::Bool(false)); // decline the overwrite

    let result = run_wizard(&dir, false, script);

    assert!(!result.success);
    assert!(result.cancelled);
    assert!(result.prd.is_some(), "generation work is not discarded");
    assert_eq!(result.markdown_path, None);
    assert_eq!(result.json_path, None);

    assert_eq!(fs::read_to_string(&existing).unwrap(), "original content");
    assert!(!store.json_path().exists());
}

#[test]
fn force_skips_the_overwrite_prompt() {
    let dir = TempDir::new().unwrap();
    let store = store_for(&dir);
    store.ensure_dir().unwrap();
    store
        .write(&store.markdown_path("add-dark-mode-toggle"), "original")
        .unwrap();

    let mut script = interview("Add dark mode toggle");
    script.push(Reply::Bool(false)); // no tracker document

    let result = run_wizard(&dir, true, script);

    assert!(result.success);
    let markdown = fs::read_to_string(result.markdown_path.unwrap()).unwrap();
    assert!(markdown.contains("# PRD: Add dark mode toggle"));
}

// ===========================================
// Conversion isolation
// ===========================================

#[test]
fn failed_beads_conversion_does_not_fail_the_run() {
    let dir = TempDir::new().unwrap();

    let mut script = interview("Add dark mode toggle");
    script.push(Reply::Bool(true)); // emit tracker document
    script.push(Reply::Choice(1)); // beads

    let result = run_wizard(&dir, false, script);

    assert!(result.success, "markdown write already succeeded");
    assert_eq!(result.json_path, None);
    assert!(result.markdown_path.as_ref().unwrap().exists());
    assert!(!store_for(&dir).json_path().exists());
}

// ===========================================
// Cancellation
// ===========================================

#[test]
fn empty_description_cancels_without_writing_anything() {
    let dir = TempDir::new().unwrap();

    let result = run_wizard(&dir, false, vec![Reply::Text("")]);

    assert!(!result.success);
    assert!(result.cancelled);
    assert_eq!(result.prd, None);
    assert_eq!(result.markdown_path, None);

    // No questions were asked and the output directory was never created.
    assert!(!dir.path().join("tasks").exists());
}

#[test]
fn cancelled_prompt_mid_interview_cancels_the_run() {
    let dir = TempDir::new().unwrap();

    let result = run_wizard(
        &dir,
        false,
        vec![Reply::Text("Add dark mode toggle"), Reply::Cancel],
    );

    assert!(result.cancelled);
    assert!(!dir.path().join("tasks").exists());
}

// ===========================================
// Re-run behavior
// ===========================================

#[test]
fn repeated_runs_produce_byte_identical_markdown() {
    let dir = TempDir::new().unwrap();

    let mut script = interview("Add dark mode toggle");
    script.push(Reply::Bool(false));
    let first = run_wizard(&dir, true, script);
    let first_bytes = fs::read(first.markdown_path.as_ref().unwrap()).unwrap();

    let mut script = interview("Add dark mode toggle");
    script.push(Reply::Bool(false));
    let second = run_wizard(&dir, true, script);
    let second_bytes = fs::read(second.markdown_path.as_ref().unwrap()).unwrap();

    assert_eq!(first.markdown_path, second.markdown_path);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn prd_exists_answers_consistently_across_a_run() {
    let dir = TempDir::new().unwrap();
    let store = store_for(&dir);

    assert_eq!(store.prd_exists("Add dark mode toggle"), None);

    let mut script = interview("Add dark mode toggle");
    script.push(Reply::Bool(false));
    let result = run_wizard(&dir, false, script);

    let found: Option<PathBuf> = store.prd_exists("Add dark mode toggle");
    assert_eq!(found, result.markdown_path);
}

#[test]
fn skipping_conversion_omits_json_path_only() {
    let dir = TempDir::new().unwrap();

    let mut script = interview("Add dark mode toggle");
    script.push(Reply::Bool(false));

    let result = run_wizard(&dir, false, script);

    assert!(result.success);
    assert!(result.markdown_path.is_some());
    assert_eq!(result.json_path, None);
}
