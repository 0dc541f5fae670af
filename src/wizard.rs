//! The wizard orchestrator.
//!
//! Sequences the interview, generation, persistence, and conversion steps
//! as an explicit state machine. Every run resolves to exactly one
//! [`PrdGenerationResult`]; cancellation and failure are mapped here and
//! nowhere below.

use std::path::PathBuf;

use crate::collector::AnswerCollector;
use crate::config::WizardConfig;
use crate::generator;
use crate::markdown;
use crate::output::{self, BannerColor, BOLD, CYAN, GRAY, GREEN, RESET};
use crate::prd::{ClarifyingAnswers, GeneratedPrd};
use crate::prompt::Prompter;
use crate::signal::SignalHandler;
use crate::store::PrdStore;
use crate::tracker::{self, TrackerFormat};

/// Terminal outcome of a wizard run.
///
/// `cancelled` is true iff the user aborted before this run wrote any file;
/// a declined overwrite still attaches the generated PRD, distinguishing a
/// completed computation from a completed write.
#[derive(Debug, Clone, PartialEq)]
pub struct PrdGenerationResult {
    pub success: bool,
    pub cancelled: bool,
    pub markdown_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
    pub prd: Option<GeneratedPrd>,
    pub error: Option<String>,
}

impl PrdGenerationResult {
    fn done(markdown_path: PathBuf, json_path: Option<PathBuf>, prd: GeneratedPrd) -> Self {
        Self {
            success: true,
            cancelled: false,
            markdown_path: Some(markdown_path),
            json_path,
            prd: Some(prd),
            error: None,
        }
    }

    fn cancelled(prd: Option<GeneratedPrd>) -> Self {
        Self {
            success: false,
            cancelled: true,
            markdown_path: None,
            json_path: None,
            prd,
            error: None,
        }
    }

    fn failed(error: String, prd: Option<GeneratedPrd>) -> Self {
        Self {
            success: false,
            cancelled: false,
            markdown_path: None,
            json_path: None,
            prd,
            error: Some(error),
        }
    }
}

/// Wizard progression. Non-terminal states carry the data the next step
/// needs; terminal states carry what the result shape requires.
enum WizardState {
    Start,
    Collecting,
    Generating(ClarifyingAnswers),
    CheckingExistingFile(GeneratedPrd),
    ConfirmOverwrite {
        prd: GeneratedPrd,
        path: PathBuf,
    },
    WritingMarkdown {
        prd: GeneratedPrd,
        path: PathBuf,
    },
    PromptingConversion {
        prd: GeneratedPrd,
        markdown_path: PathBuf,
    },
    Converting {
        prd: GeneratedPrd,
        markdown_path: PathBuf,
        format: TrackerFormat,
    },
    Done {
        prd: GeneratedPrd,
        markdown_path: PathBuf,
        json_path: Option<PathBuf>,
    },
    Cancelled(Option<GeneratedPrd>),
    Failed(String, Option<GeneratedPrd>),
}

/// One interactive PRD-creation session.
pub struct Wizard<'a, P: Prompter> {
    config: WizardConfig,
    prompter: &'a mut P,
    signals: SignalHandler,
}

impl<'a, P: Prompter> Wizard<'a, P> {
    pub fn new(config: WizardConfig, prompter: &'a mut P) -> Self {
        Self {
            config,
            prompter,
            signals: SignalHandler::disabled(),
        }
    }

    /// Attach a live SIGINT handler so Ctrl+C maps to a cancelled run.
    pub fn with_signals(mut self, signals: SignalHandler) -> Self {
        self.signals = signals;
        self
    }

    /// Run the wizard to completion. Never panics and never returns an
    /// error: every path, including interrupts, lands in one result.
    pub fn run(mut self) -> PrdGenerationResult {
        let store = PrdStore::from_config(&self.config);
        let mut state = WizardState::Start;

        loop {
            if self.signals.is_interrupted() {
                state = interrupt(state);
            }

            state = match state {
                WizardState::Done {
                    prd,
                    markdown_path,
                    json_path,
                } => {
                    self.report_done(&markdown_path, json_path.clone());
                    return PrdGenerationResult::done(markdown_path, json_path, prd);
                }
                WizardState::Cancelled(prd) => {
                    println!();
                    println!("{GRAY}Cancelled. No PRD file was written.{RESET}");
                    return PrdGenerationResult::cancelled(prd);
                }
                WizardState::Failed(error, prd) => {
                    output::print_error(&error);
                    return PrdGenerationResult::failed(error, prd);
                }
                other => self.advance(other, &store),
            };
        }
    }

    fn advance(&mut self, state: WizardState, store: &PrdStore) -> WizardState {
        match state {
            WizardState::Start => {
                output::print_header();
                WizardState::Collecting
            }

            WizardState::Collecting => {
                match AnswerCollector::new(self.prompter).collect() {
                    Some(answers) => WizardState::Generating(answers),
                    None => WizardState::Cancelled(None),
                }
            }

            WizardState::Generating(answers) => {
                let prd = generator::generate(&answers);
                println!();
                output::print_section_banner("GENERATED PRD", BannerColor::Green);
                println!();
                output::print_prd_summary(&prd);
                WizardState::CheckingExistingFile(prd)
            }

            WizardState::CheckingExistingFile(prd) => {
                if let Err(e) = store.ensure_dir() {
                    return WizardState::Failed(e.to_string(), Some(prd));
                }
                let path = store.markdown_path(&prd.slug);
                if store.exists(&path) && !self.config.force {
                    WizardState::ConfirmOverwrite { prd, path }
                } else {
                    WizardState::WritingMarkdown { prd, path }
                }
            }

            WizardState::ConfirmOverwrite { prd, path } => {
                println!(
                    "A PRD already exists at {CYAN}{}{RESET}.",
                    path.display()
                );
                match self.prompter.confirm("Overwrite it?", false) {
                    Some(true) => WizardState::WritingMarkdown { prd, path },
                    // Declined or cancelled: keep the file, keep the PRD.
                    _ => WizardState::Cancelled(Some(prd)),
                }
            }

            WizardState::WritingMarkdown { prd, path } => {
                let document = markdown::render(&prd);
                match store.write(&path, &document) {
                    Ok(()) => {
                        output::print_success(&format!("Wrote {}", path.display()));
                        WizardState::PromptingConversion {
                            prd,
                            markdown_path: path,
                        }
                    }
                    Err(e) => WizardState::Failed(e.to_string(), Some(prd)),
                }
            }

            WizardState::PromptingConversion { prd, markdown_path } => {
                println!();
                let wants_conversion = self
                    .prompter
                    .confirm("Also emit a tracker document?", true);

                // The markdown artifact is already durable; skipping (or
                // abandoning) conversion is not an error.
                match wants_conversion {
                    Some(true) => {}
                    _ => {
                        return WizardState::Done {
                            prd,
                            markdown_path,
                            json_path: None,
                        }
                    }
                }

                let labels: Vec<&str> =
                    TrackerFormat::ALL.iter().map(|f| f.label()).collect();
                match self.prompter.select("Which tracker format?", &labels, 0) {
                    Some(choice) => WizardState::Converting {
                        prd,
                        markdown_path,
                        format: TrackerFormat::ALL[choice],
                    },
                    None => WizardState::Done {
                        prd,
                        markdown_path,
                        json_path: None,
                    },
                }
            }

            WizardState::Converting {
                prd,
                markdown_path,
                format,
            } => {
                let conversion = tracker::convert(&prd, format, store);
                if conversion.success {
                    if let Some(path) = &conversion.path {
                        output::print_success(&format!("Wrote {}", path.display()));
                    }
                } else if let Some(error) = &conversion.error {
                    // Surfaced but non-fatal: the markdown PRD stands.
                    output::print_error(error);
                }
                WizardState::Done {
                    prd,
                    markdown_path,
                    json_path: conversion.path,
                }
            }

            // Terminal states are handled in `run`.
            terminal => terminal,
        }
    }

    fn report_done(&self, markdown_path: &std::path::Path, json_path: Option<PathBuf>) {
        println!();
        output::print_section_banner("DONE", BannerColor::Green);
        println!();
        println!("{GREEN}PRD created.{RESET}");
        println!("  Markdown: {CYAN}{}{RESET}", markdown_path.display());
        if let Some(json) = json_path {
            println!("  Tracker:  {CYAN}{}{RESET}", json.display());
        }
        println!();
        println!("{BOLD}Next steps:{RESET}");
        println!("  Review the PRD, then hand it to your tracker or agent runner.");
    }
}

/// Map an observed SIGINT onto the current state.
///
/// Before the markdown write this cancels the run, keeping any generated
/// PRD. After the write the artifact is already durable, so the run closes
/// out as done (without a tracker document) instead of pretending nothing
/// happened.
fn interrupt(state: WizardState) -> WizardState {
    match state {
        WizardState::Start | WizardState::Collecting | WizardState::Generating(_) => {
            WizardState::Cancelled(None)
        }
        WizardState::CheckingExistingFile(prd)
        | WizardState::ConfirmOverwrite { prd, .. }
        | WizardState::WritingMarkdown { prd, .. } => WizardState::Cancelled(Some(prd)),
        WizardState::PromptingConversion { prd, markdown_path }
        | WizardState::Converting {
            prd, markdown_path, ..
        } => WizardState::Done {
            prd,
            markdown_path,
            json_path: None,
        },
        terminal => terminal,
    }
}
