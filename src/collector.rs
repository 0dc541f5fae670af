//! The clarifying interview.
//!
//! Asks for the feature description, then walks the question catalog in
//! order. Console output here is presentation only; the returned
//! [`ClarifyingAnswers`] depends solely on what the user typed.

use crate::output::{self, BannerColor, GRAY, RESET};
use crate::prd::ClarifyingAnswers;
use crate::prompt::Prompter;
use crate::questions;

/// Non-empty answers shorter than this trigger the question's follow-up
/// prompt, when one is declared.
const FOLLOW_UP_THRESHOLD: usize = 20;

/// Drives one interview over a [`Prompter`].
pub struct AnswerCollector<'a, P: Prompter> {
    prompter: &'a mut P,
}

impl<'a, P: Prompter> AnswerCollector<'a, P> {
    pub fn new(prompter: &'a mut P) -> Self {
        Self { prompter }
    }

    /// Run the interview. `None` means the user cancelled: an empty feature
    /// description, or a cancelled prompt anywhere in the pass. No partial
    /// answers survive a cancellation.
    pub fn collect(&mut self) -> Option<ClarifyingAnswers> {
        output::print_section_banner("FEATURE", BannerColor::Cyan);
        println!();

        let description = self
            .prompter
            .input("Describe the feature you want to build:")?;
        if description.is_empty() {
            return None;
        }

        let mut answers = ClarifyingAnswers::new(description);

        println!();
        output::print_section_banner("CLARIFYING QUESTIONS", BannerColor::Cyan);
        println!("{GRAY}Every question is optional; press Enter to skip.{RESET}");
        println!();

        let total = questions::catalog().len();
        for (i, question) in questions::catalog().iter().enumerate() {
            let prompt_text = format!("({}/{}) {}", i + 1, total, question.question);
            let mut answer = self.prompter.input(&prompt_text)?;

            // Brief answer on a question with a declared follow-up: nudge
            // once for more detail, never more.
            if !answer.is_empty() && answer.chars().count() < FOLLOW_UP_THRESHOLD {
                if let Some(follow_up) = question.follow_up {
                    let extra = self.prompter.input(follow_up)?;
                    if !extra.is_empty() {
                        answer = format!("{}. {}", answer, extra);
                    }
                }
            }

            // Skipped questions are recorded as empty, not omitted.
            answers.answers.insert(question.id.to_string(), answer);
        }

        Some(answers)
    }
}
