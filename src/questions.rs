//! The clarifying-question catalog.
//!
//! A static ordered list walked once per wizard run. Order is meaningful:
//! it drives the narrative flow of the interview and the "(i/N)" counters
//! shown to the user.

/// One clarifying question asked during the interview.
#[derive(Debug, Clone, Copy)]
pub struct ClarifyingQuestion {
    /// Stable identifier, unique within the catalog.
    pub id: &'static str,
    /// The prompt shown to the user.
    pub question: &'static str,
    /// Optional nudge shown when the initial answer is very short.
    pub follow_up: Option<&'static str>,
    /// Topic label used when deriving a user story from the answer.
    pub story_topic: &'static str,
    /// Priority assigned to the derived story (1 = highest).
    pub story_priority: u8,
}

/// The interview, in the order it is conducted.
pub const CATALOG: &[ClarifyingQuestion] = &[
    ClarifyingQuestion {
        id: "problem",
        question: "What problem does this feature solve?",
        follow_up: Some("Could you expand on the problem a bit more?"),
        story_topic: "Core problem",
        story_priority: 1,
    },
    ClarifyingQuestion {
        id: "users",
        question: "Who is the primary user of this feature?",
        follow_up: Some("Anything else about who they are or how they work?"),
        story_topic: "Primary users",
        story_priority: 2,
    },
    ClarifyingQuestion {
        id: "actions",
        question: "What are the core actions a user should be able to take?",
        follow_up: Some("Walk through a typical use, step by step."),
        story_topic: "User actions",
        story_priority: 1,
    },
    ClarifyingQuestion {
        id: "success",
        question: "How will you know the feature works? What does success look like?",
        follow_up: Some("Is there a concrete check or metric you would use?"),
        story_topic: "Success criteria",
        story_priority: 2,
    },
    ClarifyingQuestion {
        id: "data",
        question: "What data does this feature read, write, or display?",
        follow_up: None,
        story_topic: "Data handling",
        story_priority: 2,
    },
    ClarifyingQuestion {
        id: "design",
        question: "Are there any design or UI expectations?",
        follow_up: None,
        story_topic: "Design",
        story_priority: 3,
    },
    ClarifyingQuestion {
        id: "non-goals",
        question: "What is explicitly out of scope for this feature?",
        follow_up: None,
        story_topic: "Scope boundaries",
        story_priority: 3,
    },
    ClarifyingQuestion {
        id: "edge-cases",
        question: "Which edge cases or failure modes worry you?",
        follow_up: Some("Name the one most likely to bite first."),
        story_topic: "Edge cases",
        story_priority: 3,
    },
];

/// The catalog in interview order.
pub fn catalog() -> &'static [ClarifyingQuestion] {
    CATALOG
}

/// Look up a catalog question by id.
pub fn by_id(id: &str) -> Option<&'static ClarifyingQuestion> {
    CATALOG.iter().find(|q| q.id == id)
}
