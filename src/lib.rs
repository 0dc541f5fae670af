pub mod collector;
pub mod config;
pub mod error;
pub mod generator;
pub mod markdown;
pub mod output;
pub mod prd;
pub mod prompt;
pub mod questions;
pub mod signal;
pub mod store;
pub mod tracker;
pub mod wizard;

pub use config::WizardConfig;
pub use error::{PrdGenError, Result};
pub use prd::{ClarifyingAnswers, GeneratedPrd, UserStory};
pub use store::PrdStore;
pub use tracker::{ConversionResult, TrackerFormat};
pub use wizard::{PrdGenerationResult, Wizard};
