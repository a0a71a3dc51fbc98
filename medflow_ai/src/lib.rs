//! AI consultation suggestions for MedFlow Connect.
//!
//! The pipeline has three independent pieces: `build_prompt` frames a
//! consultation transcript for the upstream model, `parse_suggestion` lifts
//! the model's free-text answer into an `AiSuggestion`, and `SuggestClient`
//! does the one HTTP call in between. Parsing never touches the network, so
//! the fiddly part is testable without a server. Deployments without an API
//! key serve `simulated_suggestion` instead of calling out.

pub mod client;
pub mod parse;
pub mod prompt;
pub mod suggestion;

pub use client::{SuggestClient, SuggestError, DEFAULT_API_BASE};
pub use parse::parse_suggestion;
pub use prompt::build_prompt;
pub use suggestion::{simulated_suggestion, AiSuggestion};
