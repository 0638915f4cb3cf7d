pub mod client;

pub use client::{DisabledSuggestionService, GeminiClient, SuggestionService};
