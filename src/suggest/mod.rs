pub mod extract;
pub mod fallback;
pub mod sanitize;
pub mod topic;

pub use extract::extract_items;
pub use fallback::{default_suggestions, SuggestionKind};
pub use sanitize::{sanitize_suggestions, Provenance, SuggestionResult};
pub use topic::{topical_tokens, RoleContext};
