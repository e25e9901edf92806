mod loader;
mod stored;

pub use loader::{load_questions_from_json, parse_stored_json, to_stored_json, LoadError};
pub use stored::{normalize, StoredQuestion};
