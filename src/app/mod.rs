mod events;
mod render;
mod state;

// Re-export public types
pub use render::{BUSY_LABEL, SUBMIT_LABEL, TITLE};
pub use state::{App, Submission};
pub(crate) use state::outcome_record;
