pub mod branch;
pub mod error;
pub mod session;

pub use branch::{Branch, KeyValueBranch, ValueBranch, split_key_value, split_value};
pub use error::StreamError;
pub use session::{ProcessingSession, RouteSummary};
