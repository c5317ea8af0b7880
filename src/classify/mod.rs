pub mod classifier;
pub mod transient;

// Re-export commonly used types
pub use classifier::{CaptureAll, ClassifierExt, ErrorClassifier, Or};
pub use transient::{ForwardTransient, Transient, is_transient};
