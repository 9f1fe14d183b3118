pub mod commands;
pub mod engine;
pub mod handle;
pub mod snapshot;
pub mod stub;
pub mod types;

// Re-export key types for easier usage
pub use commands::*;
pub use engine::*;
pub use handle::*;
pub use snapshot::*;
pub use types::*;
