pub mod config;
pub mod environment;
pub mod git;
pub mod project;
pub mod starter;
pub mod toolchain;

// Re-export commonly used types
pub use config::Config;
pub use environment::Environment;
pub use project::ProjectSpec;
