pub mod analysis;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod server;

pub use analysis::ResumePipeline;
pub use config::{Config, PipelineConfig};
pub use error::{Error, ErrorKind, Result};
pub use github::{GitHubClient, GitHubSource};
