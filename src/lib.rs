//! Renders the outcome of a multi-project plan or apply run as a single
//! markdown document for posting on a pull request.

pub mod command;
pub mod config;
pub mod error;
pub mod lock_url;
pub mod outcome;
pub mod render;

pub use command::CommandName;
pub use lock_url::{LockUrlBuilder, ServerLockUrlBuilder};
pub use outcome::{CommandOutcome, ProjectOutcome, ProjectResult};
pub use render::MarkdownRenderer;
