pub mod commands;
pub mod handlers;

pub use commands::{BadgeProfileArg, Cli, Commands, IssueSource};
