//! Git operations via system git (zero crate dependencies)

pub mod release_ops;
pub mod system_git;

pub use system_git::SystemGit;
