pub mod git;
pub mod repo;
pub mod store;

pub use repo::{find_git_dir_from, git_dir};
pub use store::{UserRecord, UserStore};
