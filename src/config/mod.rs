//! Configuration model for wkit.
//!
//! Settings come from two TOML files layered over built-in defaults: the
//! user-wide `$XDG_CONFIG_HOME/wkit/config.toml` and the repository-local
//! `.wkit.toml`. Parsing is forward-compatible (unknown fields are ignored)
//! and values are validated after loading.

mod copy;
mod model;
mod operations;
pub mod types;


pub use copy::copy_files_to_worktree;
pub use model::Config;
pub use operations::{ConfigPaths, LOCAL_CONFIG_FILE, global_config_path_from};
pub use types::{CopyFiles, SyncStrategy};
