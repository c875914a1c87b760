//! CLI command handlers. Each command is in its own file.

mod add;
mod category;
mod classify;
mod completions;
mod edit;
mod list;
mod remove;
mod session;

pub use add::{run_add, AddArgs};
pub use category::run_category;
pub use classify::run_classify;
pub use completions::run_completions;
pub use edit::{run_edit, EditArgs};
pub use list::run_list;
pub use remove::run_remove;
pub use session::{run_login, run_logout, run_whoami};
