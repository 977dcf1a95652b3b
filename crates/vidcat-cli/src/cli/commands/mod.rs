//! CLI command handlers, one file per command.

mod add;
mod check;
mod completions;
mod list;

pub use add::run_add;
pub use check::run_check;
pub use completions::run_completions;
pub use list::run_list;

#[cfg(test)]
pub(crate) use add::user_message;
#[cfg(test)]
pub(crate) use list::count_label;
