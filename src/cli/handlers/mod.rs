mod classify;
mod generate;
mod utils;

pub use classify::handle_classify;
pub use generate::handle_generate;
pub use utils::{load_issues, read_issues_file};
