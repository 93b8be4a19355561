pub mod line_store;
pub mod scanner;

pub use line_store::LineStore;
pub use scanner::{find_ignore_case, leading_float, leading_int, starts_with_ignore_case, Scanner};
