mod check;

pub use check::{CheckArgs, check_command};
