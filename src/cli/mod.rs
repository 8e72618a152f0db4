pub mod args;

pub use args::{get_args, get_log_level_from_verbose, Args};
