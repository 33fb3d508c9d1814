pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{capacity_from_env, get_data_dir, parse_capacity};
pub use paths::format_path_with_tilde;
pub use terminal::strip_ansi_codes;
