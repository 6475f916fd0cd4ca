mod assemble;
mod info;
mod request_map;

pub use assemble::{ConfigSource, cmd_assemble};
pub use info::cmd_info;
pub use request_map::cmd_request_map;
