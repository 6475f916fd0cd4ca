use isobundle_lib::consts::{APP_NAME, DEFAULT_SCRIPT_EXTENSIONS, SOURCE_MAP_SUFFIX};

use crate::output::print_stat;

pub fn cmd_info() {
  println!("{} {}", APP_NAME, env!("CARGO_PKG_VERSION"));
  print_stat("Script extensions", &DEFAULT_SCRIPT_EXTENSIONS.join(", "));
  print_stat("Source map suffix", SOURCE_MAP_SUFFIX);
}
