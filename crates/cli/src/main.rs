mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

/// isobundle - assemble server-side bundles from a DLL manifest and a dependent build
#[derive(Parser)]
#[command(name = "isobundle")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Run one completion cycle and write the assembled artifact
  Assemble {
    /// Build result JSON describing the finished compilation
    stats: PathBuf,

    /// Build options JSON (plugins and output path)
    #[arg(long, conflicts_with_all = ["manifest", "output_dir"], required_unless_present_all = ["manifest", "output_dir"])]
    options: Option<PathBuf>,

    /// Reference manifest written by the DLL build
    #[arg(long, requires = "output_dir")]
    manifest: Option<PathBuf>,

    /// Output directory of the dependent build
    #[arg(long, requires = "manifest")]
    output_dir: Option<PathBuf>,

    /// Script extensions to consider when picking the entry bundle (default: .js)
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Write the artifact here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
  },

  /// Print the request map derived from a DLL manifest
  RequestMap {
    /// Path to the manifest file
    manifest: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
  },

  /// Show version and defaults
  Info,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cli.command {
    Commands::Assemble {
      stats,
      options,
      manifest,
      output_dir,
      extensions,
      out,
    } => {
      let source = match (options, manifest, output_dir) {
        (Some(options), _, _) => cmd::ConfigSource::BuildOptions(options),
        (None, Some(manifest), Some(output_dir)) => cmd::ConfigSource::Paths { manifest, output_dir },
        _ => anyhow::bail!("either --options or both --manifest and --output-dir are required"),
      };
      cmd::cmd_assemble(&stats, source, extensions, out.as_deref())
    }
    Commands::RequestMap { manifest, format } => cmd::cmd_request_map(&manifest, format),
    Commands::Info => {
      cmd::cmd_info();
      Ok(())
    }
  }
}
