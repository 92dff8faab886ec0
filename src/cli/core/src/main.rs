/* src/cli/core/src/main.rs */

mod config;
mod model;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use model::{ModelRequest, build_model, page_server, render_json};

#[derive(Parser)]
#[command(name = "sharepage", about = "Build share page models")]
struct Cli {
  /// Path to sharepage.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Build the blog post editor page model and print it as JSON
  Model {
    /// Request path with optional query, routed through the page registry
    #[arg(short, long, conflicts_with_all = ["site", "post_id"])]
    url: Option<String>,
    /// Site short name (template argument `site`)
    #[arg(short, long)]
    site: Option<String>,
    /// Post to edit (query argument `postId`); omit to create a new post
    #[arg(short, long)]
    post_id: Option<String>,
    /// Request locale, e.g. en_US
    #[arg(short, long)]
    locale: Option<String>,
    /// Accept-Language header value used when no locale is given
    #[arg(long)]
    accept_language: Option<String>,
    /// Cookie header value used when no locale is given
    #[arg(long)]
    cookie: Option<String>,
    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
  },
  /// List registered pages and their routes
  Pages,
}

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> Result<()> {
  init_tracing();
  let cli = Cli::parse();

  let cwd = std::env::current_dir().context("failed to get cwd")?;
  let cfg = config::resolve_config(cli.config.as_deref(), &cwd)?;
  let server = page_server(&cfg)?;

  match cli.command {
    Command::Model { url, site, post_id, locale, accept_language, cookie, compact } => {
      let req = ModelRequest { url, site, post_id, locale, accept_language, cookie };
      let model = build_model(&server, &req)?;
      println!("{}", render_json(&model, cfg.output.pretty && !compact)?);
    }
    Command::Pages => {
      for (id, route) in server.routes() {
        println!("{id}\t{route}");
      }
    }
  }

  Ok(())
}
