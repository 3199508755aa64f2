use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// A small HTTP/1.1 server with echo, user-agent and file routes.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Directory served and written by the /files route
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:4221
    #[arg(long)]
    pub listen: Option<String>,

    /// YAML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Command-line flags take precedence over every other source.
    pub fn apply(&self, mut cfg: Config) -> Config {
        if let Some(dir) = &self.directory {
            cfg.files.directory = Some(dir.clone());
        }
        if let Some(addr) = &self.listen {
            cfg.server.listen_addr = addr.clone();
        }
        cfg
    }
}
