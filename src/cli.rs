use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::HostConfig;
use commands::{check, serve};

#[derive(Parser)]
#[command(name = "ecosync")]
#[command(about = "EcoSync operations console host")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the built console bundle
    Serve {
        /// Directory holding the trunk build output (`index.html`, wasm, js)
        ///
        /// Falls back to `dist` from `ecosync.toml` or `ECOSYNC_DIST`.
        #[arg(short, long)]
        dist: Option<String>,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8081)
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind: Option<String>,
    },
    /// Verify a bundle directory can be served
    Check {
        #[arg(short, long)]
        dist: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = HostConfig::load()?;
        match self.command {
            Commands::Serve { dist, bind } => {
                serve(config.with_overrides(dist, bind)).await?;
            }
            Commands::Check { dist } => {
                check(&config.with_overrides(dist, None))?;
            }
        }
        Ok(())
    }
}
