//! CLI for the rfr rootfs URL resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rfr_core::config;

use commands::run_resolve;

/// Top-level CLI for the rfr rootfs URL resolver.
#[derive(Debug, Parser)]
#[command(name = "rfr")]
#[command(about = "rfr: resolve the OpenWrt rootfs archive URL for a branch/target", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve and print the rootfs archive URL for a branch/target pair.
    Resolve {
        /// Release channel: "master" or "openwrt-<release>" (e.g. openwrt-23.05).
        #[arg(long, env = "BRANCH")]
        branch: String,

        /// Build target, `-`-separated (e.g. x86-64).
        #[arg(long, env = "TARGET")]
        target: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { branch, target } => run_resolve(&cfg, branch, target)?,
        }

        Ok(())
    }
}
