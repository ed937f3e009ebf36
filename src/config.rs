//! Configuration resolution for the import gateway
//!
//! Values resolve in priority order:
//! 1. Command-line argument
//! 2. Environment variable (handled by clap's `env` fallback)
//! 3. TOML config file (`--config <path>`)
//! 4. Compiled default
//!
//! The record tool path has no compiled default: the gateway refuses to
//! start without knowing what to invoke.

use crate::{Error, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

/// Command-line arguments for oai-gateway
#[derive(Parser, Debug, Default)]
#[command(name = "oai-gateway")]
#[command(about = "HTTP import gateway for an OAI-PMH repository")]
#[command(version)]
pub struct Args {
    /// Host address to bind
    #[arg(long, env = "OAI_GATEWAY_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "OAI_GATEWAY_PORT")]
    pub port: Option<u16>,

    /// Path to the record-management CLI tool
    #[arg(short, long, env = "OAI_GATEWAY_TOOL")]
    pub tool: Option<PathBuf>,

    /// Directory for staged payload files
    #[arg(long, env = "OAI_GATEWAY_TEMP_DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Metadata prefix applied when the request omits one
    #[arg(long, env = "OAI_GATEWAY_DEFAULT_PREFIX")]
    pub default_prefix: Option<String>,

    /// Seconds to wait for the tool before killing it
    #[arg(long, env = "OAI_GATEWAY_TOOL_TIMEOUT")]
    pub tool_timeout: Option<u64>,

    /// Optional TOML config file
    #[arg(short, long, env = "OAI_GATEWAY_CONFIG")]
    pub config: Option<PathBuf>,
}

/// TOML config file shape (all keys optional)
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub tool: Option<PathBuf>,
    pub temp_dir: Option<PathBuf>,
    pub default_prefix: Option<String>,
    pub tool_timeout: Option<u64>,
}

/// Resolved gateway configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Record-management tool executable
    pub tool_path: PathBuf,
    /// Directory holding staged payloads for the duration of a request
    pub temp_dir: PathBuf,
    /// Format tag substituted for an absent/empty metadataPrefix
    pub default_metadata_prefix: String,
    /// Deadline on one tool invocation, in seconds
    pub tool_timeout_secs: u64,
}

impl Config {
    /// Resolve configuration from arguments, environment and config file
    pub fn load(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    Error::Config(format!("cannot read {}: {}", path.display(), e))
                })?;
                toml::from_str::<ConfigFile>(&content)
                    .map_err(|e| Error::Config(format!("invalid {}: {}", path.display(), e)))?
            }
            None => ConfigFile::default(),
        };

        let tool_path = args
            .tool
            .clone()
            .or(file.tool)
            .ok_or_else(|| {
                Error::Config(
                    "record tool path not configured (--tool, OAI_GATEWAY_TOOL, or config file)"
                        .to_string(),
                )
            })?;

        Ok(Self {
            host: args
                .host
                .clone()
                .or(file.host)
                .unwrap_or_else(|| "127.0.0.1".to_string()),
            port: args.port.or(file.port).unwrap_or(5000),
            tool_path,
            temp_dir: args
                .temp_dir
                .clone()
                .or(file.temp_dir)
                .unwrap_or_else(std::env::temp_dir),
            default_metadata_prefix: args
                .default_prefix
                .clone()
                .or(file.default_prefix)
                .unwrap_or_else(|| "oai_dc".to_string()),
            tool_timeout_secs: args.tool_timeout.or(file.tool_timeout).unwrap_or(60),
        })
    }
}
