use clap::{Args, Parser, Subcommand};
use eyre::{bail, eyre, WrapErr};
use serde_json::Value;

use xnv_rpc::ClientConfig;

/// Issue raw calls against a Nerva daemon or wallet service.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Host of the daemon or wallet service.
    #[arg(long, global = true, default_value = "localhost", env = "XNV_HOST")]
    pub host: String,

    /// Port. Daemon commands default to 17566; wallet commands require it.
    #[arg(long, global = true, env = "XNV_PORT")]
    pub port: Option<u16>,

    /// Use HTTPS instead of HTTP.
    #[arg(long, global = true, env = "XNV_TLS")]
    pub tls: bool,

    /// Request timeout in seconds; `0` waits indefinitely.
    #[arg(long, global = true, default_value = "10.0", env = "XNV_TIMEOUT")]
    pub timeout: f64,

    /// RPC username for HTTP basic auth.
    #[arg(long, global = true, env = "XNV_RPC_USER")]
    pub rpc_user: Option<String>,

    /// RPC password for HTTP basic auth.
    #[arg(long, global = true, env = "XNV_RPC_PASS")]
    pub rpc_pass: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print version and platform information.
    Version,
    /// Call a daemon JSON-RPC method.
    Daemon(CallArgs),
    /// Call a plain daemon HTTP endpoint (e.g. `get_height`, `get_blocks.bin`).
    Other(CallArgs),
    /// Call a wallet JSON-RPC method.
    Wallet(CallArgs),
}

#[derive(Args, Debug)]
pub struct CallArgs {
    /// Method or endpoint name.
    pub method: String,

    /// Params as a JSON object.
    #[arg(long, default_value = "{}")]
    pub params: String,
}

impl Cli {
    /// Build the client configuration. `default_port` is used when `--port`
    /// is absent; `None` means the port is mandatory.
    pub fn client_config(&self, default_port: Option<u16>) -> eyre::Result<ClientConfig> {
        let port = self
            .port
            .or(default_port)
            .ok_or_else(|| eyre!("--port is required for wallet calls"))?;

        let mut config = ClientConfig::new(self.host.clone(), port)
            .with_tls(self.tls)
            .with_timeout_secs(self.timeout)?;

        match (&self.rpc_user, &self.rpc_pass) {
            (Some(user), Some(pass)) => config = config.with_basic_auth(user, pass),
            (Some(_), None) | (None, Some(_)) => {
                bail!("both --rpc-user and --rpc-pass must be set together")
            }
            (None, None) => {}
        }

        Ok(config)
    }
}

/// Parse `--params`, which must be a JSON object.
pub fn parse_params(raw: &str) -> eyre::Result<Value> {
    let params: Value = serde_json::from_str(raw).wrap_err("--params is not valid JSON")?;
    if !params.is_object() {
        bail!("--params must be a JSON object, got `{raw}`");
    }
    Ok(params)
}
