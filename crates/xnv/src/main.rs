mod cli;

use clap::Parser;
use eyre::WrapErr;

use xnv_rpc::config::DEFAULT_DAEMON_PORT;
use xnv_rpc::{DaemonJsonRpc, DaemonOther, Wallet};

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_level(true)
        .init();

    let (call, reply) = match &args.command {
        Command::Version => {
            print_version();
            return Ok(());
        }
        Command::Daemon(call) => {
            let config = args.client_config(Some(DEFAULT_DAEMON_PORT))?;
            let params = cli::parse_params(&call.params)?;
            tracing::debug!(
                url = %config.base_url(),
                method = %call.method,
                "daemon json_rpc call"
            );
            let reply = DaemonJsonRpc::new(&config)?.call(&call.method, &params).await;
            (call, reply)
        }
        Command::Other(call) => {
            let config = args.client_config(Some(DEFAULT_DAEMON_PORT))?;
            let params = cli::parse_params(&call.params)?;
            tracing::debug!(
                url = %config.base_url(),
                endpoint = %call.method,
                "daemon endpoint call"
            );
            let reply = DaemonOther::new(&config)?.call(&call.method, &params).await;
            (call, reply)
        }
        Command::Wallet(call) => {
            let config = args.client_config(None)?;
            let params = cli::parse_params(&call.params)?;
            tracing::debug!(url = %config.base_url(), method = %call.method, "wallet call");
            let reply = Wallet::new(&config)?.call(&call.method, &params).await;
            (call, reply)
        }
    };

    let reply =
        reply.wrap_err_with(|| format!("while calling `{}` on {}", call.method, args.host))?;
    if reply.get("error").is_some() {
        tracing::warn!(method = %call.method, "remote side reported an error");
    }
    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}

fn print_version() {
    let entries = [
        format!("- xnv v{}", env!("CARGO_PKG_VERSION")),
        format!("- xnv-rpc v{}", xnv_rpc::VERSION),
        format!(
            "- System Info: {} {} ({})",
            std::env::consts::OS,
            std::env::consts::ARCH,
            std::env::consts::FAMILY
        ),
    ];
    println!("{}", entries.join("\n"));
}
