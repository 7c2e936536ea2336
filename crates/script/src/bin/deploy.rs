use std::path::PathBuf;

use clap::Parser;
use oracle_migrations_scripts::migration::UnknownNetworkPolicy;
use oracle_migrations_scripts::scripts::{self, deploy::Source};
use oracle_migrations_scripts::tracing as tracing_config;
use oracle_migrations_scripts::utils::read_env;

/*
Run variants:
* Prepare and save deploy manifesto, but don't deploy:
cargo run --bin deploy --release -- --store "../data/deploy/${EVM_CHAIN}-deploy.json" --dry-run

* Read from manifesto and deploy
cargo run --bin deploy --release -- --source "../data/deploy/${EVM_CHAIN}-deploy.json"

* Resolve from the LINK token table and deploy, don't save manifest
DRY_RUN=false cargo run --bin deploy --release
*/

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct DeployArgs {
    #[clap(long, required = false)]
    source: Option<PathBuf>,
    #[clap(long, required = false)]
    store: Option<PathBuf>,
    #[clap(long, default_value = "false")]
    dry_run: bool,
    #[clap(long, value_enum, default_value_t = UnknownNetworkPolicy::FailFast)]
    on_unknown_network: UnknownNetworkPolicy,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("No .env loaded: {e}");
    }
    tracing_config::setup_logger(
        tracing_config::LoggingConfig::default().use_format(read_env("LOG_FORMAT", tracing_config::LogFormat::Plain)),
    );

    let args = DeployArgs::parse();
    tracing::debug!("Args: {:?}", args);

    let script_runtime = scripts::prelude::ScriptRuntime::init_from_env()?;

    tracing::info!("Running deploy for network {:?}", script_runtime.network());

    let source = match args.source {
        Some(path) => Source::File { path },
        None => Source::Network,
    };
    let flags = scripts::deploy::Flags {
        // either the flag or the environment can force a dry run
        dry_run: args.dry_run || script_runtime.is_dry_run(),
        unknown_network: args.on_unknown_network,
    };

    match scripts::deploy::run_with_runtime(&script_runtime, source, args.store, &flags).await? {
        Some(deployed) => tracing::info!(
            "Oracle deployed at {} in transaction {}",
            deployed.address,
            deployed.transaction_hash
        ),
        None => tracing::info!("Dry run complete"),
    }
    Ok(())
}
