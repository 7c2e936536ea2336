use crate::artifact::ContractArtifact;
use crate::consts::ORACLE_CONTRACT_NAME;
use crate::deployer::{Deployer, DeploymentHandle};
use crate::migration::{self, OracleDeployParameters, UnknownNetworkPolicy};
use crate::scripts::prelude::ScriptRuntime;
use crate::utils;

use std::path::{Path, PathBuf};

pub enum Source {
    Network,
    File { path: PathBuf },
}

pub struct Flags {
    pub dry_run: bool,
    pub unknown_network: UnknownNetworkPolicy,
}

fn read_from_file(network: &str, file: &Path, policy: UnknownNetworkPolicy) -> anyhow::Result<OracleDeployParameters> {
    tracing::info!("Reading deploy parameters for {} from {:?}", network, file.as_os_str());
    let deploy_params: OracleDeployParameters = utils::read_json(file)?;
    if deploy_params.network != network {
        return Err(anyhow::anyhow!(
            "Network from stored manifesto {} != target network {}",
            deploy_params.network,
            network
        ));
    }
    if deploy_params.contract_name != ORACLE_CONTRACT_NAME {
        return Err(anyhow::anyhow!(
            "Contract from stored manifesto {} != {}",
            deploy_params.contract_name,
            ORACLE_CONTRACT_NAME
        ));
    }

    // A stored manifesto may only replay what the LINK token table resolves for this network
    let expected = migration::prepare_deploy_params(network, policy)?;
    if deploy_params.link_token != expected.link_token {
        return Err(anyhow::anyhow!(
            "LINK token from stored manifesto {:?} != resolved {:?}",
            deploy_params.link_token,
            expected.link_token
        ));
    }
    Ok(deploy_params)
}

/// Resolves deploy parameters, optionally stores them, and deploys unless running dry.
/// Returns `None` for dry runs.
pub async fn run(
    deployer: &impl Deployer,
    artifacts_dir: &Path,
    source: Source,
    write_manifesto: Option<PathBuf>,
    flags: &Flags,
) -> anyhow::Result<Option<DeploymentHandle>> {
    let network = deployer.network();
    let deploy_params = match source {
        Source::Network => migration::prepare_deploy_params(network, flags.unknown_network)?,
        Source::File { path } => read_from_file(network, &path, flags.unknown_network)?,
    };

    if let Some(store_manifesto_file) = write_manifesto {
        tracing::debug!("Writing manifesto to {:?}", store_manifesto_file.as_os_str());
        utils::write_json(&store_manifesto_file, &deploy_params)?;
        tracing::info!("Deploy manifesto {:?}", deploy_params);
    }

    if flags.dry_run {
        tracing::info!("Dryrun is set, not deploying");
        return Ok(None);
    }

    let artifact = ContractArtifact::require(artifacts_dir, &deploy_params.contract_name)?;
    let deployed = migration::deploy_with_params(deployer, &artifact, &deploy_params).await?;
    tracing::info!("Deployed contract to {}", deployed.address);
    Ok(Some(deployed))
}

pub async fn run_with_runtime(
    runtime: &ScriptRuntime,
    source: Source,
    write_manifesto: Option<PathBuf>,
    flags: &Flags,
) -> anyhow::Result<Option<DeploymentHandle>> {
    run(
        &runtime.deployer,
        runtime.artifacts_dir.as_path(),
        source,
        write_manifesto,
        flags,
    )
    .await
}
