use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::artifact::ContractArtifact;
use crate::consts::{self, ORACLE_CONTRACT_NAME};
use crate::deployer::{Deployer, DeploymentError, DeploymentHandle};

#[derive(Debug, Error)]
pub enum Error {
    #[error("No LINK token address known for network {0}")]
    UnknownNetwork(String),

    #[error(transparent)]
    Deployment(#[from] DeploymentError),
}

/// What to do when the active network has no entry in the LINK token table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum UnknownNetworkPolicy {
    /// Stop before talking to the deployer.
    #[default]
    FailFast,
    /// Call the deployer anyway with no constructor argument and let it decide.
    PassThrough,
}

#[derive(PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct OracleDeployParameters {
    pub network: String,
    pub contract_name: String,
    pub link_token: Option<Address>,
}

impl fmt::Display for OracleDeployParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let link_token = self
            .link_token
            .map(|address| address.to_string())
            .unwrap_or_else(|| "<none>".to_owned());
        f.debug_struct("OracleDeployParameters")
            .field("network", &self.network)
            .field("contract_name", &self.contract_name)
            .field("link_token", &link_token)
            .finish()
    }
}

impl fmt::Debug for OracleDeployParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

pub fn prepare_deploy_params(network: &str, policy: UnknownNetworkPolicy) -> Result<OracleDeployParameters, Error> {
    let link_token = consts::link_token_address(network);
    match (link_token, policy) {
        (Some(address), _) => {
            tracing::info!(network, link_token = %address, "Resolved LINK token");
        }
        (None, UnknownNetworkPolicy::FailFast) => {
            tracing::error!(network, "Network is not in the LINK token table");
            return Err(Error::UnknownNetwork(network.to_owned()));
        }
        (None, UnknownNetworkPolicy::PassThrough) => {
            tracing::warn!(network, "Network is not in the LINK token table, deploying without LINK token");
        }
    }

    Ok(OracleDeployParameters {
        network: network.to_owned(),
        contract_name: ORACLE_CONTRACT_NAME.to_owned(),
        link_token,
    })
}

pub async fn deploy_with_params(
    deployer: &impl Deployer,
    artifact: &ContractArtifact,
    params: &OracleDeployParameters,
) -> Result<DeploymentHandle, Error> {
    tracing::info!("Deploying {} on {}", artifact.contract_name, params.network);
    let handle = deployer
        .deploy(artifact, params.link_token)
        .await
        .inspect_err(|err| tracing::error!("Failed to deploy {}: {err:?}", artifact.contract_name))?;
    tracing::info!(
        address = %handle.address,
        tx_hash = %handle.transaction_hash,
        "Deployed {}",
        artifact.contract_name
    );
    Ok(handle)
}

/// Deploys the oracle against the deployer's current network, issuing exactly one deploy call.
pub async fn migrate(
    deployer: &impl Deployer,
    artifact: &ContractArtifact,
    policy: UnknownNetworkPolicy,
) -> Result<DeploymentHandle, Error> {
    let params = prepare_deploy_params(deployer.network(), policy)?;
    deploy_with_params(deployer, artifact, &params).await
}
