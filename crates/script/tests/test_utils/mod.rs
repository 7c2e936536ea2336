#![allow(dead_code)]
use alloy_primitives::{Address, Bytes, TxHash};
use oracle_migrations_scripts::artifact::ContractArtifact;
use oracle_migrations_scripts::consts::ORACLE_CONTRACT_NAME;
use oracle_migrations_scripts::deployer::{Deployer, DeploymentError, DeploymentHandle};
use oracle_migrations_scripts::tracing as tracing_config;
use oracle_migrations_scripts::utils;
use std::path::Path;
use std::sync::Mutex;

pub const DEPLOYED_ADDRESS: Address = Address::new([0xaa; 20]);
pub const DEPLOY_TX: TxHash = TxHash::new([0xbb; 32]);
pub const ORACLE_BYTECODE: [u8; 5] = [0x60, 0x80, 0x60, 0x40, 0x52];

pub fn init_logging() {
    tracing_config::setup_logger(tracing_config::LoggingConfig::default_for_test());
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployCall {
    pub contract: String,
    pub constructor_arg: Option<Address>,
}

/// Deployer double that records every call and mimics a node that refuses absent arguments when asked to.
pub struct RecordingDeployer {
    network: String,
    reject_absent_arg: bool,
    calls: Mutex<Vec<DeployCall>>,
}

impl RecordingDeployer {
    pub fn new(network: &str) -> Self {
        Self {
            network: network.to_owned(),
            reject_absent_arg: false,
            calls: Mutex::new(vec![]),
        }
    }

    pub fn rejecting_absent_arg(mut self) -> Self {
        self.reject_absent_arg = true;
        self
    }

    pub fn calls(&self) -> Vec<DeployCall> {
        self.calls.lock().expect("Poisoned call log").clone()
    }
}

impl Deployer for RecordingDeployer {
    fn network(&self) -> &str {
        &self.network
    }

    async fn deploy(
        &self,
        contract: &ContractArtifact,
        constructor_arg: Option<Address>,
    ) -> Result<DeploymentHandle, DeploymentError> {
        self.calls.lock().expect("Poisoned call log").push(DeployCall {
            contract: contract.contract_name.clone(),
            constructor_arg,
        });
        if self.reject_absent_arg && constructor_arg.is_none() {
            return Err(DeploymentError::MissingConstructorArgument {
                contract: contract.contract_name.clone(),
            });
        }
        Ok(DeploymentHandle {
            address: DEPLOYED_ADDRESS,
            transaction_hash: DEPLOY_TX,
        })
    }
}

pub fn oracle_artifact() -> ContractArtifact {
    ContractArtifact {
        contract_name: ORACLE_CONTRACT_NAME.to_owned(),
        bytecode: Bytes::from(ORACLE_BYTECODE.to_vec()),
    }
}

pub fn write_oracle_artifact(artifacts_dir: &Path) {
    let artifact = oracle_artifact();
    utils::write_json(
        &ContractArtifact::artifact_path(artifacts_dir, &artifact.contract_name),
        &artifact,
    )
    .expect("Failed to write oracle artifact");
}

pub fn address(literal: &str) -> Address {
    literal.parse().expect("Failed to parse address literal")
}
