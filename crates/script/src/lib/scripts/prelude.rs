use crate::deployer::Deployer;
use crate::env::{self, EnvVarValue};
use crate::eth_client::{DefaultDeployer, ProviderFactory, ProviderError};

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use alloy::transports::http::reqwest::Url;

const DEFAULT_DRY_RUN: bool = true; // Fail close
const DEFAULT_ARTIFACTS_DIR: &str = "build/contracts";

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    FailedToReadEnvVar(#[from] env::Error),

    #[error("Failed to create provider: {0:?}")]
    FailedToCreateProvider(#[from] ProviderError),
}

#[derive(Debug, Clone)]
pub struct EnvVars {
    pub evm_chain: EnvVarValue<String>,
    pub execution_layer_rpc: EnvVarValue<Url>,
    pub artifacts_dir: EnvVarValue<PathBuf>,
    pub dry_run: EnvVarValue<bool>,
    // sensitive
    pub private_key: EnvVarValue<String>,
}

impl EnvVars {
    pub fn init_from_env() -> Result<Self, env::Error> {
        Ok(Self {
            evm_chain: env::EVM_CHAIN.required()?,
            execution_layer_rpc: env::EXECUTION_LAYER_RPC.required()?,
            artifacts_dir: env::ORACLE_ARTIFACTS_DIR.default(PathBuf::from(DEFAULT_ARTIFACTS_DIR))?,
            dry_run: env::DRY_RUN.default(DEFAULT_DRY_RUN)?,
            private_key: env::PRIVATE_KEY.required()?,
        })
    }
}

pub struct ScriptRuntime {
    pub deployer: DefaultDeployer,
    pub artifacts_dir: PathBuf,
    dry_run: bool,
}

impl ScriptRuntime {
    pub fn new(deployer: DefaultDeployer, artifacts_dir: PathBuf, dry_run: bool) -> Self {
        Self {
            deployer,
            artifacts_dir,
            dry_run,
        }
    }

    pub fn init(env_vars: &EnvVars) -> Result<Self, Error> {
        tracing::debug!("Initializing runtime from {env_vars:?}");
        let provider = ProviderFactory::create_provider_decode_key(
            &env_vars.private_key.value,
            env_vars.execution_layer_rpc.value.clone(),
        )?;
        let deployer = DefaultDeployer::new(Arc::new(provider), env_vars.evm_chain.value.clone());

        Ok(Self::new(
            deployer,
            env_vars.artifacts_dir.value.clone(),
            env_vars.dry_run.value,
        ))
    }

    pub fn init_from_env() -> Result<Self, Error> {
        let env_vars = EnvVars::init_from_env()?;
        Self::init(&env_vars)
    }

    pub fn network(&self) -> &str {
        self.deployer.network()
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}
