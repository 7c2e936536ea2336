use alloy_primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::artifact::ContractArtifact;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentHandle {
    pub address: Address,
    pub transaction_hash: TxHash,
}

#[derive(Debug, Error)]
pub enum DeploymentError {
    #[error("Contract {contract} requires a constructor argument, none was resolved")]
    MissingConstructorArgument { contract: String },

    #[error("Network {network} expects chain id {expected}, connected node reports {actual}")]
    ChainIdMismatch { network: String, expected: u64, actual: u64 },

    #[error("Transport error {0:#?}")]
    TransportError(#[from] alloy::transports::TransportError),

    #[error("Transaction error {0:#?}")]
    TransactionError(#[from] alloy::providers::PendingTransactionError),

    #[error("Deployment transaction {0} reverted")]
    Reverted(TxHash),

    #[error("Receipt for {0} has no contract address")]
    NoContractAddress(TxHash),
}

/// Capability that executes a contract deployment against one network.
///
/// The handle already knows which network it talks to; callers read it through [`Deployer::network`]
/// and hand back the constructor argument they resolved for it.
#[allow(async_fn_in_trait)]
pub trait Deployer {
    /// Identifier of the active network, as configured by the runner.
    fn network(&self) -> &str;

    async fn deploy(
        &self,
        contract: &ContractArtifact,
        constructor_arg: Option<Address>,
    ) -> Result<DeploymentHandle, DeploymentError>;
}
