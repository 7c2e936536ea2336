use alloy::network::{Ethereum, EthereumWallet, TransactionBuilder};
use alloy::primitives::Address;
use alloy::providers::fillers::RecommendedFillers;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::http::reqwest::Url;
use alloy_sol_types::SolValue;
use std::sync::Arc;
use thiserror::Error;
use tracing::Instrument;

use crate::artifact::ContractArtifact;
use crate::consts::{Network, NetworkInfo};
use crate::deployer::{Deployer, DeploymentError, DeploymentHandle};

/// Deploys contracts by sending creation transactions through an alloy provider.
pub struct AlloyDeployer<P>
where
    P: Provider<Ethereum>,
{
    provider: Arc<P>,
    network: String,
}

impl<P> AlloyDeployer<P>
where
    P: Provider<Ethereum>,
{
    pub fn new(provider: Arc<P>, network: String) -> Self {
        Self { provider, network }
    }

    pub fn creation_code(contract: &ContractArtifact, link_token: Address) -> Vec<u8> {
        let mut code = contract.bytecode.to_vec();
        code.extend(link_token.abi_encode());
        code
    }

    async fn check_chain_id(&self) -> Result<(), DeploymentError> {
        let Ok(network) = self.network.parse::<Network>() else {
            tracing::debug!("No chain id on record for {}, skipping check", self.network);
            return Ok(());
        };
        let Some(expected) = network.get_config().chain_id else {
            return Ok(());
        };

        let actual = self.provider.get_chain_id().await?;
        if actual != expected {
            return Err(DeploymentError::ChainIdMismatch {
                network: self.network.clone(),
                expected,
                actual,
            });
        }
        Ok(())
    }

    async fn deploy_impl(
        &self,
        contract: &ContractArtifact,
        constructor_arg: Option<Address>,
    ) -> Result<DeploymentHandle, DeploymentError> {
        let link_token = constructor_arg.ok_or_else(|| DeploymentError::MissingConstructorArgument {
            contract: contract.contract_name.clone(),
        })?;
        self.check_chain_id().await?;

        let tx = TransactionRequest::default().with_deploy_code(Self::creation_code(contract, link_token));

        tracing::info!("Submitting deployment transaction");
        let pending = self
            .provider
            .send_transaction(tx)
            .instrument(tracing::info_span!("send_tx"))
            .await
            .inspect(|val| tracing::debug!("Submitted transaction {}", val.tx_hash()))
            .inspect_err(|err| tracing::error!("Failed to submit transaction {err:?}"))?;

        tracing::info!("Waiting for deployment transaction");
        let receipt = pending
            .get_receipt()
            .instrument(tracing::info_span!("get_receipt"))
            .await
            .inspect_err(|err| tracing::error!("Transaction failed {err:?}"))?;

        if !receipt.status() {
            tracing::error!("Transaction reverted {:#?}", receipt.transaction_hash);
            return Err(DeploymentError::Reverted(receipt.transaction_hash));
        }
        let address = receipt
            .contract_address
            .ok_or(DeploymentError::NoContractAddress(receipt.transaction_hash))?;

        Ok(DeploymentHandle {
            address,
            transaction_hash: receipt.transaction_hash,
        })
    }
}

impl<P> Deployer for AlloyDeployer<P>
where
    P: Provider<Ethereum>,
{
    fn network(&self) -> &str {
        &self.network
    }

    async fn deploy(
        &self,
        contract: &ContractArtifact,
        constructor_arg: Option<Address>,
    ) -> Result<DeploymentHandle, DeploymentError> {
        let tracing_span = tracing::info_span!("deploy", contract = %contract.contract_name, network = %self.network);
        self.deploy_impl(contract, constructor_arg)
            .instrument(tracing_span)
            .await
    }
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to convert string to hex")]
    FromHexError,
    #[error("Failed to parse private key")]
    ParsePrivateKeyError,
    #[error("Failed to deserialize private key")]
    DeserializePrivateKeyError,
}

pub type DefaultProvider = alloy::providers::fillers::FillProvider<
    alloy::providers::fillers::JoinFill<
        alloy::providers::fillers::JoinFill<
            alloy::providers::Identity,
            <Ethereum as RecommendedFillers>::RecommendedFillers,
        >,
        alloy::providers::fillers::WalletFiller<EthereumWallet>,
    >,
    alloy::providers::RootProvider,
>;

pub type DefaultDeployer = AlloyDeployer<DefaultProvider>;

pub struct ProviderFactory {}
impl ProviderFactory {
    fn decode_key(private_key_raw: &str) -> Result<k256::SecretKey, ProviderError> {
        let key_str = private_key_raw
            .split("0x")
            .last()
            .ok_or(ProviderError::ParsePrivateKeyError)?
            .trim();
        let key_hex = hex::decode(key_str).map_err(|_e| ProviderError::FromHexError)?;
        let key = k256::SecretKey::from_slice(&key_hex).map_err(|_e| ProviderError::DeserializePrivateKeyError)?;
        Ok(key)
    }

    pub fn create_provider(key: k256::SecretKey, endpoint: Url) -> DefaultProvider {
        let signer: PrivateKeySigner = PrivateKeySigner::from(key);
        let wallet: EthereumWallet = EthereumWallet::from(signer);
        ProviderBuilder::new().wallet(wallet).connect_http(endpoint)
    }

    pub fn create_provider_decode_key(key_str: &str, endpoint: Url) -> Result<DefaultProvider, ProviderError> {
        let key = Self::decode_key(key_str)?;
        Ok(Self::create_provider(key, endpoint))
    }
}
