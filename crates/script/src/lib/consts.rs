use std::fmt;
use std::str::FromStr;

use alloy_primitives::Address;

pub const ORACLE_CONTRACT_NAME: &str = "Oracle";

pub mod link_token {
    use hex_literal::hex;
    // https://docs.chain.link/resources/link-token-contracts
    // Local development and test chains are expected to run as mainnet forks, so they reuse the mainnet token.
    pub const MAINNET: [u8; 20] = hex!("514910771AF9Ca656af840dff83E8264EcF986CA");
    pub const ROPSTEN: [u8; 20] = hex!("20fE562d797A42Dcb3399062AE9546cd06f63280");
    pub const RINKEBY: [u8; 20] = hex!("01BE23585060835E02B77ef475b0Cc51aA1e0709");
    pub const KOVAN: [u8; 20] = hex!("a36085F69e2889c224210F603D836748e7dC0088");
}

pub struct NetworkConfig {
    /// `None` for local chains, whose id depends on the node they run on
    pub chain_id: Option<u64>,
    pub link_token: [u8; 20],
}

impl NetworkConfig {
    pub fn link_token_address(&self) -> Address {
        Address::from(self.link_token)
    }
}

pub trait NetworkInfo {
    fn as_str(&self) -> String;
    fn get_config(&self) -> NetworkConfig;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Development,
    Test,
    Mainnet,
    Ropsten,
    Rinkeby,
    Kovan,
}

impl Network {
    pub const ALL: [Network; 6] = [
        Self::Development,
        Self::Test,
        Self::Mainnet,
        Self::Ropsten,
        Self::Rinkeby,
        Self::Kovan,
    ];

    const fn name(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Mainnet => "mainnet",
            Self::Ropsten => "ropsten",
            Self::Rinkeby => "rinkeby",
            Self::Kovan => "kovan",
        }
    }
}

impl NetworkInfo for Network {
    fn as_str(&self) -> String {
        self.name().to_owned()
    }

    fn get_config(&self) -> NetworkConfig {
        match self {
            Self::Development | Self::Test => NetworkConfig {
                chain_id: None,
                link_token: link_token::MAINNET,
            },
            Self::Mainnet => NetworkConfig {
                chain_id: Some(1),
                link_token: link_token::MAINNET,
            },
            Self::Ropsten => NetworkConfig {
                chain_id: Some(3),
                link_token: link_token::ROPSTEN,
            },
            Self::Rinkeby => NetworkConfig {
                chain_id: Some(4),
                link_token: link_token::RINKEBY,
            },
            Self::Kovan => NetworkConfig {
                chain_id: Some(42),
                link_token: link_token::KOVAN,
            },
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown network {0}")]
pub struct NetworkParseError(pub String);

impl FromStr for Network {
    type Err = NetworkParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|network| network.name() == value)
            .ok_or_else(|| NetworkParseError(value.to_owned()))
    }
}

/// Resolves the LINK token address for a network identifier, `None` for unknown identifiers.
pub fn link_token_address(network: &str) -> Option<Address> {
    network
        .parse::<Network>()
        .ok()
        .map(|network| network.get_config().link_token_address())
}
