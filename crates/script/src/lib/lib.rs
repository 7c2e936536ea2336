pub mod artifact;
pub mod consts;
pub mod deployer;
pub mod env;
pub mod eth_client;
pub mod migration;
pub mod scripts;
pub mod tracing;
pub mod utils;
