use std::path::{Path, PathBuf};

use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read artifact {path:?}: {source}")]
    FailedToRead { path: PathBuf, source: utils::Error },

    #[error("Artifact {path:?} contains contract {actual}, expected {expected}")]
    ContractNameMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("Artifact for {0} has no creation bytecode")]
    EmptyBytecode(String),
}

/// Compiled contract as produced by the Truffle build (`build/contracts/<Name>.json`).
/// Only the fields needed for deployment are read, the rest of the file is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractArtifact {
    #[serde(rename = "contractName")]
    pub contract_name: String,
    pub bytecode: Bytes,
}

impl ContractArtifact {
    pub fn artifact_path(artifacts_dir: &Path, contract_name: &str) -> PathBuf {
        artifacts_dir.join(format!("{contract_name}.json"))
    }

    pub fn read(path: &Path) -> Result<Self, Error> {
        utils::read_json(path).map_err(|source| Error::FailedToRead {
            path: path.to_owned(),
            source,
        })
    }

    pub fn require(artifacts_dir: &Path, contract_name: &str) -> Result<Self, Error> {
        let path = Self::artifact_path(artifacts_dir, contract_name);
        tracing::debug!("Loading artifact {contract_name} from {:?}", path.as_os_str());
        let artifact = Self::read(&path)?;

        if artifact.contract_name != contract_name {
            return Err(Error::ContractNameMismatch {
                path,
                expected: contract_name.to_owned(),
                actual: artifact.contract_name,
            });
        }
        if artifact.bytecode.is_empty() {
            return Err(Error::EmptyBytecode(artifact.contract_name));
        }
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_artifact(dir: &Path, file_name: &str, contract_name: &str, bytecode: &str) {
        let value = json!({
            "contractName": contract_name,
            "abi": [],
            "bytecode": bytecode,
            "deployedBytecode": "0x",
        });
        utils::write_json(&dir.join(format!("{file_name}.json")), &value).expect("Failed to write artifact");
    }

    #[test]
    fn require_reads_truffle_artifact() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "Oracle", "Oracle", "0x6080604052");

        let artifact = ContractArtifact::require(dir.path(), "Oracle").expect("Failed to load artifact");

        assert_eq!(artifact.contract_name, "Oracle");
        assert_eq!(artifact.bytecode.to_vec(), vec![0x60u8, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn require_rejects_name_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "Oracle", "Consumer", "0x6080604052");

        let result = ContractArtifact::require(dir.path(), "Oracle");

        assert!(matches!(result, Err(Error::ContractNameMismatch { .. })));
    }

    #[test]
    fn require_rejects_empty_bytecode() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "Oracle", "Oracle", "0x");

        let result = ContractArtifact::require(dir.path(), "Oracle");

        assert!(matches!(result, Err(Error::EmptyBytecode(_))));
    }

    #[test]
    fn require_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = ContractArtifact::require(dir.path(), "Oracle");

        assert!(matches!(result, Err(Error::FailedToRead { .. })));
    }
}
