//! The on-disk record of deployed contract addresses.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::contracts::ContractKind;
use crate::errors::{OrchestratorError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedContract {
    pub address: String,
    pub deployer: String,
}

/// Deployed contracts keyed by contract name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeploymentRecord {
    contracts: BTreeMap<String, DeployedContract>,
}

impl DeploymentRecord {
    pub fn insert(&mut self, kind: ContractKind, address: String, deployer: String) {
        self.contracts
            .insert(kind.name().to_string(), DeployedContract { address, deployer });
    }

    pub fn get(&self, kind: ContractKind) -> Option<&DeployedContract> {
        self.contracts.get(kind.name())
    }

    /// Address of a deployed contract, or an error naming the missing one.
    pub fn address(&self, kind: ContractKind) -> Result<&str> {
        self.get(kind)
            .map(|deployed| deployed.address.as_str())
            .ok_or_else(|| {
                OrchestratorError::Deployment(format!(
                    "{kind} is not in the deployment record; run `deploy` first"
                ))
            })
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DeployedContract)> {
        self.contracts.iter()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            OrchestratorError::Deployment(format!(
                "Cannot read deployment record {}: {e}",
                path.display()
            ))
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!("Deployment record saved to {}", path.display());
        Ok(())
    }
}
