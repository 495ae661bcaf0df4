//! Configuration management for the orchestrator.
//!
//! Loads all settings from environment variables (a `.env` file is read
//! first by `main`).

use std::path::PathBuf;

use stellar_strkey::Strkey;

use crate::contracts::ContractKind;
use crate::errors::{OrchestratorError, Result};

/// The demo accounts, in the order they appear in `ACCOUNTS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accounts {
    /// Deploys every contract and holds the owner role.
    pub owner: String,
    /// Exam teacher; also the breakfast warden.
    pub teacher: String,
    pub invigilator: String,
    pub seller: String,
    /// Exam student, breakfast student and first depositor.
    pub buyer1: String,
    /// Second depositor.
    pub buyer2: String,
}

impl Accounts {
    pub const REQUIRED: usize = 6;

    /// Parse a comma-separated address list.
    pub fn parse(list: &str) -> Result<Self> {
        let addresses: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .map(str::to_string)
            .collect();

        let [owner, teacher, invigilator, seller, buyer1, buyer2, ..] = addresses.as_slice() else {
            return Err(OrchestratorError::Config(format!(
                "ACCOUNTS must list at least {} addresses, found {}",
                Self::REQUIRED,
                addresses.len()
            )));
        };

        Ok(Accounts {
            owner: owner.clone(),
            teacher: teacher.clone(),
            invigilator: invigilator.clone(),
            seller: seller.clone(),
            buyer1: buyer1.clone(),
            buyer2: buyer2.clone(),
        })
    }

    fn all(&self) -> [&str; Self::REQUIRED] {
        [
            self.owner.as_str(),
            self.teacher.as_str(),
            self.invigilator.as_str(),
            self.seller.as_str(),
            self.buyer1.as_str(),
            self.buyer2.as_str(),
        ]
    }
}

/// Uploaded WASM hash (hex) of each contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WasmHashes {
    pub college_breakfast: String,
    pub exam_portal: String,
    pub hostel_snacks: String,
    pub deposit_wallet: String,
}

impl WasmHashes {
    /// Load the hashes from `BREAKFAST_WASM_HASH`, `EXAM_WASM_HASH`,
    /// `SNACKS_WASM_HASH` and `WALLET_WASM_HASH`. Only deployment needs them.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(WasmHashes {
            college_breakfast: required(&lookup, "BREAKFAST_WASM_HASH")?,
            exam_portal: required(&lookup, "EXAM_WASM_HASH")?,
            hostel_snacks: required(&lookup, "SNACKS_WASM_HASH")?,
            deposit_wallet: required(&lookup, "WALLET_WASM_HASH")?,
        })
    }

    /// Every hash must be 32 hex-encoded bytes.
    pub fn validate(&self) -> Result<()> {
        for kind in ContractKind::ALL {
            if !matches!(hex::decode(self.get(kind)), Ok(bytes) if bytes.len() == 32) {
                return Err(OrchestratorError::Config(format!(
                    "WASM hash for {} must be 32 hex-encoded bytes",
                    kind.name()
                )));
            }
        }
        Ok(())
    }

    pub fn get(&self, kind: ContractKind) -> &str {
        match kind {
            ContractKind::CollegeBreakfast => &self.college_breakfast,
            ContractKind::ExamPortal => &self.exam_portal,
            ContractKind::HostelSnacks => &self.hostel_snacks,
            ContractKind::DepositWallet => &self.deposit_wallet,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Soroban RPC endpoint (e.g., https://soroban-testnet.stellar.org)
    pub rpc_url: String,

    /// Network passphrase (e.g., "Test SDF Network ; September 2015")
    pub network_passphrase: String,

    pub accounts: Accounts,

    /// Payment token contract (Strkey format: C...)
    pub token_id: String,

    /// Where the deployment record is written and read.
    pub deployment_file: PathBuf,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required variables:
    /// - `ACCOUNTS`: comma-separated demo account addresses
    /// - `TOKEN_ID`: payment token contract
    ///
    /// Optional variables (with defaults):
    /// - `RPC_URL`: Soroban RPC endpoint (defaults to testnet)
    /// - `NETWORK_PASSPHRASE`: Network passphrase (defaults to testnet)
    /// - `DEPLOYMENT_FILE`: deployment record (defaults to `deployment.json`)
    /// - `TIMEOUT_SECS`: Request timeout (defaults to 30)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let need = |key: &str| required(&lookup, key);

        Ok(Config {
            rpc_url: lookup("RPC_URL")
                .unwrap_or_else(|| "https://soroban-testnet.stellar.org".to_string()),

            network_passphrase: lookup("NETWORK_PASSPHRASE")
                .unwrap_or_else(|| "Test SDF Network ; September 2015".to_string()),

            accounts: Accounts::parse(&need("ACCOUNTS")?)?,

            token_id: need("TOKEN_ID")?,

            deployment_file: deployment_file_from_lookup(&lookup),

            timeout_secs: lookup("TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .map_err(|_| OrchestratorError::Config("Invalid TIMEOUT_SECS".to_string()))?,
        })
    }

    /// Validate that all configuration values are well-formed.
    pub fn validate(&self) -> Result<()> {
        if !self.rpc_url.starts_with("http") {
            return Err(OrchestratorError::Config(
                "RPC_URL must be a valid HTTP(S) URL".to_string(),
            ));
        }

        for address in self.accounts.all() {
            if !matches!(Strkey::from_string(address), Ok(Strkey::PublicKeyEd25519(_))) {
                return Err(OrchestratorError::Config(format!(
                    "ACCOUNTS entry {address} is not a valid Stellar account address (G...)"
                )));
            }
        }

        if !matches!(Strkey::from_string(&self.token_id), Ok(Strkey::Contract(_))) {
            return Err(OrchestratorError::Config(
                "TOKEN_ID must be a valid Stellar contract address (C...)".to_string(),
            ));
        }

        Ok(())
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key).ok_or_else(|| {
        OrchestratorError::Config(format!("Missing required environment variable: {key}"))
    })
}

fn deployment_file_from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> PathBuf {
    lookup("DEPLOYMENT_FILE")
        .unwrap_or_else(|| "deployment.json".to_string())
        .into()
}

/// `DEPLOYMENT_FILE`, for commands that only read the deployment record.
pub fn deployment_file_from_env() -> PathBuf {
    deployment_file_from_lookup(&|key: &str| std::env::var(key).ok())
}
