//! Soroban JSON-RPC interaction.
//!
//! Every contract call and deployment is simulated first and only then
//! submitted, so a contract error surfaces before anything reaches the
//! ledger. Read-only calls stop after the simulation and return its value.
//! Calls are strictly sequential: each one is awaited before the next is
//! built.

use std::time::Duration;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::contracts::ContractKind;
use crate::errors::{OrchestratorError, Result};

/// A typed contract argument, serialized as `{"<type>": value}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScArg {
    Address(String),
    String(String),
    /// Decimal text; JSON numbers cannot carry the full `i128` range.
    I128(String),
    U32(u32),
    U64(u64),
}

impl ScArg {
    pub fn address(address: &str) -> Self {
        ScArg::Address(address.to_string())
    }

    pub fn string(value: &str) -> Self {
        ScArg::String(value.to_string())
    }

    pub fn i128(value: i128) -> Self {
        ScArg::I128(value.to_string())
    }
}

/// One contract function call signed by `source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invocation {
    pub contract_id: String,
    pub function: String,
    pub args: Vec<ScArg>,
    pub source: String,
}

/// Create a contract instance from uploaded code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub wasm_hash: String,
    pub constructor_args: Vec<ScArg>,
    pub source: String,
}

pub struct RpcClient {
    http: reqwest::Client,
    rpc_url: String,
    dry_run: bool,
}

impl RpcClient {
    pub fn new(config: &Config, dry_run: bool) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OrchestratorError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(RpcClient {
            http,
            rpc_url: config.rpc_url.clone(),
            dry_run,
        })
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Simulate and submit a contract call. Returns the transaction hash,
    /// or `None` in dry-run mode.
    pub async fn invoke(&self, kind: ContractKind, invocation: &Invocation) -> Result<Option<String>> {
        info!(
            "{}.{} as {}",
            kind,
            invocation.function,
            short(&invocation.source)
        );
        let params = serde_json::to_value(invocation)?;

        if self.dry_run {
            warn!("DRY RUN - not submitted: {}", params);
            return Ok(None);
        }

        self.simulate(kind, &params).await?;
        let result = self.send(&params).await?;
        let tx_hash = result
            .get("hash")
            .and_then(Value::as_str)
            .ok_or_else(|| OrchestratorError::Rpc("No transaction hash in response".to_string()))?;

        debug!("Transaction hash: {}", tx_hash);
        Ok(Some(tx_hash.to_string()))
    }

    /// Simulate a read-only call and return its `returnValue`, or `None`
    /// in dry-run mode. Nothing is submitted.
    pub async fn query(&self, kind: ContractKind, invocation: &Invocation) -> Result<Option<Value>> {
        debug!("Reading {}.{}", kind, invocation.function);
        let params = serde_json::to_value(invocation)?;

        if self.dry_run {
            warn!("DRY RUN - not simulated: {}", params);
            return Ok(None);
        }

        let mut result = self.simulate(kind, &params).await?;
        match result.get_mut("returnValue") {
            Some(value) => Ok(Some(value.take())),
            None => Err(OrchestratorError::Rpc(format!(
                "{kind}.{} returned no value",
                invocation.function
            ))),
        }
    }

    /// Simulate and submit a deployment. Returns the new contract address,
    /// or `None` in dry-run mode.
    pub async fn deploy(&self, kind: ContractKind, deployment: &Deployment) -> Result<Option<String>> {
        info!("Deploying {} from {}", kind, short(&deployment.source));
        let params = serde_json::to_value(deployment)?;

        if self.dry_run {
            warn!("DRY RUN - not deployed: {}", params);
            return Ok(None);
        }

        self.simulate(kind, &params).await?;
        let result = self.send(&params).await?;
        let address = result
            .get("contractId")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                OrchestratorError::Deployment(format!("No contract address returned for {kind}"))
            })?;

        info!("{} deployed at: {}", kind, address);
        Ok(Some(address.to_string()))
    }

    async fn simulate(&self, kind: ContractKind, params: &Value) -> Result<Value> {
        let result = self.call("simulateTransaction", params).await?;

        if let Some(error) = result.get("error") {
            return Err(parse_contract_error(kind, error));
        }

        debug!("Simulation successful");
        Ok(result)
    }

    async fn send(&self, params: &Value) -> Result<Value> {
        let result = self.call("sendTransaction", params).await?;

        if result.get("status").and_then(Value::as_str) == Some("ERROR") {
            return Err(OrchestratorError::Rpc(format!(
                "Transaction submission failed: {result}"
            )));
        }

        Ok(result)
    }

    /// Post one JSON-RPC request and return its `result` member.
    async fn call(&self, method: &str, params: &Value) -> Result<Value> {
        let request_body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params
        });

        let response = self
            .http
            .post(&self.rpc_url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| OrchestratorError::Network(format!("{method} request failed: {e}")))?;

        let mut response_json: Value = response
            .json()
            .await
            .map_err(|e| OrchestratorError::Network(format!("Failed to parse {method} response: {e}")))?;

        debug!("{} response: {}", method, response_json);

        if let Some(error) = response_json.get("error") {
            return Err(OrchestratorError::Rpc(format!("{method} failed: {error}")));
        }

        match response_json.get_mut("result") {
            Some(result) => Ok(result.take()),
            None => Err(OrchestratorError::Rpc(format!("{method} returned no result"))),
        }
    }
}

/// Turn a simulation error into the contract's own rejection reason.
///
/// Accepts either `{"code": n}` or host diagnostic text containing
/// `Error(Contract, #n)`.
pub fn parse_contract_error(kind: ContractKind, error: &Value) -> OrchestratorError {
    let code = match error.get("code") {
        Some(code) => code
            .as_u64()
            .or_else(|| code.as_str().and_then(|s| s.parse().ok()))
            .and_then(|c| u32::try_from(c).ok()),
        None => error.as_str().and_then(contract_code_in),
    };

    let Some(code) = code else {
        return OrchestratorError::Rpc(format!("Simulation failed: {error}"));
    };

    let reason = kind
        .error_reason(code)
        .unwrap_or("Unknown contract error")
        .to_string();

    OrchestratorError::Contract {
        contract: kind.name(),
        code,
        reason,
    }
}

fn contract_code_in(text: &str) -> Option<u32> {
    const MARKER: &str = "Error(Contract, #";
    let start = text.find(MARKER)? + MARKER.len();
    let digits: String = text[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// First characters of an address, for log lines.
fn short(address: &str) -> &str {
    address.get(..8).unwrap_or(address)
}
