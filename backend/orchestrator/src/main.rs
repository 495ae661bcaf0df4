//! Campus contracts orchestrator
//!
//! Command-line client that:
//! 1. Deploys the four campus contracts with their constructor arguments
//! 2. Records the deployed addresses in a JSON file
//! 3. Drives the demo call sequence of each contract over Soroban JSON-RPC
//! 4. Reads the resulting contract state back through simulated queries

mod config;
mod contracts;
mod deployment;
mod errors;
mod rpc;
mod workflows;

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, WasmHashes};
use crate::contracts::ContractKind;
use crate::deployment::DeploymentRecord;
use crate::errors::{OrchestratorError, Result};
use crate::rpc::{Deployment, RpcClient, ScArg};
use crate::workflows::{Reading, Workflow};

#[derive(Parser, Debug)]
#[command(name = "campus-orchestrator")]
#[command(about = "Deploy and exercise the campus contracts", long_about = None)]
struct Cli {
    /// Dry run mode - log every call without submitting it
    #[arg(long, global = true, default_value_t = false)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Deploy all contracts and save their addresses
    Deploy,
    /// Run a demo workflow against deployed contracts, then report
    Run {
        #[arg(value_enum)]
        workflow: Workflow,
    },
    /// Read back the state of deployed contracts without changing it
    Report {
        #[arg(value_enum)]
        workflow: Workflow,
    },
    /// Print the saved deployment record
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Command::Show = cli.command {
        return show(&config::deployment_file_from_env());
    }

    let config = Config::from_env()?;
    config.validate()?;
    info!("Network: {}", config.network_passphrase);

    if cli.dry_run {
        warn!("DRY RUN MODE - Transactions will not be submitted");
    }

    match cli.command {
        Command::Deploy => deploy_all(&config, cli.dry_run).await,
        Command::Run { workflow } => run_workflow(&config, workflow, cli.dry_run).await,
        Command::Report { workflow } => report(&config, workflow, cli.dry_run).await,
        Command::Show => Ok(()),
    }
}

fn constructor_args(kind: ContractKind, config: &Config) -> Vec<ScArg> {
    let accounts = &config.accounts;
    match kind {
        ContractKind::CollegeBreakfast => vec![
            ScArg::address(&accounts.owner),
            ScArg::address(&accounts.teacher),
        ],
        ContractKind::ExamPortal => vec![
            ScArg::address(&accounts.owner),
            ScArg::address(&accounts.teacher),
            ScArg::address(&accounts.invigilator),
            ScArg::address(&config.token_id),
        ],
        ContractKind::HostelSnacks | ContractKind::DepositWallet => vec![
            ScArg::address(&accounts.owner),
            ScArg::address(&config.token_id),
        ],
    }
}

async fn deploy_all(config: &Config, dry_run: bool) -> Result<()> {
    let wasm_hashes = WasmHashes::from_env()?;
    wasm_hashes.validate()?;

    let client = RpcClient::new(config, dry_run)?;
    let deployer = config.accounts.owner.clone();
    let mut record = DeploymentRecord::default();

    for kind in ContractKind::ALL {
        let deployment = Deployment {
            wasm_hash: wasm_hashes.get(kind).to_string(),
            constructor_args: constructor_args(kind, config),
            source: deployer.clone(),
        };
        if let Some(address) = client.deploy(kind, &deployment).await? {
            record.insert(kind, address, deployer.clone());
        }
    }

    if client.is_dry_run() {
        info!("Would save deployment record to {}", config.deployment_file.display());
        return Ok(());
    }

    record.save(&config.deployment_file)?;
    info!("✓ All contracts deployed");
    Ok(())
}

async fn run_workflow(config: &Config, workflow: Workflow, dry_run: bool) -> Result<()> {
    let record = DeploymentRecord::load(&config.deployment_file)?;
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| OrchestratorError::Config(format!("System clock error: {e}")))?
        .as_secs();

    let steps = workflows::plan(workflow, &record, config, now)?;
    let client = RpcClient::new(config, dry_run)?;
    let executed = workflows::execute(&client, &steps).await?;
    info!("✓ Workflow {:?} finished ({} calls)", workflow, executed);

    let queries = workflows::report_plan(workflow, &record, config)?;
    print_readings(&workflows::read_back(&client, &queries).await?);
    Ok(())
}

async fn report(config: &Config, workflow: Workflow, dry_run: bool) -> Result<()> {
    let record = DeploymentRecord::load(&config.deployment_file)?;
    let queries = workflows::report_plan(workflow, &record, config)?;
    let client = RpcClient::new(config, dry_run)?;

    print_readings(&workflows::read_back(&client, &queries).await?);
    Ok(())
}

fn print_readings(readings: &[Reading]) {
    for reading in readings {
        let args: Vec<String> = reading
            .args
            .iter()
            .map(|arg| serde_json::to_string(arg).unwrap_or_default())
            .collect();
        println!(
            "{}.{}({}) = {}",
            reading.kind,
            reading.function,
            args.join(", "),
            reading.value
        );
    }
}

fn show(deployment_file: &Path) -> Result<()> {
    let record = DeploymentRecord::load(deployment_file)?;
    if record.is_empty() {
        warn!("Deployment record is empty");
    }
    for (name, deployed) in record.iter() {
        println!("{name}: {} (deployed by {})", deployed.address, deployed.deployer);
    }
    Ok(())
}
