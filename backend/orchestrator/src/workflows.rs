//! Fixed demo call sequences, one per contract.
//!
//! A workflow is first built as a plain list of invocations and only then
//! executed, one call at a time. The first failing call aborts the rest.
//! Each workflow also has a read-back: the contract's query entry points,
//! simulated to report the state the workflow left behind.

use clap::ValueEnum;
use serde_json::Value;
use tracing::info;

use crate::config::Config;
use crate::contracts::ContractKind;
use crate::deployment::DeploymentRecord;
use crate::errors::Result;
use crate::rpc::{Invocation, RpcClient, ScArg};

/// Token amounts are in stroops (7 decimals).
pub const EXAM_FEE: i128 = 100_000;
pub const EXAM_DURATION: u64 = 3600;
/// Delay from "now" until the exam window opens.
pub const EXAM_START_DELAY: u64 = 300;

const SNACKS: [(&str, &str, i128, u32); 3] = [
    ("chips_001", "Potato Chips", 10_000, 50),
    ("cookies_001", "Chocolate Cookies", 20_000, 30),
    ("soda_001", "Cola", 15_000, 40),
];

pub const SNACK_REFUND: i128 = 10_000;

const DEPOSITS: [i128; 3] = [1_000_000, 500_000, 200_000];
pub const WALLET_WITHDRAWAL: i128 = 500_000;
pub const WALLET_REFUND: i128 = 300_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Workflow {
    Breakfast,
    Exam,
    Snacks,
    Wallet,
    All,
}

impl Workflow {
    fn contracts(self) -> &'static [ContractKind] {
        match self {
            Workflow::Breakfast => &[ContractKind::CollegeBreakfast],
            Workflow::Exam => &[ContractKind::ExamPortal],
            Workflow::Snacks => &[ContractKind::HostelSnacks],
            Workflow::Wallet => &[ContractKind::DepositWallet],
            Workflow::All => &ContractKind::ALL,
        }
    }
}

pub type Step = (ContractKind, Invocation);

/// Build the call sequence for `workflow`. `now` is the current unix time,
/// used to place the exam window.
pub fn plan(
    workflow: Workflow,
    record: &DeploymentRecord,
    config: &Config,
    now: u64,
) -> Result<Vec<Step>> {
    steps_for(workflow, record, |kind| match kind {
        ContractKind::CollegeBreakfast => breakfast_calls(config),
        ContractKind::ExamPortal => exam_calls(config, now),
        ContractKind::HostelSnacks => snacks_calls(config),
        ContractKind::DepositWallet => wallet_calls(config),
    })
}

/// Build the read-only queries that report on `workflow`'s contracts.
pub fn report_plan(
    workflow: Workflow,
    record: &DeploymentRecord,
    config: &Config,
) -> Result<Vec<Step>> {
    steps_for(workflow, record, |kind| match kind {
        ContractKind::CollegeBreakfast => breakfast_queries(config),
        ContractKind::ExamPortal => exam_queries(config),
        ContractKind::HostelSnacks => snacks_queries(config),
        ContractKind::DepositWallet => wallet_queries(config),
    })
}

fn steps_for(
    workflow: Workflow,
    record: &DeploymentRecord,
    calls_for: impl Fn(ContractKind) -> Vec<Call>,
) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for &kind in workflow.contracts() {
        let contract_id = record.address(kind)?;
        steps.extend(calls_for(kind).into_iter().map(|(source, function, args)| {
            let invocation = Invocation {
                contract_id: contract_id.to_string(),
                function: function.to_string(),
                args,
                source,
            };
            (kind, invocation)
        }));
    }
    Ok(steps)
}

/// Run the steps in order and return how many were executed.
pub async fn execute(client: &RpcClient, steps: &[Step]) -> Result<usize> {
    for (index, (kind, invocation)) in steps.iter().enumerate() {
        info!("Step {}/{}", index + 1, steps.len());
        if let Some(tx_hash) = client.invoke(*kind, invocation).await? {
            info!("Transaction hash: {}", tx_hash);
        }
    }
    Ok(steps.len())
}

/// One value read back from a contract.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub kind: ContractKind,
    pub function: String,
    pub args: Vec<ScArg>,
    pub value: Value,
}

/// Simulate each query in order and collect the returned values. In
/// dry-run mode nothing is read and the result is empty.
pub async fn read_back(client: &RpcClient, steps: &[Step]) -> Result<Vec<Reading>> {
    let mut readings = Vec::new();
    for (kind, invocation) in steps {
        if let Some(value) = client.query(*kind, invocation).await? {
            info!("{}.{} = {}", kind, invocation.function, value);
            readings.push(Reading {
                kind: *kind,
                function: invocation.function.clone(),
                args: invocation.args.clone(),
                value,
            });
        }
    }
    Ok(readings)
}

type Call = (String, &'static str, Vec<ScArg>);

fn call(source: &str, function: &'static str, args: Vec<ScArg>) -> Call {
    (source.to_string(), function, args)
}

fn breakfast_calls(config: &Config) -> Vec<Call> {
    let warden = config.accounts.teacher.as_str();
    let student = config.accounts.buyer1.as_str();

    vec![
        call(
            warden,
            "register_student",
            vec![ScArg::address(warden), ScArg::address(student)],
        ),
        call(warden, "open_portal", vec![ScArg::address(warden)]),
        call(
            student,
            "order_food",
            vec![ScArg::address(student), ScArg::string("Idli")],
        ),
        call(
            student,
            "order_food",
            vec![ScArg::address(student), ScArg::string("Dosa")],
        ),
        call(warden, "close_portal", vec![ScArg::address(warden)]),
    ]
}

fn exam_calls(config: &Config, now: u64) -> Vec<Call> {
    let teacher = config.accounts.teacher.as_str();
    let student = config.accounts.buyer1.as_str();
    let start_time = now + EXAM_START_DELAY;
    let end_time = start_time + EXAM_DURATION;

    vec![
        call(
            teacher,
            "set_exam_details",
            vec![
                ScArg::address(teacher),
                ScArg::string("Blockchain Fundamentals"),
                ScArg::string("Final exam for the blockchain course"),
                ScArg::i128(EXAM_FEE),
                ScArg::U64(EXAM_DURATION),
                ScArg::U64(start_time),
                ScArg::U64(end_time),
            ],
        ),
        call(
            teacher,
            "register_student",
            vec![ScArg::address(teacher), ScArg::address(student)],
        ),
        call(
            teacher,
            "open_exam",
            vec![
                ScArg::address(teacher),
                ScArg::i128(EXAM_FEE),
                ScArg::U64(EXAM_DURATION),
                ScArg::U64(start_time),
                ScArg::U64(end_time),
            ],
        ),
        call(
            student,
            "pay_for_exam",
            vec![ScArg::address(student), ScArg::i128(EXAM_FEE)],
        ),
    ]
}

fn snacks_calls(config: &Config) -> Vec<Call> {
    let accounts = &config.accounts;
    let owner = accounts.owner.as_str();
    let seller = accounts.seller.as_str();
    let buyer1 = accounts.buyer1.as_str();
    let buyer2 = accounts.buyer2.as_str();

    let mut calls = vec![
        call(seller, "register_seller", vec![ScArg::address(seller)]),
        call(
            buyer1,
            "register_buyer",
            vec![ScArg::address(buyer1), ScArg::string("alice")],
        ),
        call(
            buyer2,
            "register_buyer",
            vec![ScArg::address(buyer2), ScArg::string("bob")],
        ),
    ];

    for (id, name, price, quantity) in SNACKS {
        calls.push(call(
            seller,
            "add_snack",
            vec![
                ScArg::address(seller),
                ScArg::string(name),
                ScArg::i128(price),
                ScArg::U32(quantity),
                ScArg::string(id),
            ],
        ));
    }

    for (buyer, index, quantity) in [(buyer1, 0, 2), (buyer2, 1, 1), (buyer1, 2, 3)] {
        let (id, _, price, _) = SNACKS[index];
        calls.push(call(
            buyer,
            "buy_snack",
            vec![
                ScArg::address(buyer),
                ScArg::string(id),
                ScArg::U32(quantity),
                ScArg::i128(price * i128::from(quantity)),
            ],
        ));
    }

    calls.push(call(
        owner,
        "refund_buyer",
        vec![
            ScArg::address(owner),
            ScArg::address(buyer1),
            ScArg::i128(SNACK_REFUND),
        ],
    ));
    calls
}

fn wallet_calls(config: &Config) -> Vec<Call> {
    let owner = config.accounts.owner.as_str();
    let depositor1 = config.accounts.buyer1.as_str();
    let depositor2 = config.accounts.buyer2.as_str();

    let mut calls: Vec<Call> = [depositor1, depositor2, depositor1]
        .into_iter()
        .zip(DEPOSITS)
        .map(|(depositor, amount)| {
            call(
                depositor,
                "deposit",
                vec![ScArg::address(depositor), ScArg::i128(amount)],
            )
        })
        .collect();

    calls.push(call(
        owner,
        "withdraw",
        vec![ScArg::address(owner), ScArg::i128(WALLET_WITHDRAWAL)],
    ));
    calls.push(call(
        owner,
        "refund_depositor",
        vec![
            ScArg::address(owner),
            ScArg::address(depositor1),
            ScArg::i128(WALLET_REFUND),
        ],
    ));
    calls
}

fn breakfast_queries(config: &Config) -> Vec<Call> {
    let reader = config.accounts.owner.as_str();
    let student = config.accounts.buyer1.as_str();

    vec![
        call(reader, "portal_status", vec![]),
        call(reader, "get_total_orders", vec![]),
        call(reader, "get_orders", vec![ScArg::address(student)]),
        call(reader, "get_student_order_count", vec![ScArg::address(student)]),
    ]
}

fn exam_queries(config: &Config) -> Vec<Call> {
    let reader = config.accounts.owner.as_str();
    let student = config.accounts.buyer1.as_str();

    vec![
        call(reader, "get_exam_details", vec![]),
        call(reader, "registered_students", vec![]),
        call(reader, "has_paid", vec![ScArg::address(student)]),
        call(reader, "fees_collected", vec![]),
    ]
}

fn snacks_queries(config: &Config) -> Vec<Call> {
    let accounts = &config.accounts;
    let reader = accounts.owner.as_str();

    let mut calls: Vec<Call> = SNACKS
        .iter()
        .map(|(id, ..)| call(reader, "get_snack", vec![ScArg::string(id)]))
        .collect();
    calls.push(call(reader, "get_buyer", vec![ScArg::address(&accounts.buyer1)]));
    calls.push(call(reader, "get_buyer", vec![ScArg::address(&accounts.buyer2)]));
    calls.push(call(reader, "get_seller", vec![ScArg::address(&accounts.seller)]));
    calls.push(call(reader, "held_balance", vec![]));
    calls
}

fn wallet_queries(config: &Config) -> Vec<Call> {
    let accounts = &config.accounts;
    let reader = accounts.owner.as_str();

    let mut calls = vec![
        call(reader, "balance", vec![]),
        call(reader, "total_deposits", vec![]),
        call(reader, "get_depositors_count", vec![]),
        call(reader, "get_all_depositors", vec![]),
    ];
    for depositor in [&accounts.buyer1, &accounts.buyer2] {
        calls.push(call(
            reader,
            "get_depositor_balance",
            vec![ScArg::address(depositor)],
        ));
    }
    calls
}
