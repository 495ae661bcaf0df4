extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

use crate::{ExamPortal, ExamPortalClient};

pub const NOW: u64 = 100_000;
pub const FEE: i128 = 100;
pub const DURATION: u64 = 3_600;
pub const START: u64 = NOW + 100;
pub const END: u64 = START + 7_200;

pub struct TestContext {
    pub env: Env,
    pub client: ExamPortalClient<'static>,
    pub owner: Address,
    pub teacher: Address,
    pub invigilator: Address,
    pub token: token::Client<'static>,
    pub sac: token::StellarAssetClient<'static>,
}

impl TestContext {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let mut ledger = env.ledger().get();
        ledger.timestamp = NOW;
        env.ledger().set(ledger);

        let owner = Address::generate(&env);
        let teacher = Address::generate(&env);
        let invigilator = Address::generate(&env);

        let asset = env.register_stellar_asset_contract_v2(owner.clone());
        let token = token::Client::new(&env, &asset.address());
        let sac = token::StellarAssetClient::new(&env, &asset.address());

        let contract_id = env.register(
            ExamPortal,
            (
                owner.clone(),
                teacher.clone(),
                invigilator.clone(),
                asset.address(),
            ),
        );
        let client = ExamPortalClient::new(&env, &contract_id);

        Self {
            env,
            client,
            owner,
            teacher,
            invigilator,
            token,
            sac,
        }
    }

    pub fn text(&self, value: &str) -> String {
        String::from_str(&self.env, value)
    }

    /// Configure the exam with the default fee and window.
    pub fn configure(&self) -> u32 {
        self.client.set_exam_details(
            &self.teacher,
            &self.text("Algebra"),
            &self.text("Midterm exam"),
            &FEE,
            &DURATION,
            &START,
            &END,
        )
    }

    /// Configure and open the exam with the default fee and window.
    pub fn configure_and_open(&self) {
        self.configure();
        self.client
            .open_exam(&self.teacher, &FEE, &DURATION, &START, &END);
    }

    /// A registered student holding `balance` tokens.
    pub fn funded_candidate(&self, balance: i128) -> Address {
        let student = Address::generate(&self.env);
        self.sac.mint(&student, &balance);
        self.client.register_student(&self.teacher, &student);
        student
    }

    /// Open the exam, then register, fund and pay for a student.
    pub fn paid_candidate(&self) -> Address {
        self.configure_and_open();
        let student = self.funded_candidate(1_000);
        self.client.pay_for_exam(&student, &FEE);
        student
    }

    pub fn set_time(&self, timestamp: u64) {
        let mut ledger = self.env.ledger().get();
        ledger.timestamp = timestamp;
        self.env.ledger().set(ledger);
    }

    pub fn generate_address(&self) -> Address {
        Address::generate(&self.env)
    }
}
