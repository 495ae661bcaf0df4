extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

use crate::{CollegeBreakfast, CollegeBreakfastClient};

pub struct TestContext {
    pub env: Env,
    pub client: CollegeBreakfastClient<'static>,
    pub owner: Address,
    pub warden: Address,
}

impl TestContext {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        // Start from a non-zero timestamp so order times are observable.
        let mut ledger = env.ledger().get();
        ledger.timestamp = 100_000;
        env.ledger().set(ledger);

        let owner = Address::generate(&env);
        let warden = Address::generate(&env);
        let contract_id = env.register(CollegeBreakfast, (owner.clone(), warden.clone()));
        let client = CollegeBreakfastClient::new(&env, &contract_id);

        Self {
            env,
            client,
            owner,
            warden,
        }
    }

    /// Register a fresh student and open the portal.
    pub fn open_with_student(&self) -> Address {
        let student = self.generate_address();
        self.client.register_student(&self.warden, &student);
        self.client.open_portal(&self.warden);
        student
    }

    /// Close and reopen the portal, starting a new cycle.
    pub fn next_cycle(&self) {
        self.client.close_portal(&self.warden);
        self.client.open_portal(&self.warden);
    }

    pub fn item(&self, name: &str) -> String {
        String::from_str(&self.env, name)
    }

    pub fn jump_time(&self, seconds: u64) {
        let mut ledger = self.env.ledger().get();
        ledger.timestamp += seconds;
        self.env.ledger().set(ledger);
    }

    pub fn generate_address(&self) -> Address {
        Address::generate(&self.env)
    }
}
