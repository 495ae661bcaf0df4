extern crate std;

use soroban_sdk::{testutils::Address as _, token, Address, Env, String};

use crate::{HostelSnacks, HostelSnacksClient};

pub const STARTING_BALANCE: i128 = 1_000;

pub struct TestContext {
    pub env: Env,
    pub client: HostelSnacksClient<'static>,
    pub owner: Address,
    pub token: token::Client<'static>,
    pub sac: token::StellarAssetClient<'static>,
}

impl TestContext {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let owner = Address::generate(&env);
        let asset = env.register_stellar_asset_contract_v2(owner.clone());
        let token = token::Client::new(&env, &asset.address());
        let sac = token::StellarAssetClient::new(&env, &asset.address());

        let contract_id = env.register(HostelSnacks, (owner.clone(), asset.address()));
        let client = HostelSnacksClient::new(&env, &contract_id);

        Self {
            env,
            client,
            owner,
            token,
            sac,
        }
    }

    pub fn text(&self, value: &str) -> String {
        String::from_str(&self.env, value)
    }

    pub fn seller(&self) -> Address {
        let seller = Address::generate(&self.env);
        self.client.register_seller(&seller);
        seller
    }

    /// A registered buyer holding `STARTING_BALANCE` tokens.
    pub fn buyer(&self, username: &str) -> Address {
        let buyer = Address::generate(&self.env);
        self.sac.mint(&buyer, &STARTING_BALANCE);
        self.client.register_buyer(&buyer, &self.text(username));
        buyer
    }

    /// A seller listing "Chips" (`chips1`) at price 10 with 20 in stock.
    pub fn seller_with_chips(&self) -> Address {
        let seller = self.seller();
        self.client
            .add_snack(&seller, &self.text("Chips"), &10, &20, &self.text("chips1"));
        seller
    }

    pub fn generate_address(&self) -> Address {
        Address::generate(&self.env)
    }
}
