extern crate std;

use soroban_sdk::{testutils::Address as _, token, Address, Env};

use crate::{DepositWallet, DepositWalletClient};

pub const STARTING_BALANCE: i128 = 10_000;

pub struct TestContext {
    pub env: Env,
    pub client: DepositWalletClient<'static>,
    pub owner: Address,
    pub token: token::Client<'static>,
    pub sac: token::StellarAssetClient<'static>,
}

impl TestContext {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let owner = Address::generate(&env);
        let admin = Address::generate(&env);
        let asset = env.register_stellar_asset_contract_v2(admin);
        let token = token::Client::new(&env, &asset.address());
        let sac = token::StellarAssetClient::new(&env, &asset.address());
        sac.mint(&owner, &STARTING_BALANCE);

        let contract_id = env.register(DepositWallet, (owner.clone(), asset.address()));
        let client = DepositWalletClient::new(&env, &contract_id);

        Self {
            env,
            client,
            owner,
            token,
            sac,
        }
    }

    /// An address holding `STARTING_BALANCE` tokens.
    pub fn depositor(&self) -> Address {
        let depositor = Address::generate(&self.env);
        self.sac.mint(&depositor, &STARTING_BALANCE);
        depositor
    }
}
