//! # Storage
//!
//! | Key             | Tier       | Type      | Description                       |
//! |-----------------|------------|-----------|-----------------------------------|
//! | `Owner`         | instance   | `Address` | Withdraws and refunds             |
//! | `Token`         | instance   | `Address` | Deposited asset                   |
//! | `Aggregate`     | instance   | `i128`    | Tokens currently held             |
//! | `TotalDeposits` | instance   | `u32`     | Successful deposits, all time     |
//! | `Balance(addr)` | persistent | `i128`    | Net amount credited to a depositor|
//!
//! The unique depositor list is a shared member set.

use campus_access::ttl::{bump_instance, bump_persistent};
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Token,
    Aggregate,
    TotalDeposits,
    Balance(Address),
}

pub fn init(env: &Env, owner: &Address, token: &Address) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::Token, token);
    instance.set(&DataKey::Aggregate, &0i128);
    instance.set(&DataKey::TotalDeposits, &0u32);
    bump_instance(env);
}

pub fn get_owner(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("owner not set")
}

pub fn get_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .expect("token not set")
}

pub fn get_aggregate(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Aggregate)
        .unwrap_or(0)
}

pub fn set_aggregate(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Aggregate, &amount);
    bump_instance(env);
}

pub fn get_total_deposits(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::TotalDeposits)
        .unwrap_or(0)
}

pub fn increment_total_deposits(env: &Env) {
    let total = get_total_deposits(env) + 1;
    env.storage()
        .instance()
        .set(&DataKey::TotalDeposits, &total);
    bump_instance(env);
}

pub fn get_balance(env: &Env, depositor: &Address) -> i128 {
    let key = DataKey::Balance(depositor.clone());
    match env.storage().persistent().get(&key) {
        Some(balance) => {
            bump_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, depositor: &Address, amount: i128) {
    let key = DataKey::Balance(depositor.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}
