//! # Storage
//!
//! | Key              | Tier       | Type            |
//! |------------------|------------|-----------------|
//! | `Owner`          | instance   | `Address`       |
//! | `Token`          | instance   | `Address`       |
//! | `Held`           | instance   | `i128`          |
//! | `Snack(id)`      | persistent | `Snack`         |
//! | `Buyer(addr)`    | persistent | `BuyerProfile`  |
//! | `Seller(addr)`   | persistent | `SellerProfile` |
//! | `Spend(b, s)`    | persistent | `i128`          |
//! | `Payees(b)`      | persistent | `Vec<Address>`  |
//!
//! `Held` is the token amount the contract holds for sellers and refunds:
//! purchases add to it, refunds and withdrawals take from it. It always
//! equals the sum of unwithdrawn seller earnings.
//!
//! `Spend(buyer, seller)` is what the buyer has paid that seller net of
//! refunds; `Payees(buyer)` lists those sellers in first-purchase order.

use campus_access::ttl::{bump_instance, bump_persistent};
use soroban_sdk::{contracttype, Address, Env, IntoVal, String, TryFromVal, Val, Vec};

use crate::types::{BuyerProfile, SellerProfile, Snack};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Token,
    Held,
    Snack(String),
    Buyer(Address),
    Seller(Address),
    Spend(Address, Address),
    Payees(Address),
}

pub fn init(env: &Env, owner: &Address, token: &Address) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::Token, token);
    instance.set(&DataKey::Held, &0i128);
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

pub fn get_held(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Held).unwrap_or(0)
}

pub fn set_held(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Held, &amount);
    bump_instance(env);
}

fn load<V: TryFromVal<Env, Val>>(env: &Env, key: &DataKey) -> Option<V> {
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        bump_persistent(env, key);
    }
    value
}

fn save<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    bump_persistent(env, key);
}

pub fn load_snack(env: &Env, id: &String) -> Option<Snack> {
    load(env, &DataKey::Snack(id.clone()))
}

pub fn has_snack(env: &Env, id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Snack(id.clone()))
}

pub fn save_snack(env: &Env, snack: &Snack) {
    save(env, &DataKey::Snack(snack.id.clone()), snack);
}

pub fn remove_snack(env: &Env, id: &String) {
    env.storage()
        .persistent()
        .remove(&DataKey::Snack(id.clone()));
}

pub fn load_buyer(env: &Env, buyer: &Address) -> Option<BuyerProfile> {
    load(env, &DataKey::Buyer(buyer.clone()))
}

pub fn save_buyer(env: &Env, buyer: &Address, profile: &BuyerProfile) {
    save(env, &DataKey::Buyer(buyer.clone()), profile);
}

pub fn load_seller(env: &Env, seller: &Address) -> Option<SellerProfile> {
    load(env, &DataKey::Seller(seller.clone()))
}

pub fn save_seller(env: &Env, seller: &Address, profile: &SellerProfile) {
    save(env, &DataKey::Seller(seller.clone()), profile);
}

pub fn get_spend(env: &Env, buyer: &Address, seller: &Address) -> i128 {
    load(env, &DataKey::Spend(buyer.clone(), seller.clone())).unwrap_or(0)
}

pub fn set_spend(env: &Env, buyer: &Address, seller: &Address, amount: i128) {
    save(env, &DataKey::Spend(buyer.clone(), seller.clone()), &amount);
}

pub fn get_payees(env: &Env, buyer: &Address) -> Vec<Address> {
    load(env, &DataKey::Payees(buyer.clone())).unwrap_or_else(|| Vec::new(env))
}

pub fn save_payees(env: &Env, buyer: &Address, payees: &Vec<Address>) {
    save(env, &DataKey::Payees(buyer.clone()), payees);
}
