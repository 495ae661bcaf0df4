//! # Storage
//!
//! ## Instance storage
//!
//! | Key           | Type           | Description                          |
//! |---------------|----------------|--------------------------------------|
//! | `Owner`       | `Address`      | Deployer                             |
//! | `Warden`      | `Address`      | Runs the portal and the student list |
//! | `Status`      | `PortalStatus` | Current portal status                |
//! | `Cycle`       | `u32`          | Number of times the portal opened    |
//! | `TotalOrders` | `u64`          | Orders placed by all students        |
//!
//! ## Persistent storage
//!
//! | Key               | Type        | Description                 |
//! |-------------------|-------------|-----------------------------|
//! | `Orders(student)` | `OrderBook` | Ring of the student's orders |
//!
//! Student enrolment lives in the shared registration ledger.

use campus_access::ttl::{bump_instance, bump_persistent};
use soroban_sdk::{contracttype, Address, Env};

use crate::types::{OrderBook, PortalStatus};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Warden,
    Status,
    Cycle,
    TotalOrders,
    Orders(Address),
}

pub fn init(env: &Env, owner: &Address, warden: &Address) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::Warden, warden);
    instance.set(&DataKey::Status, &PortalStatus::Closed);
    instance.set(&DataKey::Cycle, &0u32);
    instance.set(&DataKey::TotalOrders, &0u64);
    bump_instance(env);
}

pub fn get_owner(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("owner not set")
}

pub fn get_warden(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Warden)
        .expect("warden not set")
}

pub fn get_status(env: &Env) -> PortalStatus {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(PortalStatus::Closed)
}

pub fn set_status(env: &Env, status: PortalStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
    bump_instance(env);
}

pub fn get_cycle(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::Cycle).unwrap_or(0)
}

/// Advance to the next ordering cycle and return it.
pub fn start_cycle(env: &Env) -> u32 {
    let next = get_cycle(env) + 1;
    env.storage().instance().set(&DataKey::Cycle, &next);
    bump_instance(env);
    next
}

pub fn get_total_orders(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::TotalOrders)
        .unwrap_or(0)
}

pub fn increment_total_orders(env: &Env) -> u64 {
    let total = get_total_orders(env) + 1;
    env.storage().instance().set(&DataKey::TotalOrders, &total);
    total
}

pub fn load_order_book(env: &Env, student: &Address) -> Option<OrderBook> {
    let key = DataKey::Orders(student.clone());
    let book: Option<OrderBook> = env.storage().persistent().get(&key);
    if book.is_some() {
        bump_persistent(env, &key);
    }
    book
}

pub fn save_order_book(env: &Env, student: &Address, book: &OrderBook) {
    let key = DataKey::Orders(student.clone());
    env.storage().persistent().set(&key, book);
    bump_persistent(env, &key);
}
