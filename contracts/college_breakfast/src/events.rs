use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

use crate::types::PortalStatus;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PortalStatusChanged {
    pub status: PortalStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FoodOrdered {
    pub student: Address,
    pub food_item: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FoodOrderCancelled {
    pub student: Address,
    pub food_item: String,
}

pub fn emit_portal_status_changed(env: &Env, status: PortalStatus) {
    let topics = (symbol_short!("portal"),);
    env.events().publish(topics, PortalStatusChanged { status });
}

pub fn emit_food_ordered(env: &Env, student: Address, food_item: String) {
    let topics = (symbol_short!("ordered"), student.clone());
    let data = FoodOrdered { student, food_item };
    env.events().publish(topics, data);
}

pub fn emit_food_order_cancelled(env: &Env, student: Address, food_item: String) {
    let topics = (symbol_short!("cancelled"), student.clone());
    let data = FoodOrderCancelled { student, food_item };
    env.events().publish(topics, data);
}
