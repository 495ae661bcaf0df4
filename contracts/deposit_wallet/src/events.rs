use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposited {
    pub depositor: Address,
    pub amount: i128,
    /// Depositor's balance after this deposit.
    pub balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub owner: Address,
    pub amount: i128,
    /// Wallet balance left after the withdrawal.
    pub remaining: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositRefunded {
    pub depositor: Address,
    pub amount: i128,
}

pub fn emit_deposited(env: &Env, depositor: Address, amount: i128, balance: i128) {
    let topics = (symbol_short!("deposited"), depositor.clone());
    let data = Deposited {
        depositor,
        amount,
        balance,
    };
    env.events().publish(topics, data);
}

pub fn emit_withdrawn(env: &Env, owner: Address, amount: i128, remaining: i128) {
    let topics = (symbol_short!("withdrawn"),);
    let data = Withdrawn {
        owner,
        amount,
        remaining,
    };
    env.events().publish(topics, data);
}

pub fn emit_deposit_refunded(env: &Env, depositor: Address, amount: i128) {
    let topics = (symbol_short!("refunded"), depositor.clone());
    env.events()
        .publish(topics, DepositRefunded { depositor, amount });
}
