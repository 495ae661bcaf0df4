//! # Deposit Wallet Contract
//!
//! An owner-controlled escrow. Anyone except the owner deposits the wallet
//! token; the owner withdraws from the pooled balance or refunds individual
//! depositors out of what they put in.
//!
//! | Phase        | Entry Point(s)                                          |
//! |--------------|---------------------------------------------------------|
//! | Construction | `__constructor(owner, token)`                           |
//! | Depositing   | `deposit`, `receive`                                    |
//! | Owner        | `withdraw`, `refund_depositor`                          |
//! | Queries      | `balance`, `total_deposits`, `get_depositors_count`,    |
//! |              | `get_all_depositors`, `get_depositor_balance`,          |
//! |              | `has_depositor_deposited`                               |
//!
//! `balance()` is the wallet's own ledger of what it holds. Tokens sent to
//! the contract address without going through `deposit` or `receive` are
//! not counted.

#![no_std]

use campus_access::{gate, MemberSet};
use soroban_sdk::{
    contract, contracterror, contractimpl, symbol_short, token, Address, Env, Vec,
};

pub mod events;
mod storage;

#[cfg(test)]
mod test_utils;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    ZeroAmount = 1,
    OwnerCannotDeposit = 2,
    OwnerCannotSendDirectly = 3,
    OnlyOwnerCanWithdraw = 4,
    OnlyOwnerCanRefund = 5,
    InsufficientBalance = 6,
    InsufficientDepositorBalance = 7,
}

impl Error {
    /// Human-readable rejection reason.
    pub const fn reason(self) -> &'static str {
        match self {
            Error::ZeroAmount => "Deposit amount must be greater than zero",
            Error::OwnerCannotDeposit => "Owner cannot deposit to their own wallet",
            Error::OwnerCannotSendDirectly => "Owner cannot send tokens directly",
            Error::OnlyOwnerCanWithdraw => "Only owner can withdraw",
            Error::OnlyOwnerCanRefund => "Only owner can issue refunds",
            Error::InsufficientBalance => "Insufficient balance",
            Error::InsufficientDepositorBalance => "Depositor doesn't have enough balance",
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Error::ZeroAmount),
            2 => Some(Error::OwnerCannotDeposit),
            3 => Some(Error::OwnerCannotSendDirectly),
            4 => Some(Error::OnlyOwnerCanWithdraw),
            5 => Some(Error::OnlyOwnerCanRefund),
            6 => Some(Error::InsufficientBalance),
            7 => Some(Error::InsufficientDepositorBalance),
            _ => None,
        }
    }
}

fn depositors() -> MemberSet {
    MemberSet::new(symbol_short!("depositor"))
}

fn token_client(env: &Env) -> token::Client<'_> {
    token::Client::new(env, &storage::get_token(env))
}

#[contract]
pub struct DepositWallet;

#[contractimpl]
impl DepositWallet {
    pub fn __constructor(env: Env, owner: Address, token: Address) {
        storage::init(&env, &owner, &token);
    }

    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Depositing
    // ─────────────────────────────────────────────────────────

    /// Deposit `amount` from `depositor`. Returns the depositor's new balance.
    pub fn deposit(env: Env, depositor: Address, amount: i128) -> Result<i128, Error> {
        Self::credit(&env, depositor, amount, Error::OwnerCannotDeposit)
    }

    /// Direct-transfer path. Behaves like `deposit`, except for the error
    /// the owner gets.
    pub fn receive(env: Env, from: Address, amount: i128) -> Result<i128, Error> {
        Self::credit(&env, from, amount, Error::OwnerCannotSendDirectly)
    }

    // ─────────────────────────────────────────────────────────
    // Owner
    // ─────────────────────────────────────────────────────────

    /// Withdraw `amount` of the pooled balance to the owner.
    pub fn withdraw(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        let owner = storage::get_owner(&env);
        gate::require(&caller, &owner).map_err(|_| Error::OnlyOwnerCanWithdraw)?;

        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }
        let aggregate = storage::get_aggregate(&env);
        if amount > aggregate {
            return Err(Error::InsufficientBalance);
        }

        let remaining = aggregate - amount;
        storage::set_aggregate(&env, remaining);
        token_client(&env).transfer(&env.current_contract_address(), &owner, &amount);

        events::emit_withdrawn(&env, owner, amount, remaining);
        Ok(())
    }

    /// Return `amount` to `depositor` out of their own balance.
    pub fn refund_depositor(
        env: Env,
        caller: Address,
        depositor: Address,
        amount: i128,
    ) -> Result<(), Error> {
        gate::require(&caller, &storage::get_owner(&env))
            .map_err(|_| Error::OnlyOwnerCanRefund)?;

        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }
        let balance = storage::get_balance(&env, &depositor);
        if amount > balance {
            return Err(Error::InsufficientDepositorBalance);
        }
        // The owner may already have withdrawn the pooled funds.
        let aggregate = storage::get_aggregate(&env);
        if amount > aggregate {
            return Err(Error::InsufficientBalance);
        }

        storage::set_balance(&env, &depositor, balance - amount);
        storage::set_aggregate(&env, aggregate - amount);
        token_client(&env).transfer(&env.current_contract_address(), &depositor, &amount);

        events::emit_deposit_refunded(&env, depositor, amount);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn balance(env: Env) -> i128 {
        storage::get_aggregate(&env)
    }

    /// Successful deposits, counting repeat deposits.
    pub fn total_deposits(env: Env) -> u32 {
        storage::get_total_deposits(&env)
    }

    pub fn get_depositors_count(env: Env) -> u32 {
        depositors().len(&env)
    }

    /// Unique depositors in first-deposit order.
    pub fn get_all_depositors(env: Env) -> Vec<Address> {
        depositors().all(&env)
    }

    pub fn get_depositor_balance(env: Env, depositor: Address) -> i128 {
        storage::get_balance(&env, &depositor)
    }

    pub fn has_depositor_deposited(env: Env, depositor: Address) -> bool {
        depositors().contains(&env, &depositor)
    }
}

impl DepositWallet {
    /// Shared body of `deposit` and `receive`; `owner_error` is what the
    /// owner gets back.
    fn credit(
        env: &Env,
        depositor: Address,
        amount: i128,
        owner_error: Error,
    ) -> Result<i128, Error> {
        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }
        gate::require_not(&depositor, &storage::get_owner(env)).map_err(|_| owner_error)?;

        token_client(env).transfer(&depositor, &env.current_contract_address(), &amount);

        let balance = storage::get_balance(env, &depositor) + amount;
        storage::set_balance(env, &depositor, balance);
        storage::set_aggregate(env, storage::get_aggregate(env) + amount);
        storage::increment_total_deposits(env);
        depositors().insert(env, &depositor);

        events::emit_deposited(env, depositor, amount, balance);
        Ok(balance)
    }
}
