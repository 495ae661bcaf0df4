//! # Hostel Snacks Contract
//!
//! A small hostel marketplace. Sellers list snacks; buyers purchase them
//! with the payment token. The contract holds the proceeds: sellers
//! withdraw their earnings and the owner may refund buyers out of the
//! earnings of the sellers they paid.
//!
//! | Phase        | Entry Point(s)                                        |
//! |--------------|-------------------------------------------------------|
//! | Construction | `__constructor(owner, token)`                         |
//! | Registration | `register_seller`, `register_buyer`                   |
//! | Listings     | `add_snack`, `update_snack`, `delete_snack`           |
//! | Trading      | `buy_snack`                                           |
//! | Payouts      | `refund_buyer`, `withdraw_earnings`                   |
//! | Queries      | `get_snack`, `get_buyer`, `get_seller`, `is_seller`,  |
//! |              | `is_buyer`, `held_balance`                            |

#![no_std]

use campus_access::{gate, RegistrationLedger};
use soroban_sdk::{
    contract, contracterror, contractimpl, symbol_short, token, Address, Env, String,
};

pub mod events;
mod storage;
pub mod types;

#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_utils;

pub use types::{BuyerProfile, SellerProfile, Snack};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotSeller = 1,
    NotBuyer = 2,
    SellerAlreadyRegistered = 3,
    BuyerAlreadyRegistered = 4,
    SnackNotFound = 5,
    SnackAlreadyExists = 6,
    InvalidSnack = 7,
    NotSnackOwner = 8,
    InvalidQuantity = 9,
    InsufficientPayment = 10,
    InsufficientQuantity = 11,
    NotOwner = 12,
    InvalidAmount = 13,
    RefundExceedsSpend = 14,
    NoEarnings = 15,
    InsufficientFunds = 16,
    Overflow = 17,
}

impl Error {
    /// Human-readable rejection reason.
    pub const fn reason(self) -> &'static str {
        match self {
            Error::NotSeller => "Only seller can perform this action",
            Error::NotBuyer => "Only buyer can perform this action",
            Error::SellerAlreadyRegistered => "Seller already registered",
            Error::BuyerAlreadyRegistered => "Buyer already registered",
            Error::SnackNotFound => "Snack does not exist",
            Error::SnackAlreadyExists => "Snack already exists",
            Error::InvalidSnack => "Snack needs an id, a name and a positive price",
            Error::NotSnackOwner => "Only the seller of this snack can change it",
            Error::InvalidQuantity => "Quantity must be greater than zero",
            Error::InsufficientPayment => "Insufficient payment",
            Error::InsufficientQuantity => "Not enough quantity available",
            Error::NotOwner => "Only owner can perform this action",
            Error::InvalidAmount => "Amount must be greater than zero",
            Error::RefundExceedsSpend => "Refund exceeds amount spent",
            Error::NoEarnings => "No earnings to withdraw",
            Error::InsufficientFunds => "Contract does not hold enough funds",
            Error::Overflow => "Arithmetic overflow",
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Error::NotSeller),
            2 => Some(Error::NotBuyer),
            3 => Some(Error::SellerAlreadyRegistered),
            4 => Some(Error::BuyerAlreadyRegistered),
            5 => Some(Error::SnackNotFound),
            6 => Some(Error::SnackAlreadyExists),
            7 => Some(Error::InvalidSnack),
            8 => Some(Error::NotSnackOwner),
            9 => Some(Error::InvalidQuantity),
            10 => Some(Error::InsufficientPayment),
            11 => Some(Error::InsufficientQuantity),
            12 => Some(Error::NotOwner),
            13 => Some(Error::InvalidAmount),
            14 => Some(Error::RefundExceedsSpend),
            15 => Some(Error::NoEarnings),
            16 => Some(Error::InsufficientFunds),
            17 => Some(Error::Overflow),
            _ => None,
        }
    }
}

fn sellers() -> RegistrationLedger {
    RegistrationLedger::new(symbol_short!("seller"))
}

fn buyers() -> RegistrationLedger {
    RegistrationLedger::new(symbol_short!("buyer"))
}

fn load_seller(env: &Env, seller: &Address) -> Result<SellerProfile, Error> {
    sellers()
        .require_registered(env, seller)
        .map_err(|_| Error::NotSeller)?;
    storage::load_seller(env, seller).ok_or(Error::NotSeller)
}

fn load_buyer(env: &Env, buyer: &Address) -> Result<BuyerProfile, Error> {
    buyers()
        .require_registered(env, buyer)
        .map_err(|_| Error::NotBuyer)?;
    storage::load_buyer(env, buyer).ok_or(Error::NotBuyer)
}

/// Load a snack listed by `seller`.
fn load_owned_snack(env: &Env, seller: &Address, id: &String) -> Result<Snack, Error> {
    let snack = storage::load_snack(env, id).ok_or(Error::SnackNotFound)?;
    if snack.seller != *seller {
        return Err(Error::NotSnackOwner);
    }
    Ok(snack)
}

fn token_client(env: &Env) -> token::Client<'_> {
    token::Client::new(env, &storage::get_token(env))
}

/// Pay `amount` out of the held balance to `recipient`.
fn pay_out(env: &Env, recipient: &Address, amount: i128) -> Result<(), Error> {
    let held = storage::get_held(env);
    if held < amount {
        return Err(Error::InsufficientFunds);
    }
    storage::set_held(env, held - amount);
    token_client(env).transfer(&env.current_contract_address(), recipient, &amount);
    Ok(())
}

/// How much of a refund to `buyer` `seller` can still carry: the buyer's
/// net spend with that seller, capped by the seller's unwithdrawn earnings.
fn refundable_from(
    env: &Env,
    buyer: &Address,
    seller: &Address,
) -> Result<(SellerProfile, i128), Error> {
    let profile = storage::load_seller(env, seller).ok_or(Error::NotSeller)?;
    let available = storage::get_spend(env, buyer, seller).min(profile.earnings);
    Ok((profile, available))
}

#[contract]
pub struct HostelSnacks;

#[contractimpl]
impl HostelSnacks {
    pub fn __constructor(env: Env, owner: Address, token: Address) {
        storage::init(&env, &owner, &token);
    }

    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Registration
    // ─────────────────────────────────────────────────────────

    /// Register the caller as a seller with an empty username.
    pub fn register_seller(env: Env, seller: Address) -> Result<(), Error> {
        seller.require_auth();
        sellers()
            .register(&env, &seller)
            .map_err(|_| Error::SellerAlreadyRegistered)?;

        let profile = SellerProfile::new(&env);
        storage::save_seller(&env, &seller, &profile);
        events::emit_seller_registered(&env, seller, profile.username);
        Ok(())
    }

    pub fn register_buyer(env: Env, buyer: Address, username: String) -> Result<(), Error> {
        buyer.require_auth();
        buyers()
            .register(&env, &buyer)
            .map_err(|_| Error::BuyerAlreadyRegistered)?;

        storage::save_buyer(&env, &buyer, &BuyerProfile::new(&env, username.clone()));
        events::emit_buyer_registered(&env, buyer, username);
        Ok(())
    }

    pub fn is_seller(env: Env, address: Address) -> bool {
        sellers().is_registered(&env, &address)
    }

    pub fn is_buyer(env: Env, address: Address) -> bool {
        buyers().is_registered(&env, &address)
    }

    // ─────────────────────────────────────────────────────────
    // Listings
    // ─────────────────────────────────────────────────────────

    pub fn add_snack(
        env: Env,
        seller: Address,
        name: String,
        price: i128,
        quantity: u32,
        id: String,
    ) -> Result<(), Error> {
        seller.require_auth();
        let mut profile = load_seller(&env, &seller)?;

        if id.len() == 0 || name.len() == 0 || price <= 0 {
            return Err(Error::InvalidSnack);
        }
        if storage::has_snack(&env, &id) {
            return Err(Error::SnackAlreadyExists);
        }

        let snack = Snack {
            id: id.clone(),
            name: name.clone(),
            price,
            quantity,
            seller: seller.clone(),
        };
        storage::save_snack(&env, &snack);
        profile.snack_ids.push_back(id.clone());
        storage::save_seller(&env, &seller, &profile);

        events::emit_snack_added(&env, seller, id, name, price, quantity);
        Ok(())
    }

    /// Overwrite price and stock of a snack the seller listed.
    pub fn update_snack(
        env: Env,
        seller: Address,
        id: String,
        price: i128,
        quantity: u32,
    ) -> Result<(), Error> {
        seller.require_auth();
        load_seller(&env, &seller)?;
        let mut snack = load_owned_snack(&env, &seller, &id)?;
        if price <= 0 {
            return Err(Error::InvalidSnack);
        }

        snack.price = price;
        snack.quantity = quantity;
        storage::save_snack(&env, &snack);

        events::emit_snack_updated(&env, id, price, quantity);
        Ok(())
    }

    pub fn delete_snack(env: Env, seller: Address, id: String) -> Result<(), Error> {
        seller.require_auth();
        let mut profile = load_seller(&env, &seller)?;
        load_owned_snack(&env, &seller, &id)?;

        storage::remove_snack(&env, &id);
        profile.remove_snack(&id);
        storage::save_seller(&env, &seller, &profile);

        events::emit_snack_deleted(&env, id);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Trading
    // ─────────────────────────────────────────────────────────

    /// Buy `quantity` units of snack `id`.
    ///
    /// `paid_value` is what the buyer offers; it must cover
    /// `price * quantity`, and exactly that total is transferred from the
    /// buyer to the contract. Returns the total charged.
    pub fn buy_snack(
        env: Env,
        buyer: Address,
        id: String,
        quantity: u32,
        paid_value: i128,
    ) -> Result<i128, Error> {
        buyer.require_auth();
        let mut buyer_profile = load_buyer(&env, &buyer)?;
        let mut snack = storage::load_snack(&env, &id).ok_or(Error::SnackNotFound)?;

        if quantity == 0 {
            return Err(Error::InvalidQuantity);
        }
        let total = snack
            .price
            .checked_mul(quantity as i128)
            .ok_or(Error::Overflow)?;
        if paid_value < total {
            return Err(Error::InsufficientPayment);
        }
        if quantity > snack.quantity {
            return Err(Error::InsufficientQuantity);
        }

        let mut seller_profile =
            storage::load_seller(&env, &snack.seller).ok_or(Error::NotSeller)?;
        seller_profile.earnings = seller_profile
            .earnings
            .checked_add(total)
            .ok_or(Error::Overflow)?;
        seller_profile.total_earnings = seller_profile
            .total_earnings
            .checked_add(total)
            .ok_or(Error::Overflow)?;
        seller_profile.sold_snacks = seller_profile
            .sold_snacks
            .checked_add(1)
            .ok_or(Error::Overflow)?;
        seller_profile.total_snacks_sold = seller_profile
            .total_snacks_sold
            .checked_add(quantity)
            .ok_or(Error::Overflow)?;

        buyer_profile.amount_spent = buyer_profile
            .amount_spent
            .checked_add(total)
            .ok_or(Error::Overflow)?;
        buyer_profile.purchased_snacks = buyer_profile
            .purchased_snacks
            .checked_add(quantity)
            .ok_or(Error::Overflow)?;
        if !buyer_profile.snack_ids.contains(&id) {
            buyer_profile.snack_ids.push_back(id.clone());
        }

        let spend = storage::get_spend(&env, &buyer, &snack.seller)
            .checked_add(total)
            .ok_or(Error::Overflow)?;
        let held = storage::get_held(&env)
            .checked_add(total)
            .ok_or(Error::Overflow)?;

        token_client(&env).transfer(&buyer, &env.current_contract_address(), &total);

        snack.quantity -= quantity;
        storage::save_snack(&env, &snack);
        storage::save_seller(&env, &snack.seller, &seller_profile);
        storage::save_buyer(&env, &buyer, &buyer_profile);
        storage::set_spend(&env, &buyer, &snack.seller, spend);
        let mut payees = storage::get_payees(&env, &buyer);
        if !payees.contains(&snack.seller) {
            payees.push_back(snack.seller.clone());
            storage::save_payees(&env, &buyer, &payees);
        }
        storage::set_held(&env, held);

        events::emit_snack_purchased(&env, buyer, id, quantity, total);
        Ok(total)
    }

    // ─────────────────────────────────────────────────────────
    // Payouts
    // ─────────────────────────────────────────────────────────

    /// Refund `amount` to a buyer. Owner only; bounded by what the buyer
    /// has spent net of earlier refunds.
    ///
    /// The refund is taken from the unwithdrawn earnings of the sellers the
    /// buyer paid, oldest payee first. Fails with `InsufficientFunds` when
    /// those sellers have already withdrawn too much to cover it.
    pub fn refund_buyer(
        env: Env,
        caller: Address,
        buyer: Address,
        amount: i128,
    ) -> Result<(), Error> {
        gate::require(&caller, &storage::get_owner(&env)).map_err(|_| Error::NotOwner)?;
        let mut profile = load_buyer(&env, &buyer)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if amount > profile.amount_spent {
            return Err(Error::RefundExceedsSpend);
        }

        let payees = storage::get_payees(&env, &buyer);
        let mut coverable: i128 = 0;
        for seller in payees.iter() {
            coverable += refundable_from(&env, &buyer, &seller)?.1;
        }
        if coverable < amount {
            return Err(Error::InsufficientFunds);
        }

        let mut remaining = amount;
        for seller in payees.iter() {
            if remaining == 0 {
                break;
            }
            let (mut seller_profile, available) = refundable_from(&env, &buyer, &seller)?;
            let charged = available.min(remaining);
            if charged == 0 {
                continue;
            }
            seller_profile.earnings -= charged;
            storage::save_seller(&env, &seller, &seller_profile);
            let spend = storage::get_spend(&env, &buyer, &seller);
            storage::set_spend(&env, &buyer, &seller, spend - charged);
            remaining -= charged;
        }

        pay_out(&env, &buyer, amount)?;
        profile.amount_spent -= amount;
        storage::save_buyer(&env, &buyer, &profile);

        events::emit_buyer_refunded(&env, buyer, amount);
        Ok(())
    }

    /// Send the seller's unwithdrawn earnings to them. Returns the amount.
    pub fn withdraw_earnings(env: Env, seller: Address) -> Result<i128, Error> {
        seller.require_auth();
        let mut profile = load_seller(&env, &seller)?;

        let amount = profile.earnings;
        if amount == 0 {
            return Err(Error::NoEarnings);
        }

        pay_out(&env, &seller, amount)?;
        profile.earnings = 0;
        storage::save_seller(&env, &seller, &profile);

        events::emit_earnings_withdrawn(&env, seller, amount);
        Ok(amount)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_snack(env: Env, id: String) -> Result<Snack, Error> {
        storage::load_snack(&env, &id).ok_or(Error::SnackNotFound)
    }

    pub fn get_buyer(env: Env, buyer: Address) -> Result<BuyerProfile, Error> {
        load_buyer(&env, &buyer)
    }

    pub fn get_seller(env: Env, seller: Address) -> Result<SellerProfile, Error> {
        load_seller(&env, &seller)
    }

    /// Token amount held for seller earnings and refunds.
    pub fn held_balance(env: Env) -> i128 {
        storage::get_held(&env)
    }
}
