use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SellerRegistered {
    pub seller: Address,
    pub username: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuyerRegistered {
    pub buyer: Address,
    pub username: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SnackAdded {
    pub id: String,
    pub name: String,
    pub price: i128,
    pub quantity: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SnackUpdated {
    pub id: String,
    pub price: i128,
    pub quantity: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SnackPurchased {
    pub buyer: Address,
    pub id: String,
    pub quantity: u32,
    pub total: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payout {
    pub recipient: Address,
    pub amount: i128,
}

pub fn emit_seller_registered(env: &Env, seller: Address, username: String) {
    let topics = (symbol_short!("sel_reg"), seller.clone());
    env.events()
        .publish(topics, SellerRegistered { seller, username });
}

pub fn emit_buyer_registered(env: &Env, buyer: Address, username: String) {
    let topics = (symbol_short!("buy_reg"), buyer.clone());
    env.events()
        .publish(topics, BuyerRegistered { buyer, username });
}

pub fn emit_snack_added(
    env: &Env,
    seller: Address,
    id: String,
    name: String,
    price: i128,
    quantity: u32,
) {
    let topics = (symbol_short!("snk_add"), seller);
    let data = SnackAdded {
        id,
        name,
        price,
        quantity,
    };
    env.events().publish(topics, data);
}

pub fn emit_snack_updated(env: &Env, id: String, price: i128, quantity: u32) {
    let topics = (symbol_short!("snk_upd"),);
    env.events()
        .publish(topics, SnackUpdated { id, price, quantity });
}

pub fn emit_snack_deleted(env: &Env, id: String) {
    env.events().publish((symbol_short!("snk_del"),), id);
}

pub fn emit_snack_purchased(env: &Env, buyer: Address, id: String, quantity: u32, total: i128) {
    let topics = (symbol_short!("purchased"), buyer.clone());
    let data = SnackPurchased {
        buyer,
        id,
        quantity,
        total,
    };
    env.events().publish(topics, data);
}

pub fn emit_buyer_refunded(env: &Env, buyer: Address, amount: i128) {
    let topics = (symbol_short!("refunded"), buyer.clone());
    env.events().publish(
        topics,
        Payout {
            recipient: buyer,
            amount,
        },
    );
}

pub fn emit_earnings_withdrawn(env: &Env, seller: Address, amount: i128) {
    let topics = (symbol_short!("withdrawn"), seller.clone());
    env.events().publish(
        topics,
        Payout {
            recipient: seller,
            amount,
        },
    );
}
