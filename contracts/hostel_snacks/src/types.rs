use soroban_sdk::{contracttype, Address, Env, String, Vec};

/// A listed snack. Owned by the seller that added it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snack {
    pub id: String,
    pub name: String,
    /// Unit price in the payment token.
    pub price: i128,
    /// Units in stock.
    pub quantity: u32,
    pub seller: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuyerProfile {
    pub username: String,
    /// Paid minus refunded.
    pub amount_spent: i128,
    /// Units bought over all purchases.
    pub purchased_snacks: u32,
    /// Distinct snack ids bought, in first-purchase order.
    pub snack_ids: Vec<String>,
}

impl BuyerProfile {
    pub fn new(env: &Env, username: String) -> Self {
        BuyerProfile {
            username,
            amount_spent: 0,
            purchased_snacks: 0,
            snack_ids: Vec::new(env),
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SellerProfile {
    pub username: String,
    /// Earnings not yet withdrawn.
    pub earnings: i128,
    /// Ids of the snacks currently listed by this seller.
    pub snack_ids: Vec<String>,
    /// Number of sales.
    pub sold_snacks: u32,
    /// Units sold over all sales.
    pub total_snacks_sold: u32,
    /// Lifetime earnings; withdrawals do not reduce it.
    pub total_earnings: i128,
}

impl SellerProfile {
    pub fn new(env: &Env) -> Self {
        SellerProfile {
            username: String::from_str(env, ""),
            earnings: 0,
            snack_ids: Vec::new(env),
            sold_snacks: 0,
            total_snacks_sold: 0,
            total_earnings: 0,
        }
    }

    pub fn remove_snack(&mut self, id: &String) {
        if let Some(index) = self.snack_ids.first_index_of(id) {
            self.snack_ids.remove(index);
        }
    }
}
