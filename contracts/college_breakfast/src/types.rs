//! # Types
//!
//! ## Portal status
//!
//! ```text
//! Closed ──open_portal──► Open
//!   ▲                      │
//!   └─────close_portal─────┘
//! ```
//!
//! Every `open_portal` starts a new ordering *cycle*. A student may place at
//! most [`MAX_ORDERS_PER_CYCLE`] orders per cycle.
//!
//! ## Order book
//!
//! Each student's history is a fixed-capacity ring of [`ORDER_CAPACITY`]
//! slots. The slot for the next order is `placed % ORDER_CAPACITY`, so once
//! the ring is full the slot being written always holds the oldest order.

use soroban_sdk::{contracttype, Env, String, Vec};

/// Slots in a student's order history.
pub const ORDER_CAPACITY: u32 = 4;

/// Orders a student may place between two `open_portal` calls.
pub const MAX_ORDERS_PER_CYCLE: u32 = 4;

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PortalStatus {
    Closed = 0,
    Open = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Order {
    pub food_item: String,
    /// Ledger timestamp at which the order was placed.
    pub order_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderBook {
    /// Ring storage, at most `ORDER_CAPACITY` entries.
    pub slots: Vec<Order>,
    /// Orders ever written into this book.
    pub placed: u64,
    /// Cycle in which `cycle_orders` was counted.
    pub cycle: u32,
    pub cycle_orders: u32,
}

impl OrderBook {
    pub fn new(env: &Env) -> Self {
        OrderBook {
            slots: Vec::new(env),
            placed: 0,
            cycle: 0,
            cycle_orders: 0,
        }
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= ORDER_CAPACITY
    }

    fn next_slot(&self) -> u32 {
        (self.placed % ORDER_CAPACITY as u64) as u32
    }

    /// Orders placed during `cycle`; stale counts read as zero.
    pub fn orders_in_cycle(&self, cycle: u32) -> u32 {
        if self.cycle == cycle {
            self.cycle_orders
        } else {
            0
        }
    }

    /// The order the next write will overwrite, if the ring is full.
    pub fn oldest(&self) -> Option<Order> {
        if self.is_full() {
            self.slots.get(self.next_slot())
        } else {
            None
        }
    }

    pub fn last(&self) -> Option<Order> {
        if self.placed == 0 {
            return None;
        }
        let slot = ((self.placed - 1) % ORDER_CAPACITY as u64) as u32;
        self.slots.get(slot)
    }

    /// Write `order` into the next slot and count it against `cycle`.
    pub fn record(&mut self, order: Order, cycle: u32) {
        if self.is_full() {
            self.slots.set(self.next_slot(), order);
        } else {
            self.slots.push_back(order);
        }
        self.placed += 1;

        if self.cycle != cycle {
            self.cycle = cycle;
            self.cycle_orders = 0;
        }
        self.cycle_orders += 1;
    }

    /// Live orders, oldest first.
    pub fn chronological(&self, env: &Env) -> Vec<Order> {
        if !self.is_full() {
            return self.slots.clone();
        }
        let start = self.next_slot();
        let mut ordered = Vec::new(env);
        for i in 0..ORDER_CAPACITY {
            if let Some(order) = self.slots.get((start + i) % ORDER_CAPACITY) {
                ordered.push_back(order);
            }
        }
        ordered
    }
}
