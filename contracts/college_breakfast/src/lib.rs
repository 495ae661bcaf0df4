//! # College Breakfast Contract
//!
//! A warden-run ordering portal. The warden enrols students and opens or
//! closes the portal; enrolled students order food while it is open.
//!
//! | Phase        | Entry Point(s)                                        |
//! |--------------|-------------------------------------------------------|
//! | Construction | `__constructor(owner, warden)`                        |
//! | Portal       | `open_portal`, `close_portal`                         |
//! | Students     | `register_student`, `unregister_student`              |
//! | Ordering     | `order_food`                                          |
//! | Queries      | `portal_status`, `get_last_order`, `get_orders`,      |
//! |              | `get_student_order_count`, `get_total_orders`         |
//!
//! Every entry point checks all of its preconditions before the first
//! storage write, so a rejected call leaves no trace.

#![no_std]

use campus_access::{gate, AccessError, RegistrationLedger};
use soroban_sdk::{
    contract, contracterror, contractimpl, symbol_short, Address, Env, String, Vec,
};

pub mod events;
mod storage;
pub mod types;

#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_utils;

pub use types::{Order, OrderBook, PortalStatus, MAX_ORDERS_PER_CYCLE, ORDER_CAPACITY};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotWarden = 1,
    PortalAlreadyOpen = 2,
    PortalAlreadyClosed = 3,
    AlreadyRegistered = 4,
    NotRegistered = 5,
    EmptyItem = 6,
    PortalNotOpen = 7,
    OrderLimitReached = 8,
    NoOrders = 9,
}

impl Error {
    /// Human-readable rejection reason.
    pub const fn reason(self) -> &'static str {
        match self {
            Error::NotWarden => "Only the warden can call this function",
            Error::PortalAlreadyOpen => "Portal is already open",
            Error::PortalAlreadyClosed => "Portal is already closed",
            Error::AlreadyRegistered => "Student is already registered",
            Error::NotRegistered => "Student is not registered",
            Error::EmptyItem => "Food item cannot be empty",
            Error::PortalNotOpen => "Portal is not open",
            Error::OrderLimitReached => "You have already ordered 4 times today",
            Error::NoOrders => "Student has no orders",
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Error::NotWarden),
            2 => Some(Error::PortalAlreadyOpen),
            3 => Some(Error::PortalAlreadyClosed),
            4 => Some(Error::AlreadyRegistered),
            5 => Some(Error::NotRegistered),
            6 => Some(Error::EmptyItem),
            7 => Some(Error::PortalNotOpen),
            8 => Some(Error::OrderLimitReached),
            9 => Some(Error::NoOrders),
            _ => None,
        }
    }
}

impl From<AccessError> for Error {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Unauthorized => Error::NotWarden,
            AccessError::AlreadyRegistered => Error::AlreadyRegistered,
            AccessError::NotRegistered => Error::NotRegistered,
        }
    }
}

fn students() -> RegistrationLedger {
    RegistrationLedger::new(symbol_short!("student"))
}

#[contract]
pub struct CollegeBreakfast;

#[contractimpl]
impl CollegeBreakfast {
    /// Deploy with `owner` and the `warden` who runs the portal.
    /// The portal starts closed. Roles cannot change afterwards.
    pub fn __constructor(env: Env, owner: Address, warden: Address) {
        storage::init(&env, &owner, &warden);
    }

    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    pub fn warden(env: Env) -> Address {
        storage::get_warden(&env)
    }

    pub fn portal_status(env: Env) -> PortalStatus {
        storage::get_status(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Portal
    // ─────────────────────────────────────────────────────────

    /// Open the portal and start a new ordering cycle. Warden only.
    pub fn open_portal(env: Env, caller: Address) -> Result<(), Error> {
        gate::require(&caller, &storage::get_warden(&env))?;

        if storage::get_status(&env) == PortalStatus::Open {
            return Err(Error::PortalAlreadyOpen);
        }

        storage::set_status(&env, PortalStatus::Open);
        storage::start_cycle(&env);
        events::emit_portal_status_changed(&env, PortalStatus::Open);
        Ok(())
    }

    /// Close the portal. Warden only.
    pub fn close_portal(env: Env, caller: Address) -> Result<(), Error> {
        gate::require(&caller, &storage::get_warden(&env))?;

        if storage::get_status(&env) == PortalStatus::Closed {
            return Err(Error::PortalAlreadyClosed);
        }

        storage::set_status(&env, PortalStatus::Closed);
        events::emit_portal_status_changed(&env, PortalStatus::Closed);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Students
    // ─────────────────────────────────────────────────────────

    pub fn register_student(env: Env, caller: Address, student: Address) -> Result<(), Error> {
        gate::require(&caller, &storage::get_warden(&env))?;
        students().register(&env, &student)?;
        Ok(())
    }

    /// Unenrol a student. Their order history is kept.
    pub fn unregister_student(env: Env, caller: Address, student: Address) -> Result<(), Error> {
        gate::require(&caller, &storage::get_warden(&env))?;
        students().unregister(&env, &student)?;
        Ok(())
    }

    pub fn is_student_registered(env: Env, student: Address) -> bool {
        students().is_registered(&env, &student)
    }

    // ─────────────────────────────────────────────────────────
    // Ordering
    // ─────────────────────────────────────────────────────────

    /// Place an order for `food_item`.
    ///
    /// Checked in order: non-empty item, enrolled student, open portal,
    /// fewer than `MAX_ORDERS_PER_CYCLE` orders this cycle. A full history
    /// ring drops its oldest order to make room.
    pub fn order_food(env: Env, student: Address, food_item: String) -> Result<(), Error> {
        student.require_auth();

        if food_item.len() == 0 {
            return Err(Error::EmptyItem);
        }
        students().require_registered(&env, &student)?;
        if storage::get_status(&env) != PortalStatus::Open {
            return Err(Error::PortalNotOpen);
        }

        let cycle = storage::get_cycle(&env);
        let mut book =
            storage::load_order_book(&env, &student).unwrap_or_else(|| OrderBook::new(&env));
        if book.orders_in_cycle(cycle) >= MAX_ORDERS_PER_CYCLE {
            return Err(Error::OrderLimitReached);
        }

        if book.is_full() {
            Self::cancel_order(&env, &student, &book);
        }

        let order = Order {
            food_item: food_item.clone(),
            order_time: env.ledger().timestamp(),
        };
        book.record(order, cycle);
        storage::save_order_book(&env, &student, &book);
        storage::increment_total_orders(&env);

        events::emit_food_ordered(&env, student, food_item);
        Ok(())
    }

    pub fn get_last_order(env: Env, student: Address) -> Result<Order, Error> {
        storage::load_order_book(&env, &student)
            .and_then(|book| book.last())
            .ok_or(Error::NoOrders)
    }

    /// Live orders of `student`, oldest first.
    pub fn get_orders(env: Env, student: Address) -> Vec<Order> {
        match storage::load_order_book(&env, &student) {
            Some(book) => book.chronological(&env),
            None => Vec::new(&env),
        }
    }

    /// Orders `student` placed in the current cycle.
    pub fn get_student_order_count(env: Env, student: Address) -> Result<u32, Error> {
        students().require_registered(&env, &student)?;
        let cycle = storage::get_cycle(&env);
        Ok(storage::load_order_book(&env, &student)
            .map(|book| book.orders_in_cycle(cycle))
            .unwrap_or(0))
    }

    pub fn get_total_orders(env: Env) -> u64 {
        storage::get_total_orders(&env)
    }
}

impl CollegeBreakfast {
    /// Drop the oldest order of a full ring. The caller overwrites its slot.
    fn cancel_order(env: &Env, student: &Address, book: &OrderBook) {
        if let Some(oldest) = book.oldest() {
            events::emit_food_order_cancelled(env, student.clone(), oldest.food_item);
        }
    }
}
