//! # Registration ledger
//!
//! A namespaced `address -> enrolled` map in persistent storage. One contract
//! may hold several ledgers side by side (buyers and sellers, for instance);
//! the namespace symbol keeps their keys apart and is also the second event
//! topic, so observers can tell the ledgers apart.
//!
//! Events (`reg_chg`, namespace) carry a [`RegistrationChanged`] payload.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::errors::AccessError;
use crate::ttl::bump_persistent;

/// Storage keys owned by this crate.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AccessKey {
    /// Enrolment flag of a principal in a ledger (Persistent).
    Enrolled(Symbol, Address),
    /// Presence flag of an address in a member set (Persistent).
    Member(Symbol, Address),
    /// Insertion-ordered addresses of a member set (Persistent).
    Members(Symbol),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrationChanged {
    pub principal: Address,
    pub registered: bool,
}

#[derive(Clone, Debug)]
pub struct RegistrationLedger {
    namespace: Symbol,
}

impl RegistrationLedger {
    pub fn new(namespace: Symbol) -> Self {
        Self { namespace }
    }

    pub fn namespace(&self) -> &Symbol {
        &self.namespace
    }

    fn key(&self, principal: &Address) -> AccessKey {
        AccessKey::Enrolled(self.namespace.clone(), principal.clone())
    }

    pub fn is_registered(&self, env: &Env, principal: &Address) -> bool {
        let key = self.key(principal);
        let enrolled = env.storage().persistent().has(&key);
        if enrolled {
            bump_persistent(env, &key);
        }
        enrolled
    }

    /// Fail with `NotRegistered` unless `principal` is enrolled.
    pub fn require_registered(&self, env: &Env, principal: &Address) -> Result<(), AccessError> {
        if self.is_registered(env, principal) {
            Ok(())
        } else {
            Err(AccessError::NotRegistered)
        }
    }

    /// Enrol `principal`. Fails with `AlreadyRegistered` on repeat.
    pub fn register(&self, env: &Env, principal: &Address) -> Result<(), AccessError> {
        if self.is_registered(env, principal) {
            return Err(AccessError::AlreadyRegistered);
        }
        let key = self.key(principal);
        env.storage().persistent().set(&key, &true);
        bump_persistent(env, &key);
        self.publish(env, principal, true);
        Ok(())
    }

    /// Remove `principal`. Fails with `NotRegistered` if absent.
    pub fn unregister(&self, env: &Env, principal: &Address) -> Result<(), AccessError> {
        if !self.is_registered(env, principal) {
            return Err(AccessError::NotRegistered);
        }
        env.storage().persistent().remove(&self.key(principal));
        self.publish(env, principal, false);
        Ok(())
    }

    fn publish(&self, env: &Env, principal: &Address, registered: bool) {
        let topics = (symbol_short!("reg_chg"), self.namespace.clone());
        let data = RegistrationChanged {
            principal: principal.clone(),
            registered,
        };
        env.events().publish(topics, data);
    }
}
