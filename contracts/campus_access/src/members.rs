//! # Member sets
//!
//! An enumerable set of addresses stored as a presence key per member plus
//! one insertion-ordered list. Membership is tested against the presence
//! key; the list is only appended to when an insert reports a new member.

use soroban_sdk::{Address, Env, Symbol, Vec};

use crate::registry::AccessKey;
use crate::ttl::bump_persistent;

#[derive(Clone, Debug)]
pub struct MemberSet {
    namespace: Symbol,
}

impl MemberSet {
    pub fn new(namespace: Symbol) -> Self {
        Self { namespace }
    }

    fn member_key(&self, address: &Address) -> AccessKey {
        AccessKey::Member(self.namespace.clone(), address.clone())
    }

    fn list_key(&self) -> AccessKey {
        AccessKey::Members(self.namespace.clone())
    }

    pub fn contains(&self, env: &Env, address: &Address) -> bool {
        env.storage().persistent().has(&self.member_key(address))
    }

    /// Insert `address`. Returns `true` only if it was not yet a member.
    pub fn insert(&self, env: &Env, address: &Address) -> bool {
        if self.contains(env, address) {
            bump_persistent(env, &self.member_key(address));
            return false;
        }

        let member_key = self.member_key(address);
        env.storage().persistent().set(&member_key, &true);
        bump_persistent(env, &member_key);

        let list_key = self.list_key();
        let mut members = self.all(env);
        members.push_back(address.clone());
        env.storage().persistent().set(&list_key, &members);
        bump_persistent(env, &list_key);
        true
    }

    /// All members in insertion order.
    pub fn all(&self, env: &Env) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&self.list_key())
            .unwrap_or_else(|| Vec::new(env))
    }

    pub fn len(&self, env: &Env) -> u32 {
        self.all(env).len()
    }

    pub fn is_empty(&self, env: &Env) -> bool {
        self.len(env) == 0
    }
}
