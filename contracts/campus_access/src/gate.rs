//! # Gate
//!
//! Roles are plain addresses fixed at construction. A gated entry point
//! authenticates the caller and then compares it against the role holder(s);
//! nothing is written before both checks pass.

use soroban_sdk::Address;

use crate::errors::AccessError;

/// Require that `caller` signed the invocation and is `designated`.
pub fn require(caller: &Address, designated: &Address) -> Result<(), AccessError> {
    caller.require_auth();
    if caller != designated {
        return Err(AccessError::Unauthorized);
    }
    Ok(())
}

/// Require that `caller` signed the invocation and is one of `designated`.
pub fn require_any(caller: &Address, designated: &[&Address]) -> Result<(), AccessError> {
    caller.require_auth();
    if designated.iter().any(|role| *role == caller) {
        Ok(())
    } else {
        Err(AccessError::Unauthorized)
    }
}

/// Require that `caller` signed the invocation and is *not* `excluded`.
///
/// Used where a privileged address must stay out of a participant flow,
/// e.g. a wallet owner depositing into their own wallet.
pub fn require_not(caller: &Address, excluded: &Address) -> Result<(), AccessError> {
    caller.require_auth();
    if caller == excluded {
        return Err(AccessError::Unauthorized);
    }
    Ok(())
}
