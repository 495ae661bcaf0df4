//! # Campus Access
//!
//! Building blocks shared by every campus contract:
//!
//! | Module       | Provides                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`gate`]     | caller-equals-role checks run before any mutation         |
//! | [`registry`] | namespaced enrol / unenrol ledgers with change events     |
//! | [`members`]  | enumerable sets that never hold the same address twice    |
//! | [`ttl`]      | the storage TTL policy used by all contracts              |
//!
//! This crate defines no contract of its own. Every helper takes the
//! calling contract's `Env`, so the data it writes lives in the storage of
//! whichever contract invoked it.

#![no_std]

pub mod errors;
pub mod gate;
pub mod members;
pub mod registry;
pub mod ttl;


pub use errors::AccessError;
pub use members::MemberSet;
pub use registry::{RegistrationChanged, RegistrationLedger};
