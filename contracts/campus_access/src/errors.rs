/// Failures raised by the shared gate and registration helpers.
///
/// Contracts convert these into their own `#[contracterror]` enum with a
/// `From` impl so that `?` works across the crate boundary.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AccessError {
    /// Caller is not the designated role holder.
    Unauthorized,
    /// Principal is already enrolled in the ledger.
    AlreadyRegistered,
    /// Principal is not enrolled in the ledger.
    NotRegistered,
}
