//! The deployable campus contracts and their error tables.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContractKind {
    CollegeBreakfast,
    ExamPortal,
    HostelSnacks,
    DepositWallet,
}

impl ContractKind {
    /// Deployment order.
    pub const ALL: [ContractKind; 4] = [
        ContractKind::ExamPortal,
        ContractKind::HostelSnacks,
        ContractKind::CollegeBreakfast,
        ContractKind::DepositWallet,
    ];

    /// Key under which the contract is stored in the deployment record.
    pub fn name(self) -> &'static str {
        match self {
            ContractKind::CollegeBreakfast => "CollegeBreakfast",
            ContractKind::ExamPortal => "ExamPortal",
            ContractKind::HostelSnacks => "HostelSnacks",
            ContractKind::DepositWallet => "DepositWallet",
        }
    }

    /// Reason text for a contract error code, if the contract defines it.
    pub fn error_reason(self, code: u32) -> Option<&'static str> {
        match self {
            ContractKind::CollegeBreakfast => {
                college_breakfast::Error::from_code(code).map(college_breakfast::Error::reason)
            }
            ContractKind::ExamPortal => {
                exam_portal::Error::from_code(code).map(exam_portal::Error::reason)
            }
            ContractKind::HostelSnacks => {
                hostel_snacks::Error::from_code(code).map(hostel_snacks::Error::reason)
            }
            ContractKind::DepositWallet => {
                deposit_wallet::Error::from_code(code).map(deposit_wallet::Error::reason)
            }
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
