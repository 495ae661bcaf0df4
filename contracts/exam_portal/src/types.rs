//! # Types
//!
//! ## Exam lifecycle
//!
//! ```text
//! Unconfigured ──set_exam_details──► Configured ──open_exam──► Open
//!                                        ▲                      │ start_exam
//!                                        │ set_exam_details     ▼
//!                                        └──────────────────── Started ──submit_exam──► Submitted
//!
//! any state ──caught_cheating──► Cheating
//! ```
//!
//! `Submitted` and `Cheating` are the finished states. `set_exam_details`
//! may reconfigure from any state and bumps the exam id, which also
//! invalidates every student's previous payment and attempt.

use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ExamState {
    Unconfigured = 0,
    Configured = 1,
    Open = 2,
    Started = 3,
    Submitted = 4,
    Cheating = 5,
}

impl ExamState {
    pub fn is_finished(self) -> bool {
        matches!(self, ExamState::Submitted | ExamState::Cheating)
    }

    /// States in which students may pay and start.
    pub fn is_open(self) -> bool {
        matches!(self, ExamState::Open | ExamState::Started)
    }
}

/// Stored exam configuration and lifecycle state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExamRecord {
    /// Incremented by every `set_exam_details`.
    pub exam_id: u32,
    pub name: String,
    pub description: String,
    pub fee: i128,
    /// Allotted time in seconds.
    pub duration: u64,
    pub start_time: u64,
    pub end_time: u64,
    pub state: ExamState,
}

/// One student's payment and attempt for a given exam id.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attempt {
    pub exam_id: u32,
    pub fee_paid: i128,
    pub paid: bool,
    pub started: bool,
    pub started_at: u64,
}

impl Attempt {
    pub fn new(exam_id: u32) -> Self {
        Attempt {
            exam_id,
            fee_paid: 0,
            paid: false,
            started: false,
            started_at: 0,
        }
    }
}

/// Read-only view returned by `get_exam_details`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExamDetails {
    pub exam_id: u32,
    pub exam_name: String,
    pub description: String,
    pub exam_fee: i128,
    pub exam_duration: u64,
    pub start_time: u64,
    pub end_time: u64,
    pub teacher: Address,
    pub invigilator: Address,
    pub state: ExamState,
    pub is_exam_open: bool,
    pub is_exam_finished: bool,
}
