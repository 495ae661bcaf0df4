//! # Exam Portal Contract
//!
//! Runs a single paid exam. The teacher (or owner) configures and opens it,
//! enrols candidates and collects the fee in the payment token; candidates
//! start and submit within the exam window; the invigilator (or teacher)
//! can end the exam at any time by reporting cheating.
//!
//! | Phase        | Entry Point(s)                                          |
//! |--------------|---------------------------------------------------------|
//! | Construction | `__constructor(owner, teacher, invigilator, token)`     |
//! | Setup        | `set_exam_details`, `register_student`, `open_exam`     |
//! | Candidates   | `pay_for_exam`, `start_exam`, `submit_exam`             |
//! | Supervision  | `caught_cheating`                                       |
//! | Treasury     | `withdraw_fees`                                         |
//! | Queries      | `get_exam_details`, `has_paid`, `is_registered`,        |
//! |              | `registered_students`, `fees_collected`                 |

#![no_std]

use campus_access::{gate, MemberSet};
use soroban_sdk::{
    contract, contracterror, contractimpl, symbol_short, token, Address, Env, String, Vec,
};

pub mod events;
mod storage;
pub mod types;

#[cfg(test)]
mod test_candidates;
#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_utils;

pub use types::{Attempt, ExamDetails, ExamRecord, ExamState};

use storage::Roles;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotOwnerOrTeacher = 1,
    NotInvigilatorOrTeacher = 2,
    NotOwner = 3,
    InvalidFee = 4,
    InvalidSchedule = 5,
    ExamNotConfigured = 6,
    ExamAlreadyStarted = 7,
    ExamFinished = 8,
    ExamNotOpen = 9,
    StudentNotRegistered = 10,
    AlreadyPaid = 11,
    InsufficientFee = 12,
    FeeNotPaid = 13,
    ExamNotYetStarted = 14,
    ExamWindowClosed = 15,
    ExamNotInProgress = 16,
    NoFeesCollected = 17,
}

impl Error {
    /// Human-readable rejection reason.
    pub const fn reason(self) -> &'static str {
        match self {
            Error::NotOwnerOrTeacher => "Only the owner or teacher can call this function",
            Error::NotInvigilatorOrTeacher => {
                "Only the invigilator or teacher can call this function"
            }
            Error::NotOwner => "Only the owner can call this function",
            Error::InvalidFee => "Exam fee cannot be negative",
            Error::InvalidSchedule => "Exam end time must be after the start time",
            Error::ExamNotConfigured => "Exam details have not been set",
            Error::ExamAlreadyStarted => "Exam has already started",
            Error::ExamFinished => "Exam is already finished",
            Error::ExamNotOpen => "Exam is not open",
            Error::StudentNotRegistered => "Student is not registered for the exam",
            Error::AlreadyPaid => "Exam fee has already been paid",
            Error::InsufficientFee => "Insufficient exam fee",
            Error::FeeNotPaid => "Exam fee has not been paid",
            Error::ExamNotYetStarted => "Exam has not started yet",
            Error::ExamWindowClosed => "Exam time is over",
            Error::ExamNotInProgress => "Exam is not in progress",
            Error::NoFeesCollected => "No exam fees to withdraw",
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Error::NotOwnerOrTeacher),
            2 => Some(Error::NotInvigilatorOrTeacher),
            3 => Some(Error::NotOwner),
            4 => Some(Error::InvalidFee),
            5 => Some(Error::InvalidSchedule),
            6 => Some(Error::ExamNotConfigured),
            7 => Some(Error::ExamAlreadyStarted),
            8 => Some(Error::ExamFinished),
            9 => Some(Error::ExamNotOpen),
            10 => Some(Error::StudentNotRegistered),
            11 => Some(Error::AlreadyPaid),
            12 => Some(Error::InsufficientFee),
            13 => Some(Error::FeeNotPaid),
            14 => Some(Error::ExamNotYetStarted),
            15 => Some(Error::ExamWindowClosed),
            16 => Some(Error::ExamNotInProgress),
            17 => Some(Error::NoFeesCollected),
            _ => None,
        }
    }
}

fn candidates() -> MemberSet {
    MemberSet::new(symbol_short!("candidate"))
}

fn require_staff(roles: &Roles, caller: &Address) -> Result<(), Error> {
    gate::require_any(caller, &[&roles.owner, &roles.teacher])
        .map_err(|_| Error::NotOwnerOrTeacher)
}

fn require_candidate(env: &Env, student: &Address) -> Result<(), Error> {
    if candidates().contains(env, student) {
        Ok(())
    } else {
        Err(Error::StudentNotRegistered)
    }
}

fn check_schedule(fee: i128, start_time: u64, end_time: u64) -> Result<(), Error> {
    if fee < 0 {
        return Err(Error::InvalidFee);
    }
    if start_time >= end_time {
        return Err(Error::InvalidSchedule);
    }
    Ok(())
}

#[contract]
pub struct ExamPortal;

#[contractimpl]
impl ExamPortal {
    /// Deploy with the three roles and the `token` the exam fee is paid in.
    /// The exam starts `Unconfigured`.
    pub fn __constructor(
        env: Env,
        owner: Address,
        teacher: Address,
        invigilator: Address,
        token: Address,
    ) {
        let roles = Roles {
            owner,
            teacher,
            invigilator,
        };
        storage::init(&env, &roles, &token);
    }

    pub fn owner(env: Env) -> Address {
        storage::get_roles(&env).owner
    }

    pub fn teacher(env: Env) -> Address {
        storage::get_roles(&env).teacher
    }

    pub fn invigilator(env: Env) -> Address {
        storage::get_roles(&env).invigilator
    }

    // ─────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────

    /// Configure (or reconfigure) the exam. Owner or teacher.
    ///
    /// Allowed from any state. Assigns a new exam id, so payments and
    /// attempts made for a previous configuration no longer count.
    #[allow(clippy::too_many_arguments)]
    pub fn set_exam_details(
        env: Env,
        caller: Address,
        name: String,
        description: String,
        fee: i128,
        duration: u64,
        start_time: u64,
        end_time: u64,
    ) -> Result<u32, Error> {
        require_staff(&storage::get_roles(&env), &caller)?;
        check_schedule(fee, start_time, end_time)?;

        let mut exam = storage::load_exam(&env);
        exam.exam_id += 1;
        exam.name = name.clone();
        exam.description = description;
        exam.fee = fee;
        exam.duration = duration;
        exam.start_time = start_time;
        exam.end_time = end_time;
        exam.state = ExamState::Configured;
        storage::save_exam(&env, &exam);

        events::emit_exam_configured(&env, exam.exam_id, name, fee);
        Ok(exam.exam_id)
    }

    /// Enrol `student` as a candidate. Owner or teacher. Enrolling an
    /// existing candidate is a no-op.
    pub fn register_student(env: Env, caller: Address, student: Address) -> Result<(), Error> {
        require_staff(&storage::get_roles(&env), &caller)?;
        if candidates().insert(&env, &student) {
            events::emit_student_registered(&env, student);
        }
        Ok(())
    }

    /// Set the fee and window and open the exam. Owner or teacher.
    pub fn open_exam(
        env: Env,
        caller: Address,
        fee: i128,
        duration: u64,
        start_time: u64,
        end_time: u64,
    ) -> Result<(), Error> {
        require_staff(&storage::get_roles(&env), &caller)?;
        check_schedule(fee, start_time, end_time)?;

        let mut exam = storage::load_exam(&env);
        match exam.state {
            ExamState::Configured | ExamState::Open => {}
            ExamState::Unconfigured => return Err(Error::ExamNotConfigured),
            ExamState::Started => return Err(Error::ExamAlreadyStarted),
            ExamState::Submitted | ExamState::Cheating => return Err(Error::ExamFinished),
        }

        exam.fee = fee;
        exam.duration = duration;
        exam.start_time = start_time;
        exam.end_time = end_time;
        exam.state = ExamState::Open;
        storage::save_exam(&env, &exam);

        events::emit_exam_opened(&env, exam.exam_id, fee, start_time, end_time);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Candidates
    // ─────────────────────────────────────────────────────────

    /// Pay the exam fee. `amount` must cover the fee and is transferred in
    /// full from `student` to the contract.
    pub fn pay_for_exam(env: Env, student: Address, amount: i128) -> Result<(), Error> {
        student.require_auth();

        let exam = storage::load_exam(&env);
        if !exam.state.is_open() {
            return Err(Error::ExamNotOpen);
        }
        require_candidate(&env, &student)?;

        let mut attempt = storage::load_attempt(&env, &student, exam.exam_id);
        if attempt.paid {
            return Err(Error::AlreadyPaid);
        }
        if amount < 0 || amount < exam.fee {
            return Err(Error::InsufficientFee);
        }

        if amount > 0 {
            let token_client = token::Client::new(&env, &storage::get_token(&env));
            token_client.transfer(&student, &env.current_contract_address(), &amount);
        }

        attempt.paid = true;
        attempt.fee_paid = amount;
        storage::save_attempt(&env, &student, &attempt);
        storage::set_fees_collected(&env, storage::get_fees_collected(&env) + amount);

        events::emit_fee_paid(&env, student, amount);
        Ok(())
    }

    /// Start the exam as `student`. Requires a paid candidate inside the
    /// exam window.
    pub fn start_exam(env: Env, student: Address) -> Result<(), Error> {
        student.require_auth();

        let mut exam = storage::load_exam(&env);
        require_candidate(&env, &student)?;
        let mut attempt = storage::load_attempt(&env, &student, exam.exam_id);
        if !attempt.paid {
            return Err(Error::FeeNotPaid);
        }
        if exam.state.is_finished() {
            return Err(Error::ExamFinished);
        }
        if !exam.state.is_open() {
            return Err(Error::ExamNotOpen);
        }
        if attempt.started {
            return Err(Error::ExamAlreadyStarted);
        }

        let now = env.ledger().timestamp();
        if now < exam.start_time {
            return Err(Error::ExamNotYetStarted);
        }
        if now > exam.end_time {
            return Err(Error::ExamWindowClosed);
        }

        attempt.started = true;
        attempt.started_at = now;
        storage::save_attempt(&env, &student, &attempt);
        exam.state = ExamState::Started;
        storage::save_exam(&env, &exam);

        events::emit_exam_started(&env, student, now);
        Ok(())
    }

    /// Submit the exam as a student who started it. Finishes the exam.
    pub fn submit_exam(env: Env, student: Address) -> Result<(), Error> {
        student.require_auth();

        let mut exam = storage::load_exam(&env);
        if exam.state != ExamState::Started {
            return Err(Error::ExamNotInProgress);
        }
        let attempt = storage::load_attempt(&env, &student, exam.exam_id);
        if !attempt.started {
            return Err(Error::ExamNotInProgress);
        }

        exam.state = ExamState::Submitted;
        storage::save_exam(&env, &exam);

        events::emit_exam_submitted(&env, student);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Supervision
    // ─────────────────────────────────────────────────────────

    /// Mark the exam as ended for cheating. Invigilator or teacher, any state.
    pub fn caught_cheating(env: Env, caller: Address) -> Result<(), Error> {
        let roles = storage::get_roles(&env);
        gate::require_any(&caller, &[&roles.invigilator, &roles.teacher])
            .map_err(|_| Error::NotInvigilatorOrTeacher)?;

        let mut exam = storage::load_exam(&env);
        let previous_state = exam.state;
        exam.state = ExamState::Cheating;
        storage::save_exam(&env, &exam);

        events::emit_cheating_reported(&env, caller, previous_state);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Treasury
    // ─────────────────────────────────────────────────────────

    /// Send every collected fee to the owner. Owner only.
    pub fn withdraw_fees(env: Env, caller: Address) -> Result<i128, Error> {
        let owner = storage::get_roles(&env).owner;
        gate::require(&caller, &owner).map_err(|_| Error::NotOwner)?;

        let amount = storage::get_fees_collected(&env);
        if amount == 0 {
            return Err(Error::NoFeesCollected);
        }

        storage::set_fees_collected(&env, 0);
        let token_client = token::Client::new(&env, &storage::get_token(&env));
        token_client.transfer(&env.current_contract_address(), &owner, &amount);

        events::emit_fees_withdrawn(&env, owner, amount);
        Ok(amount)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_exam_details(env: Env) -> ExamDetails {
        let exam = storage::load_exam(&env);
        let roles = storage::get_roles(&env);
        ExamDetails {
            exam_id: exam.exam_id,
            exam_name: exam.name,
            description: exam.description,
            exam_fee: exam.fee,
            exam_duration: exam.duration,
            start_time: exam.start_time,
            end_time: exam.end_time,
            teacher: roles.teacher,
            invigilator: roles.invigilator,
            state: exam.state,
            is_exam_open: exam.state.is_open(),
            is_exam_finished: exam.state.is_finished(),
        }
    }

    /// Whether `student` paid for the current exam.
    pub fn has_paid(env: Env, student: Address) -> bool {
        let exam_id = storage::load_exam(&env).exam_id;
        storage::load_attempt(&env, &student, exam_id).paid
    }

    pub fn is_registered(env: Env, student: Address) -> bool {
        candidates().contains(&env, &student)
    }

    /// Enrolled candidates in enrolment order.
    pub fn registered_students(env: Env) -> Vec<Address> {
        candidates().all(&env)
    }

    pub fn fees_collected(env: Env) -> i128 {
        storage::get_fees_collected(&env)
    }
}
