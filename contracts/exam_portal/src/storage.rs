//! # Storage
//!
//! ## Instance storage
//!
//! | Key             | Type         | Description                         |
//! |-----------------|--------------|-------------------------------------|
//! | `Owner`         | `Address`    | Deployer                            |
//! | `Teacher`       | `Address`    | Configures and opens the exam       |
//! | `Invigilator`   | `Address`    | Reports cheating                    |
//! | `Token`         | `Address`    | Asset the exam fee is paid in       |
//! | `Exam`          | `ExamRecord` | Exam configuration and state        |
//! | `FeesCollected` | `i128`       | Fees held and not yet withdrawn     |
//!
//! ## Persistent storage
//!
//! | Key                | Type      | Description                        |
//! |--------------------|-----------|------------------------------------|
//! | `Attempt(student)` | `Attempt` | Payment and attempt of the student |
//!
//! The list of registered candidates lives in a shared member set.

use campus_access::ttl::{bump_instance, bump_persistent};
use soroban_sdk::{contracttype, Address, Env, String};

use crate::types::{Attempt, ExamRecord, ExamState};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Teacher,
    Invigilator,
    Token,
    Exam,
    FeesCollected,
    Attempt(Address),
}

pub struct Roles {
    pub owner: Address,
    pub teacher: Address,
    pub invigilator: Address,
}

pub fn init(env: &Env, roles: &Roles, token: &Address) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Owner, &roles.owner);
    instance.set(&DataKey::Teacher, &roles.teacher);
    instance.set(&DataKey::Invigilator, &roles.invigilator);
    instance.set(&DataKey::Token, token);
    instance.set(&DataKey::FeesCollected, &0i128);

    let empty = String::from_str(env, "");
    let exam = ExamRecord {
        exam_id: 0,
        name: empty.clone(),
        description: empty,
        fee: 0,
        duration: 0,
        start_time: 0,
        end_time: 0,
        state: ExamState::Unconfigured,
    };
    instance.set(&DataKey::Exam, &exam);
    bump_instance(env);
}

fn get_address(env: &Env, key: &DataKey) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(key)
        .expect("role not set")
}

pub fn get_roles(env: &Env) -> Roles {
    Roles {
        owner: get_address(env, &DataKey::Owner),
        teacher: get_address(env, &DataKey::Teacher),
        invigilator: get_address(env, &DataKey::Invigilator),
    }
}

pub fn get_token(env: &Env) -> Address {
    get_address(env, &DataKey::Token)
}

pub fn load_exam(env: &Env) -> ExamRecord {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Exam)
        .expect("exam not initialised")
}

pub fn save_exam(env: &Env, exam: &ExamRecord) {
    env.storage().instance().set(&DataKey::Exam, exam);
    bump_instance(env);
}

pub fn get_fees_collected(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::FeesCollected)
        .unwrap_or(0)
}

pub fn set_fees_collected(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::FeesCollected, &amount);
    bump_instance(env);
}

/// Load the student's attempt for `exam_id`; attempts for older exams
/// read as a fresh attempt.
pub fn load_attempt(env: &Env, student: &Address, exam_id: u32) -> Attempt {
    let key = DataKey::Attempt(student.clone());
    match env.storage().persistent().get::<_, Attempt>(&key) {
        Some(attempt) if attempt.exam_id == exam_id => {
            bump_persistent(env, &key);
            attempt
        }
        _ => Attempt::new(exam_id),
    }
}

pub fn save_attempt(env: &Env, student: &Address, attempt: &Attempt) {
    let key = DataKey::Attempt(student.clone());
    env.storage().persistent().set(&key, attempt);
    bump_persistent(env, &key);
}
