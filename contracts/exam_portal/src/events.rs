use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

use crate::types::ExamState;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExamConfigured {
    pub exam_id: u32,
    pub name: String,
    pub fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExamOpened {
    pub exam_id: u32,
    pub fee: i128,
    pub start_time: u64,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeePaid {
    pub student: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExamStarted {
    pub student: Address,
    pub started_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheatingReported {
    pub reporter: Address,
    pub previous_state: ExamState,
}

pub fn emit_exam_configured(env: &Env, exam_id: u32, name: String, fee: i128) {
    let topics = (symbol_short!("config"), exam_id);
    env.events()
        .publish(topics, ExamConfigured { exam_id, name, fee });
}

pub fn emit_student_registered(env: &Env, student: Address) {
    env.events()
        .publish((symbol_short!("enrolled"), student), ());
}

pub fn emit_exam_opened(env: &Env, exam_id: u32, fee: i128, start_time: u64, end_time: u64) {
    let topics = (symbol_short!("opened"), exam_id);
    let data = ExamOpened {
        exam_id,
        fee,
        start_time,
        end_time,
    };
    env.events().publish(topics, data);
}

pub fn emit_fee_paid(env: &Env, student: Address, amount: i128) {
    let topics = (symbol_short!("paid"), student.clone());
    env.events().publish(topics, FeePaid { student, amount });
}

pub fn emit_exam_started(env: &Env, student: Address, started_at: u64) {
    let topics = (symbol_short!("started"), student.clone());
    env.events()
        .publish(topics, ExamStarted { student, started_at });
}

pub fn emit_exam_submitted(env: &Env, student: Address) {
    env.events()
        .publish((symbol_short!("submitted"), student), ());
}

pub fn emit_cheating_reported(env: &Env, reporter: Address, previous_state: ExamState) {
    let topics = (symbol_short!("cheating"),);
    let data = CheatingReported {
        reporter,
        previous_state,
    };
    env.events().publish(topics, data);
}

pub fn emit_fees_withdrawn(env: &Env, owner: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("withdrawn"), owner), amount);
}
