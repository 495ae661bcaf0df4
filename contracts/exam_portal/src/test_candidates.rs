extern crate std;

use crate::test_utils::{TestContext, END, FEE, START};
use crate::{Error, ExamState};

#[test]
fn test_pay_for_exam_transfers_amount() {
    let ctx = TestContext::new();
    ctx.configure_and_open();
    let student = ctx.funded_candidate(1_000);

    ctx.client.pay_for_exam(&student, &150);

    assert!(ctx.client.has_paid(&student));
    assert_eq!(ctx.token.balance(&student), 850);
    assert_eq!(ctx.token.balance(&ctx.client.address), 150);
    assert_eq!(ctx.client.fees_collected(), 150);
    // Paying does not change the exam state.
    assert_eq!(ctx.client.get_exam_details().state, ExamState::Open);
}

#[test]
fn test_pay_before_open_fails() {
    let ctx = TestContext::new();
    let student = ctx.funded_candidate(1_000);

    assert_eq!(
        ctx.client.try_pay_for_exam(&student, &FEE),
        Err(Ok(Error::ExamNotOpen))
    );
    ctx.configure();
    assert_eq!(
        ctx.client.try_pay_for_exam(&student, &FEE),
        Err(Ok(Error::ExamNotOpen))
    );
}

#[test]
fn test_pay_requires_registration() {
    let ctx = TestContext::new();
    ctx.configure_and_open();
    let outsider = ctx.generate_address();
    ctx.sac.mint(&outsider, &1_000);

    assert_eq!(
        ctx.client.try_pay_for_exam(&outsider, &FEE),
        Err(Ok(Error::StudentNotRegistered))
    );
    assert_eq!(ctx.token.balance(&outsider), 1_000);
}

#[test]
fn test_pay_twice_fails() {
    let ctx = TestContext::new();
    let student = ctx.paid_candidate();
    assert_eq!(
        ctx.client.try_pay_for_exam(&student, &FEE),
        Err(Ok(Error::AlreadyPaid))
    );
    assert_eq!(ctx.client.fees_collected(), FEE);
}

#[test]
fn test_pay_below_fee_fails() {
    let ctx = TestContext::new();
    ctx.configure_and_open();
    let student = ctx.funded_candidate(1_000);

    assert_eq!(
        ctx.client.try_pay_for_exam(&student, &(FEE - 1)),
        Err(Ok(Error::InsufficientFee))
    );
    assert!(!ctx.client.has_paid(&student));
    assert_eq!(ctx.token.balance(&student), 1_000);
}

#[test]
fn test_start_exam_within_window() {
    let ctx = TestContext::new();
    let student = ctx.paid_candidate();

    ctx.set_time(START);
    ctx.client.start_exam(&student);

    let details = ctx.client.get_exam_details();
    assert_eq!(details.state, ExamState::Started);
    assert!(details.is_exam_open);
}

#[test]
fn test_start_exam_before_window_fails() {
    let ctx = TestContext::new();
    let student = ctx.paid_candidate();

    ctx.set_time(START - 1);
    assert_eq!(
        ctx.client.try_start_exam(&student),
        Err(Ok(Error::ExamNotYetStarted))
    );
}

#[test]
fn test_start_exam_after_window_fails() {
    let ctx = TestContext::new();
    let student = ctx.paid_candidate();

    // The end time itself is still inside the window.
    ctx.set_time(END + 1);
    assert_eq!(
        ctx.client.try_start_exam(&student),
        Err(Ok(Error::ExamWindowClosed))
    );

    ctx.set_time(END);
    ctx.client.start_exam(&student);
}

#[test]
fn test_start_exam_without_payment_fails() {
    let ctx = TestContext::new();
    ctx.configure_and_open();
    let student = ctx.funded_candidate(1_000);
    ctx.set_time(START);

    assert_eq!(
        ctx.client.try_start_exam(&student),
        Err(Ok(Error::FeeNotPaid))
    );
}

#[test]
fn test_start_exam_unregistered_fails() {
    let ctx = TestContext::new();
    ctx.configure_and_open();
    ctx.set_time(START);
    assert_eq!(
        ctx.client.try_start_exam(&ctx.generate_address()),
        Err(Ok(Error::StudentNotRegistered))
    );
}

#[test]
fn test_second_student_can_join_started_exam() {
    let ctx = TestContext::new();
    let first = ctx.paid_candidate();
    let second = ctx.funded_candidate(1_000);
    ctx.client.pay_for_exam(&second, &FEE);

    ctx.set_time(START);
    ctx.client.start_exam(&first);
    ctx.client.start_exam(&second);

    assert_eq!(
        ctx.client.try_start_exam(&first),
        Err(Ok(Error::ExamAlreadyStarted))
    );
    assert_eq!(ctx.client.fees_collected(), 2 * FEE);
}

#[test]
fn test_submit_exam_finishes() {
    let ctx = TestContext::new();
    let student = ctx.paid_candidate();
    ctx.set_time(START);
    ctx.client.start_exam(&student);

    ctx.client.submit_exam(&student);

    let details = ctx.client.get_exam_details();
    assert_eq!(details.state, ExamState::Submitted);
    assert!(details.is_exam_finished);
    assert!(!details.is_exam_open);

    assert_eq!(
        ctx.client.try_start_exam(&student),
        Err(Ok(Error::ExamFinished))
    );
}

#[test]
fn test_submit_without_start_fails() {
    let ctx = TestContext::new();
    let student = ctx.paid_candidate();

    assert_eq!(
        ctx.client.try_submit_exam(&student),
        Err(Ok(Error::ExamNotInProgress))
    );

    // Someone else started, but this student did not.
    let other = ctx.funded_candidate(1_000);
    ctx.client.pay_for_exam(&other, &FEE);
    ctx.set_time(START);
    ctx.client.start_exam(&other);
    assert_eq!(
        ctx.client.try_submit_exam(&student),
        Err(Ok(Error::ExamNotInProgress))
    );
}

#[test]
fn test_caught_cheating_from_any_state() {
    let ctx = TestContext::new();
    ctx.client.caught_cheating(&ctx.invigilator);
    assert_eq!(ctx.client.get_exam_details().state, ExamState::Cheating);

    let student = ctx.paid_candidate();
    ctx.set_time(START);
    ctx.client.start_exam(&student);
    ctx.client.caught_cheating(&ctx.teacher);

    let details = ctx.client.get_exam_details();
    assert_eq!(details.state, ExamState::Cheating);
    assert!(details.is_exam_finished);

    assert_eq!(
        ctx.client.try_submit_exam(&student),
        Err(Ok(Error::ExamNotInProgress))
    );
}

#[test]
fn test_caught_cheating_rejects_owner() {
    let ctx = TestContext::new();
    assert_eq!(
        ctx.client.try_caught_cheating(&ctx.owner),
        Err(Ok(Error::NotInvigilatorOrTeacher))
    );
    assert_eq!(ctx.client.get_exam_details().state, ExamState::Unconfigured);
}

#[test]
fn test_pay_after_cheating_fails() {
    let ctx = TestContext::new();
    ctx.configure_and_open();
    let student = ctx.funded_candidate(1_000);
    ctx.client.caught_cheating(&ctx.invigilator);

    assert_eq!(
        ctx.client.try_pay_for_exam(&student, &FEE),
        Err(Ok(Error::ExamNotOpen))
    );
}

#[test]
fn test_withdraw_fees_moves_balance_to_owner() {
    let ctx = TestContext::new();
    ctx.paid_candidate();

    let withdrawn = ctx.client.withdraw_fees(&ctx.owner);

    assert_eq!(withdrawn, FEE);
    assert_eq!(ctx.token.balance(&ctx.owner), FEE);
    assert_eq!(ctx.token.balance(&ctx.client.address), 0);
    assert_eq!(ctx.client.fees_collected(), 0);
    assert_eq!(
        ctx.client.try_withdraw_fees(&ctx.owner),
        Err(Ok(Error::NoFeesCollected))
    );
}

#[test]
fn test_withdraw_fees_owner_only() {
    let ctx = TestContext::new();
    ctx.paid_candidate();
    assert_eq!(
        ctx.client.try_withdraw_fees(&ctx.teacher),
        Err(Ok(Error::NotOwner))
    );
    assert_eq!(ctx.client.fees_collected(), FEE);
}

#[test]
fn test_free_exam_needs_no_transfer() {
    let ctx = TestContext::new();
    ctx.configure();
    ctx.client.open_exam(&ctx.teacher, &0, &60, &START, &END);
    let student = ctx.generate_address();
    ctx.client.register_student(&ctx.teacher, &student);

    ctx.client.pay_for_exam(&student, &0);

    assert!(ctx.client.has_paid(&student));
    assert_eq!(ctx.client.fees_collected(), 0);
}
