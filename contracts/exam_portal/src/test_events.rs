extern crate std;

use soroban_sdk::{symbol_short, testutils::Events, vec, IntoVal, TryIntoVal};

use crate::events::{CheatingReported, ExamConfigured, ExamOpened, ExamStarted, FeePaid};
use crate::test_utils::{TestContext, END, FEE, START};
use crate::ExamState;

#[test]
fn test_exam_configured_event() {
    let ctx = TestContext::new();
    ctx.configure();

    let last_event = ctx.env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, ctx.client.address);
    assert_eq!(
        last_event.1,
        vec![
            &ctx.env,
            symbol_short!("config").into_val(&ctx.env),
            1u32.into_val(&ctx.env),
        ]
    );
    let data: ExamConfigured = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        data,
        ExamConfigured {
            exam_id: 1,
            name: ctx.text("Algebra"),
            fee: FEE,
        }
    );
}

#[test]
fn test_exam_opened_event() {
    let ctx = TestContext::new();
    ctx.configure_and_open();

    let last_event = ctx.env.events().all().last().expect("No events found");
    let data: ExamOpened = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        data,
        ExamOpened {
            exam_id: 1,
            fee: FEE,
            start_time: START,
            end_time: END,
        }
    );
}

#[test]
fn test_enrolled_event_only_for_new_candidates() {
    let ctx = TestContext::new();
    let student = ctx.generate_address();

    ctx.client.register_student(&ctx.teacher, &student);
    let last_event = ctx.env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![
            &ctx.env,
            symbol_short!("enrolled").into_val(&ctx.env),
            student.into_val(&ctx.env),
        ]
    );

    let enrolled_topic = last_event.1.clone();
    let count_enrolled = || {
        ctx.env
            .events()
            .all()
            .iter()
            .filter(|event| event.1 == enrolled_topic)
            .count()
    };
    let after_first = count_enrolled();

    ctx.client.register_student(&ctx.teacher, &student);
    assert!(count_enrolled() <= after_first);
}

#[test]
fn test_fee_paid_event() {
    let ctx = TestContext::new();
    let student = ctx.paid_candidate();

    let all_events = ctx.env.events().all();
    let paid = all_events
        .iter()
        .find(|event| {
            event.1
                == vec![
                    &ctx.env,
                    symbol_short!("paid").into_val(&ctx.env),
                    student.into_val(&ctx.env),
                ]
        })
        .expect("fee paid event missing");
    let data: FeePaid = paid.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        data,
        FeePaid {
            student: student.clone(),
            amount: FEE,
        }
    );
}

#[test]
fn test_exam_started_and_submitted_events() {
    let ctx = TestContext::new();
    let student = ctx.paid_candidate();
    ctx.set_time(START + 5);

    ctx.client.start_exam(&student);
    let last_event = ctx.env.events().all().last().expect("No events found");
    let data: ExamStarted = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        data,
        ExamStarted {
            student: student.clone(),
            started_at: START + 5,
        }
    );

    ctx.client.submit_exam(&student);
    let last_event = ctx.env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![
            &ctx.env,
            symbol_short!("submitted").into_val(&ctx.env),
            student.into_val(&ctx.env),
        ]
    );
}

#[test]
fn test_cheating_event_records_previous_state() {
    let ctx = TestContext::new();
    ctx.configure_and_open();
    ctx.client.caught_cheating(&ctx.invigilator);

    let last_event = ctx.env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&ctx.env, symbol_short!("cheating").into_val(&ctx.env)]
    );
    let data: CheatingReported = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        data,
        CheatingReported {
            reporter: ctx.invigilator.clone(),
            previous_state: ExamState::Open,
        }
    );
}

#[test]
fn test_fees_withdrawn_event() {
    let ctx = TestContext::new();
    ctx.paid_candidate();
    ctx.client.withdraw_fees(&ctx.owner);

    let last_event = ctx.env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![
            &ctx.env,
            symbol_short!("withdrawn").into_val(&ctx.env),
            ctx.owner.into_val(&ctx.env),
        ]
    );
    let amount: i128 = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(amount, FEE);
}
