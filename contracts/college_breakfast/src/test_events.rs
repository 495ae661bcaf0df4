extern crate std;

use campus_access::RegistrationChanged;
use soroban_sdk::{symbol_short, testutils::Events, vec, IntoVal, TryIntoVal};

use crate::events::{FoodOrderCancelled, FoodOrdered, PortalStatusChanged};
use crate::{test_utils::TestContext, PortalStatus};

#[test]
fn test_portal_opened_event() {
    let ctx = TestContext::new();
    ctx.client.open_portal(&ctx.warden);

    let last_event = ctx.env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, ctx.client.address);
    assert_eq!(
        last_event.1,
        vec![&ctx.env, symbol_short!("portal").into_val(&ctx.env)]
    );
    let data: PortalStatusChanged = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        data,
        PortalStatusChanged {
            status: PortalStatus::Open
        }
    );
}

#[test]
fn test_portal_closed_event() {
    let ctx = TestContext::new();
    ctx.client.open_portal(&ctx.warden);
    ctx.client.close_portal(&ctx.warden);

    let last_event = ctx.env.events().all().last().expect("No events found");
    let data: PortalStatusChanged = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(data.status, PortalStatus::Closed);
}

#[test]
fn test_registration_changed_events() {
    let ctx = TestContext::new();
    let student = ctx.generate_address();

    ctx.client.register_student(&ctx.warden, &student);
    let last_event = ctx.env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![
            &ctx.env,
            symbol_short!("reg_chg").into_val(&ctx.env),
            symbol_short!("student").into_val(&ctx.env),
        ]
    );
    let data: RegistrationChanged = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        data,
        RegistrationChanged {
            principal: student.clone(),
            registered: true,
        }
    );

    ctx.client.unregister_student(&ctx.warden, &student);
    let last_event = ctx.env.events().all().last().expect("No events found");
    let data: RegistrationChanged = last_event.2.try_into_val(&ctx.env).unwrap();
    assert!(!data.registered);
    assert_eq!(data.principal, student);
}

#[test]
fn test_food_ordered_event() {
    let ctx = TestContext::new();
    let student = ctx.open_with_student();
    ctx.client.order_food(&student, &ctx.item("Pizza"));

    let last_event = ctx.env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![
            &ctx.env,
            symbol_short!("ordered").into_val(&ctx.env),
            student.into_val(&ctx.env),
        ]
    );
    let data: FoodOrdered = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        data,
        FoodOrdered {
            student: student.clone(),
            food_item: ctx.item("Pizza"),
        }
    );
}

#[test]
fn test_eviction_emits_cancelled_before_ordered() {
    let ctx = TestContext::new();
    let student = ctx.open_with_student();
    for item in ["Dosa", "Idli", "Vada", "Puri"] {
        ctx.client.order_food(&student, &ctx.item(item));
    }
    ctx.next_cycle();
    ctx.client.order_food(&student, &ctx.item("Upma"));

    let all_events = ctx.env.events().all();
    let len = all_events.len();
    let cancelled = all_events.get(len - 2).unwrap();
    assert_eq!(
        cancelled.1,
        vec![
            &ctx.env,
            symbol_short!("cancelled").into_val(&ctx.env),
            student.into_val(&ctx.env),
        ]
    );
    let data: FoodOrderCancelled = cancelled.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(data.food_item, ctx.item("Dosa"));

    let ordered: FoodOrdered = all_events
        .get(len - 1)
        .unwrap()
        .2
        .try_into_val(&ctx.env)
        .unwrap();
    assert_eq!(ordered.food_item, ctx.item("Upma"));
}
