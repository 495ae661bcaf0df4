extern crate std;

use soroban_sdk::{symbol_short, testutils::Events, vec, IntoVal, String, TryIntoVal};

use crate::events::{
    BuyerRegistered, Payout, SellerRegistered, SnackAdded, SnackPurchased, SnackUpdated,
};
use crate::test_utils::TestContext;

#[test]
fn test_seller_registered_event() {
    let ctx = TestContext::new();
    let seller = ctx.seller();

    let last_event = ctx.env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, ctx.client.address);
    assert_eq!(
        last_event.1,
        vec![
            &ctx.env,
            symbol_short!("sel_reg").into_val(&ctx.env),
            seller.into_val(&ctx.env),
        ]
    );
    let data: SellerRegistered = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        data,
        SellerRegistered {
            seller: seller.clone(),
            username: ctx.text(""),
        }
    );
}

#[test]
fn test_buyer_registered_event() {
    let ctx = TestContext::new();
    let buyer = ctx.buyer("testbuyer");

    let last_event = ctx.env.events().all().last().expect("No events found");
    let data: BuyerRegistered = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        data,
        BuyerRegistered {
            buyer,
            username: ctx.text("testbuyer"),
        }
    );
}

#[test]
fn test_snack_added_event() {
    let ctx = TestContext::new();
    let seller = ctx.seller_with_chips();

    let last_event = ctx.env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![
            &ctx.env,
            symbol_short!("snk_add").into_val(&ctx.env),
            seller.into_val(&ctx.env),
        ]
    );
    let data: SnackAdded = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        data,
        SnackAdded {
            id: ctx.text("chips1"),
            name: ctx.text("Chips"),
            price: 10,
            quantity: 20,
        }
    );
}

#[test]
fn test_snack_updated_and_deleted_events() {
    let ctx = TestContext::new();
    let seller = ctx.seller_with_chips();

    ctx.client.update_snack(&seller, &ctx.text("chips1"), &12, &15);
    let last_event = ctx.env.events().all().last().expect("No events found");
    let data: SnackUpdated = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        data,
        SnackUpdated {
            id: ctx.text("chips1"),
            price: 12,
            quantity: 15,
        }
    );

    ctx.client.delete_snack(&seller, &ctx.text("chips1"));
    let last_event = ctx.env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&ctx.env, symbol_short!("snk_del").into_val(&ctx.env)]
    );
    let id: String = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(id, ctx.text("chips1"));
}

#[test]
fn test_snack_purchased_event() {
    let ctx = TestContext::new();
    ctx.seller_with_chips();
    let buyer = ctx.buyer("testbuyer");
    ctx.client.buy_snack(&buyer, &ctx.text("chips1"), &2, &20);

    let last_event = ctx.env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![
            &ctx.env,
            symbol_short!("purchased").into_val(&ctx.env),
            buyer.into_val(&ctx.env),
        ]
    );
    let data: SnackPurchased = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        data,
        SnackPurchased {
            buyer: buyer.clone(),
            id: ctx.text("chips1"),
            quantity: 2,
            total: 20,
        }
    );
}

#[test]
fn test_buyer_refunded_event() {
    let ctx = TestContext::new();
    ctx.seller_with_chips();
    let buyer = ctx.buyer("testbuyer");
    ctx.client.buy_snack(&buyer, &ctx.text("chips1"), &4, &40);

    ctx.client.refund_buyer(&ctx.owner, &buyer, &10);
    let last_event = ctx.env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![
            &ctx.env,
            symbol_short!("refunded").into_val(&ctx.env),
            buyer.into_val(&ctx.env),
        ]
    );
    let data: Payout = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        data,
        Payout {
            recipient: buyer.clone(),
            amount: 10,
        }
    );
}

#[test]
fn test_earnings_withdrawn_event() {
    let ctx = TestContext::new();
    let seller = ctx.seller_with_chips();
    let buyer = ctx.buyer("testbuyer");
    ctx.client.buy_snack(&buyer, &ctx.text("chips1"), &3, &30);

    ctx.client.withdraw_earnings(&seller);
    let last_event = ctx.env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![
            &ctx.env,
            symbol_short!("withdrawn").into_val(&ctx.env),
            seller.into_val(&ctx.env),
        ]
    );
    let data: Payout = last_event.2.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        data,
        Payout {
            recipient: seller.clone(),
            amount: 30,
        }
    );
}
