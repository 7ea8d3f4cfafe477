extern crate std;

use soroban_sdk::{symbol_short, testutils::Events, vec, IntoVal, TryIntoVal};

use crate::events::{Claimed, Invested, SaleInitialized};
use crate::test_helpers::*;

#[test]
fn test_sale_initialized_event() {
    let sale = setup();

    let all_events = sale.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("init"), beneficiary)
    assert_eq!(last_event.0, sale.client.address);
    let expected_topics = vec![
        &sale.env,
        symbol_short!("init").into_val(&sale.env),
        sale.beneficiary.into_val(&sale.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: SaleInitialized = last_event.2.try_into_val(&sale.env).unwrap();
    assert_eq!(
        event_data,
        SaleInitialized {
            beneficiary: sale.beneficiary.clone(),
            accepted_token: sale.payment.address.clone(),
            reward_token: sale.scm.address.clone(),
            sale_start: 0,
            unlock_at: LOCK_DURATION,
        }
    );
}

#[test]
fn test_invested_event() {
    let sale = setup();
    let investor = sale.investor();

    sale.invest(&investor, 300 * UNIT);
    sale.invest(&investor, 200 * UNIT);

    let all_events = sale.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("invested"), investor)
    assert_eq!(last_event.0, sale.client.address);
    let expected_topics = vec![
        &sale.env,
        symbol_short!("invested").into_val(&sale.env),
        investor.into_val(&sale.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Invested = last_event.2.try_into_val(&sale.env).unwrap();
    assert_eq!(
        event_data,
        Invested {
            investor: investor.clone(),
            amount: 200 * UNIT,
            total_raised: 500 * UNIT,
        }
    );
}

#[test]
fn test_claimed_event() {
    let sale = setup();
    let investor = sale.investor();

    sale.invest(&investor, 7 * UNIT);
    sale.advance_time(LOCK_DURATION);
    sale.client.claim(&investor);

    let all_events = sale.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("claimed"), investor)
    assert_eq!(last_event.0, sale.client.address);
    let expected_topics = vec![
        &sale.env,
        symbol_short!("claimed").into_val(&sale.env),
        investor.into_val(&sale.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Claimed = last_event.2.try_into_val(&sale.env).unwrap();
    assert_eq!(
        event_data,
        Claimed {
            investor: investor.clone(),
            amount: 70 * UNIT,
        }
    );
}

#[test]
fn test_empty_claim_still_emits_event() {
    let sale = setup();
    let investor = sale.investor();
    sale.advance_time(LOCK_DURATION);

    sale.client.claim(&investor);

    let all_events = sale.env.events().all();
    let last_event = all_events.last().expect("No events found");
    let event_data: Claimed = last_event.2.try_into_val(&sale.env).unwrap();
    assert_eq!(event_data.amount, 0);
}
