use cosmwasm_std::Uint128;
use fee_sweeper_common::asset::Asset;

use crate::msg::{Continuation, ExecuteMsg};
use crate::tests::helper::{route, routes, swap_results, MockApp, SwapResult, TARGET};
use crate::{FailurePolicy, RouteMap, SlippageBase};

const AAVE_AMOUNT: u128 = 10_00000000;
const AAVE_QUOTE: u128 = 796065804;

fn setup() -> MockApp {
    let mut app = MockApp::new();
    app.set_thresholds(500, 500);
    app.set_rate("AAVE", "LINK", 2, 1);
    app.set_rate("LINK", TARGET, AAVE_QUOTE, 2 * AAVE_AMOUNT);
    app.fund_amm(TARGET, 1_000_000_000_000);
    app
}

fn aave_routes(numerator: u128, denominator: u128) -> RouteMap {
    routes(vec![(
        "AAVE",
        route(&["AAVE", "LINK", TARGET], numerator, denominator, 5),
    )])
}

fn set_policy(
    app: &mut MockApp,
    failure_policy: Option<FailurePolicy>,
    slippage_base: Option<SlippageBase>,
) {
    let owner = app.owner.clone();
    app.execute_sweeper(
        &owner,
        &ExecuteMsg::SetConversionPolicy {
            failure_policy,
            slippage_base,
        },
    )
    .unwrap();
}

#[test]
fn test_slippage_failure_retains_and_piggybacks() {
    let mut app = setup();
    let (receiver, sweeper) = (app.receiver.clone(), app.sweeper.clone());
    app.fund_owner("AAVE", AAVE_AMOUNT);

    // expecting 1 USDT unit per AAVE unit, the quote is about 20% short
    let res = app
        .sweep_tokens(vec![Asset::new("AAVE", AAVE_AMOUNT)], aave_routes(1, 1))
        .unwrap();
    assert_eq!(
        swap_results(&res),
        vec![SwapResult::new("AAVE", AAVE_AMOUNT, false, false)]
    );
    assert_eq!(app.balance(&sweeper, "AAVE"), AAVE_AMOUNT);
    assert_eq!(app.balance(&receiver, TARGET), 0);

    // the next batch converts the leftover along with the new deposit
    app.fund_owner("AAVE", AAVE_AMOUNT);
    let res = app
        .sweep_tokens(
            vec![Asset::new("AAVE", AAVE_AMOUNT)],
            aave_routes(AAVE_QUOTE, AAVE_AMOUNT),
        )
        .unwrap();
    assert_eq!(
        swap_results(&res),
        vec![SwapResult::new("AAVE", 2 * AAVE_AMOUNT, true, false)]
    );
    assert_eq!(app.balance(&sweeper, "AAVE"), 0);
    assert_eq!(app.balance(&receiver, TARGET), 2 * AAVE_QUOTE);
}

#[test]
fn test_slippage_failure_refunds_depositor() {
    let mut app = setup();
    let (owner, sweeper) = (app.owner.clone(), app.sweeper.clone());
    set_policy(&mut app, Some(FailurePolicy::Refund), None);
    app.fund_owner("AAVE", AAVE_AMOUNT);

    let res = app
        .sweep_tokens(vec![Asset::new("AAVE", AAVE_AMOUNT)], aave_routes(1, 1))
        .unwrap();

    assert_eq!(
        swap_results(&res),
        vec![SwapResult::new("AAVE", AAVE_AMOUNT, false, false)]
    );
    assert_eq!(app.balance(&owner, "AAVE"), AAVE_AMOUNT);
    assert_eq!(app.balance(&sweeper, "AAVE"), 0);
}

#[test]
fn test_target_threshold_not_reached() {
    let mut app = setup();
    let (owner, receiver, sweeper) = (app.owner.clone(), app.receiver.clone(), app.sweeper.clone());
    app.execute_sweeper(
        &owner,
        &ExecuteMsg::SetTargetThreshold {
            threshold: Uint128::new(AAVE_QUOTE + 1),
        },
    )
    .unwrap();
    app.fund_owner("AAVE", AAVE_AMOUNT);

    let res = app
        .sweep_tokens(
            vec![Asset::new("AAVE", AAVE_AMOUNT)],
            aave_routes(AAVE_QUOTE, AAVE_AMOUNT),
        )
        .unwrap();

    assert_eq!(
        swap_results(&res),
        vec![SwapResult::new("AAVE", AAVE_AMOUNT, false, false)]
    );
    assert_eq!(app.balance(&sweeper, "AAVE"), AAVE_AMOUNT);
    assert_eq!(app.balance(&receiver, TARGET), 0);
}

#[test]
fn test_incremental_base_leaves_earlier_custody() {
    let mut app = setup();
    let (receiver, sweeper) = (app.receiver.clone(), app.sweeper.clone());
    set_policy(&mut app, None, Some(SlippageBase::Incremental));
    app.mint(&sweeper, "AAVE", AAVE_AMOUNT / 2);
    app.fund_owner("AAVE", AAVE_AMOUNT);

    let res = app
        .sweep_tokens(
            vec![Asset::new("AAVE", AAVE_AMOUNT)],
            aave_routes(AAVE_QUOTE, AAVE_AMOUNT),
        )
        .unwrap();

    assert_eq!(
        swap_results(&res),
        vec![SwapResult::new("AAVE", AAVE_AMOUNT, true, false)]
    );
    assert_eq!(app.balance(&receiver, TARGET), AAVE_QUOTE);
    assert_eq!(app.balance(&sweeper, "AAVE"), AAVE_AMOUNT / 2);
}

#[test]
fn test_accumulated_base_swaps_whole_custody() {
    let mut app = setup();
    let (receiver, sweeper) = (app.receiver.clone(), app.sweeper.clone());
    app.mint(&sweeper, "AAVE", AAVE_AMOUNT / 2);
    app.fund_owner("AAVE", AAVE_AMOUNT);

    let res = app
        .sweep_tokens(
            vec![Asset::new("AAVE", AAVE_AMOUNT)],
            aave_routes(AAVE_QUOTE, AAVE_AMOUNT),
        )
        .unwrap();

    assert_eq!(
        swap_results(&res),
        vec![SwapResult::new("AAVE", 15_00000000, true, false)]
    );
    // 15 AAVE -> 30 LINK -> 1194098706 USDT
    assert_eq!(app.balance(&receiver, TARGET), 1194098706);
    assert_eq!(app.balance(&sweeper, "AAVE"), 0);
}

#[test]
fn test_failed_swap_is_isolated() {
    let mut app = setup();
    let (receiver, sweeper) = (app.receiver.clone(), app.sweeper.clone());
    app.fund_owner("AAVE", AAVE_AMOUNT);
    app.fund_owner(TARGET, 1000);
    // quotes still answer, swaps revert
    app.set_paused(true);

    let res = app
        .sweep_tokens(
            vec![Asset::new("AAVE", AAVE_AMOUNT), Asset::new(TARGET, 1000u128)],
            aave_routes(AAVE_QUOTE, AAVE_AMOUNT),
        )
        .unwrap();

    assert_eq!(
        swap_results(&res),
        vec![
            SwapResult::new(TARGET, 1000, true, false),
            SwapResult::new("AAVE", AAVE_AMOUNT, false, false),
        ]
    );
    assert_eq!(app.balance(&receiver, TARGET), 1000);
    assert_eq!(app.balance(&sweeper, "AAVE"), AAVE_AMOUNT);
}

#[test]
fn test_failed_swap_refunds_depositor() {
    let mut app = setup();
    let (owner, sweeper) = (app.owner.clone(), app.sweeper.clone());
    set_policy(&mut app, Some(FailurePolicy::Refund), None);
    app.fund_owner("AAVE", AAVE_AMOUNT);
    app.set_paused(true);

    let res = app
        .sweep_tokens(
            vec![Asset::new("AAVE", AAVE_AMOUNT)],
            aave_routes(AAVE_QUOTE, AAVE_AMOUNT),
        )
        .unwrap();

    assert_eq!(
        swap_results(&res),
        vec![SwapResult::new("AAVE", AAVE_AMOUNT, false, false)]
    );
    assert_eq!(app.balance(&owner, "AAVE"), AAVE_AMOUNT);
    assert_eq!(app.balance(&sweeper, "AAVE"), 0);
}

#[test]
fn test_final_pass_without_batch_is_noop() {
    let mut app = setup();
    let (receiver, sweeper) = (app.receiver.clone(), app.sweeper.clone());
    let final_pass = ExecuteMsg::Continue(Continuation::ConvertAccumulated {
        routes: aave_routes(AAVE_QUOTE, AAVE_AMOUNT),
    });

    for _ in 0..2 {
        let res = app.execute_sweeper(&sweeper, &final_pass).unwrap();
        assert!(swap_results(&res).is_empty());
    }

    // same after a completed batch, its ledger is gone
    app.fund_owner("AAVE", AAVE_AMOUNT);
    app.sweep_tokens(
        vec![Asset::new("AAVE", AAVE_AMOUNT)],
        aave_routes(AAVE_QUOTE, AAVE_AMOUNT),
    )
    .unwrap();
    let res = app.execute_sweeper(&sweeper, &final_pass).unwrap();
    assert!(swap_results(&res).is_empty());
    assert_eq!(app.balance(&receiver, TARGET), AAVE_QUOTE);
}
