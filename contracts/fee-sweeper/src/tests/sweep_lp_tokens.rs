use fee_sweeper_common::{asset::Asset, error::ContractError};

use crate::msg::ExecuteMsg;
use crate::tests::helper::{route, routes, swap_results, MockApp, SwapResult, TARGET};
use crate::{FailurePolicy, RouteMap};

const ELF_USDT: &str = "ALP ELF-USDT";
const ELF_LINK: &str = "ALP ELF-LINK";

fn setup() -> MockApp {
    let mut app = MockApp::new();
    app.set_thresholds(500, 1000);
    app.set_pool("ELF", TARGET, 10_000, 1_000_000, 1000);
    app.set_pool("ELF", "LINK", 20_000, 40_000, 1000);
    app.set_rate("ELF", TARGET, 100, 1);
    app.set_rate("LINK", TARGET, 50, 1);
    app.fund_amm(TARGET, 1_000_000);
    app
}

fn lp_routes() -> RouteMap {
    routes(vec![
        ("ELF", route(&["ELF", TARGET], 100, 1, 5)),
        ("LINK", route(&["LINK", TARGET], 50, 1, 5)),
    ])
}

#[test]
fn test_one_side_below_threshold_rejects_share() {
    let mut app = setup();
    let (owner, sweeper, amm) = (app.owner.clone(), app.sweeper.clone(), app.amm.clone());
    // 1000 ELF now only forecasts 100 USDT
    app.set_rate("ELF", TARGET, 1, 10);
    app.fund_owner(ELF_USDT, 100);

    let res = app
        .sweep_lp_tokens(vec![Asset::new(ELF_USDT, 100u128)], lp_routes())
        .unwrap();

    assert_eq!(
        swap_results(&res),
        vec![SwapResult::new(ELF_USDT, 100, false, true)]
    );
    // nothing was withdrawn from the pool
    assert_eq!(app.balance(&owner, ELF_USDT), 100);
    assert_eq!(app.balance(&sweeper, ELF_USDT), 0);
    assert_eq!(app.balance(&amm, "ELF"), 30_000);
}

#[test]
fn test_shared_underlying_is_converted_once() {
    let mut app = setup();
    let (owner, receiver, sweeper, amm) = (
        app.owner.clone(),
        app.receiver.clone(),
        app.sweeper.clone(),
        app.amm.clone(),
    );
    app.fund_owner(ELF_USDT, 100);
    app.fund_owner(ELF_LINK, 100);

    let res = app
        .sweep_lp_tokens(
            vec![Asset::new(ELF_USDT, 100u128), Asset::new(ELF_LINK, 100u128)],
            lp_routes(),
        )
        .unwrap();

    // 1000 + 2000 ELF swapped together, the USDT side forwarded as is
    assert_eq!(
        swap_results(&res),
        vec![
            SwapResult::new(TARGET, 100_000, true, false),
            SwapResult::new("ELF", 3000, true, false),
            SwapResult::new("LINK", 4000, true, false),
        ]
    );
    assert_eq!(app.balance(&receiver, TARGET), 300_000 + 100_000 + 200_000);

    assert_eq!(app.balance(&owner, ELF_USDT), 0);
    assert_eq!(app.balance(&owner, ELF_LINK), 0);
    for symbol in [ELF_USDT, ELF_LINK, "ELF", "LINK", TARGET] {
        assert_eq!(app.balance(&sweeper, symbol), 0);
    }
    assert_eq!(app.balance(&amm, ELF_USDT), 100);
    assert_eq!(app.balance(&amm, "ELF"), 30_000);
}

#[test]
fn test_failed_unwind_is_isolated() {
    let mut app = setup();
    let (owner, sweeper) = (app.owner.clone(), app.sweeper.clone());
    app.fund_owner(ELF_USDT, 100);
    app.set_paused(true);

    let res = app
        .sweep_lp_tokens(vec![Asset::new(ELF_USDT, 100u128)], lp_routes())
        .unwrap();

    assert_eq!(
        swap_results(&res),
        vec![SwapResult::new(ELF_USDT, 100, false, true)]
    );
    // the share stays in custody
    assert_eq!(app.balance(&owner, ELF_USDT), 0);
    assert_eq!(app.balance(&sweeper, ELF_USDT), 100);
    assert_eq!(app.balance(&sweeper, "ELF"), 0);
}

#[test]
fn test_failed_unwind_refunds_share() {
    let mut app = setup();
    let (owner, sweeper) = (app.owner.clone(), app.sweeper.clone());
    app.execute_sweeper(
        &owner,
        &ExecuteMsg::SetConversionPolicy {
            failure_policy: Some(FailurePolicy::Refund),
            slippage_base: None,
        },
    )
    .unwrap();
    app.fund_owner(ELF_LINK, 100);
    app.set_paused(true);

    let res = app
        .sweep_lp_tokens(vec![Asset::new(ELF_LINK, 100u128)], lp_routes())
        .unwrap();

    assert_eq!(
        swap_results(&res),
        vec![SwapResult::new(ELF_LINK, 100, false, true)]
    );
    assert_eq!(app.balance(&owner, ELF_LINK), 100);
    assert_eq!(app.balance(&sweeper, ELF_LINK), 0);
}

#[test]
fn test_sweep_lp_tokens_fatal_conditions() {
    let mut app = setup();
    let owner = app.owner.clone();
    app.fund_owner(ELF_USDT, 100);

    let err = app
        .sweep_lp_tokens(vec![Asset::new("ALP ELF", 100u128)], lp_routes())
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Invalid route"));

    let err = app
        .sweep_lp_tokens(vec![Asset::new(ELF_USDT, 100u128)], RouteMap::new())
        .unwrap_err();
    assert!(err.root_cause().to_string().contains(
        &ContractError::MissingPath {
            symbol: "ELF".to_string()
        }
        .to_string()
    ));
    assert_eq!(app.balance(&owner, ELF_USDT), 100);
}

#[test]
fn test_sweep_lp_tokens_requires_threshold() {
    let mut app = MockApp::new();
    app.set_pool("ELF", TARGET, 10_000, 1_000_000, 1000);
    app.fund_owner(ELF_USDT, 100);

    let err = app
        .sweep_lp_tokens(vec![Asset::new(ELF_USDT, 100u128)], lp_routes())
        .unwrap_err();
    assert!(err.root_cause().to_string().contains(
        &ContractError::ThresholdNotConfigured {
            kind: "Lp".to_string(),
            symbol: "ELF".to_string()
        }
        .to_string()
    ));
}

#[test]
fn test_pool_answer_for_other_pair_is_fatal() {
    let mut app = setup();
    let (owner, sweeper) = (app.owner.clone(), app.sweeper.clone());
    app.fund_owner(ELF_USDT, 100);
    app.set_reported_pair(Some("ELF-LINK"));

    let err = app
        .sweep_lp_tokens(vec![Asset::new(ELF_USDT, 100u128)], lp_routes())
        .unwrap_err();
    assert!(err.root_cause().to_string().contains(
        &ContractError::PairMismatch {
            expected: "ELF-USDT".to_string(),
            actual: "ELF-LINK".to_string()
        }
        .to_string()
    ));
    assert_eq!(app.balance(&owner, ELF_USDT), 100);
    assert_eq!(app.balance(&sweeper, ELF_USDT), 0);

    app.set_reported_pair(None);
    app.sweep_lp_tokens(vec![Asset::new(ELF_USDT, 100u128)], lp_routes())
        .unwrap();
    assert_eq!(app.balance(&owner, ELF_USDT), 0);
}

#[test]
fn test_zero_expected_price_reverts_lp_sweep() {
    let mut app = setup();
    let owner = app.owner.clone();
    app.fund_owner(ELF_USDT, 100);

    let err = app
        .sweep_lp_tokens(
            vec![Asset::new(ELF_USDT, 100u128)],
            routes(vec![
                ("ELF", route(&["ELF", TARGET], 0, 1, 5)),
                ("LINK", route(&["LINK", TARGET], 50, 1, 5)),
            ]),
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains(&ContractError::InvalidExpectedPrice {}.to_string()));
    assert_eq!(app.balance(&owner, ELF_USDT), 100);
}
