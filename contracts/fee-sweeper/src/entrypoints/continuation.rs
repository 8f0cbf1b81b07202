use cosmwasm_std::{attr, CosmosMsg, DepsMut, Env, Event, Response, SubMsg, Uint128};
use fee_sweeper_common::{
    asset::{pair_tokens, Asset},
    error::ContractError,
};

use crate::{
    contract::{reply_id, CONVERT_REPLY_ID},
    msg::Continuation,
    route_for,
    state::{CONFIG, LEDGER, UNWIND_QUEUE},
    AccumulationLedger, Config, FailurePolicy, Route, RouteMap, SlippageBase,
};

use super::{
    amm_deadline, check_slippage, continuation_msg, forecast, swap_result_event,
};

/// Withdraws one pool share held in custody.
///
/// Balances of both underlying tokens are snapshotted before the removal, the queued
/// `CreditLedger` follow-up credits the difference once the AMM has paid out.
pub fn unwind(deps: DepsMut, env: Env, item: Asset) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let (token_a, token_b) = pair_tokens(&item.symbol)?;

    let mut msgs: Vec<CosmosMsg> = vec![];
    config
        .lp_ledger()
        .approve(&mut msgs, &config.amm, &item.symbol, item.amount)?;

    let ledger = config.ledger();
    let balance_a_before = ledger.balance(&deps.querier, &env.contract.address, &token_a)?;
    let balance_b_before = ledger.balance(&deps.querier, &env.contract.address, &token_b)?;

    // any non-zero payout is accepted, the threshold gate already priced the share
    msgs.push(config.amm().remove_liquidity(
        &token_a,
        &token_b,
        item.amount,
        Uint128::one(),
        Uint128::one(),
        &env.contract.address,
        amm_deadline(&env),
    )?);
    msgs.push(continuation_msg(
        &env.contract.address,
        Continuation::CreditLedger {
            symbol_a: token_a,
            symbol_b: token_b,
            balance_a_before,
            balance_b_before,
        },
    )?);

    Ok(Response::new().add_messages(msgs).add_attributes(vec![
        attr("action", "unwind"),
        attr("symbol", item.symbol),
        attr("liquidity", item.amount.to_string()),
    ]))
}

/// Credits what the liquidity removal actually paid out to the accumulation ledger.
pub fn credit_ledger(
    deps: DepsMut,
    env: Env,
    symbol_a: String,
    symbol_b: String,
    balance_a_before: Uint128,
    balance_b_before: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let ledger_contract = config.ledger();
    let balance_a_after =
        ledger_contract.balance(&deps.querier, &env.contract.address, &symbol_a)?;
    let balance_b_after =
        ledger_contract.balance(&deps.querier, &env.contract.address, &symbol_b)?;

    let received_a = balance_a_after.checked_sub(balance_a_before)?;
    let received_b = balance_b_after.checked_sub(balance_b_before)?;

    let mut ledger = LEDGER.load(deps.storage)?;
    ledger.credit(&symbol_a, received_a)?;
    ledger.credit(&symbol_b, received_b)?;
    LEDGER.save(deps.storage, &ledger)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "credit_ledger"),
        attr(symbol_a, received_a.to_string()),
        attr(symbol_b, received_b.to_string()),
    ]))
}

/// Final pass: the target asset goes straight to the receiver, every other entry is
/// converted by its own `ConvertToTarget` follow-up which may fail on its own.
///
/// # Errors
/// - Reverts the batch when an entry other than the target asset has no route.
pub fn convert_accumulated(
    deps: DepsMut,
    env: Env,
    routes: RouteMap,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let Some(ledger) = LEDGER.may_load(deps.storage)? else {
        return Ok(Response::new().add_attribute("action", "convert_accumulated"));
    };

    let mut msgs: Vec<CosmosMsg> = vec![];
    let mut sub_msgs: Vec<SubMsg> = vec![];
    let mut events: Vec<Event> = vec![];

    for (index, entry) in ledger.entries.iter().enumerate() {
        if config.is_target(&entry.symbol) {
            if !entry.amount.is_zero() {
                config
                    .ledger()
                    .transfer(&mut msgs, &config.receiver, &entry.symbol, entry.amount)?;
                events.push(swap_result_event(&entry.symbol, entry.amount, true, false));
            }
            continue;
        }

        let route = route_for(&routes, &entry.symbol)?;
        sub_msgs.push(SubMsg::reply_on_error(
            continuation_msg(
                &env.contract.address,
                Continuation::ConvertToTarget {
                    symbol: entry.symbol.clone(),
                    amount: entry.amount,
                    route: route.clone(),
                },
            )?,
            reply_id(CONVERT_REPLY_ID, index as u64),
        ));
    }
    sub_msgs.push(SubMsg::new(continuation_msg(
        &env.contract.address,
        Continuation::ClearBatch {},
    )?));

    Ok(Response::new()
        .add_messages(msgs)
        .add_submessages(sub_msgs)
        .add_events(events)
        .add_attributes(vec![
            attr("action", "convert_accumulated"),
            attr("entries", ledger.entries.len().to_string()),
        ]))
}

/// Converts one accumulated asset into the target asset, paying the receiver.
///
/// The conversion only happens when the forecast reaches the target threshold and the
/// forecast price is within the route's slippage tolerance. Otherwise a failed
/// `swap_result` event is emitted and the failure policy decides where the funds go.
pub fn convert_to_target(
    deps: DepsMut,
    env: Env,
    symbol: String,
    amount: Uint128,
    route: Route,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let path = route.resolve(&symbol)?;

    let amount_in = match config.slippage_base {
        SlippageBase::Accumulated => {
            config
                .ledger()
                .balance(&deps.querier, &env.contract.address, &symbol)?
        }
        SlippageBase::Incremental => amount,
    };

    let mut estimate = Uint128::zero();
    let mut accepted = false;
    if !amount_in.is_zero() {
        estimate = forecast(&deps.querier, &config.amm(), amount_in, &path)?;
        accepted = estimate >= config.target_threshold
            && check_slippage(
                amount_in,
                estimate,
                route.slippage_tolerance,
                route.expected_price,
            )?;
    }

    let mut msgs: Vec<CosmosMsg> = vec![];
    if !accepted {
        let ledger = LEDGER.load(deps.storage)?;
        refund(&config, &ledger, &mut msgs, &symbol, amount, false)?;
        return Ok(Response::new()
            .add_messages(msgs)
            .add_event(swap_result_event(&symbol, amount, false, false))
            .add_attributes(vec![
                attr("action", "convert_to_target"),
                attr("symbol", symbol),
                attr("amount_in", amount_in.to_string()),
                attr("estimate", estimate.to_string()),
            ]));
    }

    config
        .ledger()
        .approve(&mut msgs, &config.amm, &symbol, amount_in)?;
    msgs.push(config.amm().swap_exact_tokens_for_tokens(
        path,
        amount_in,
        Uint128::one(),
        &config.receiver,
        amm_deadline(&env),
    )?);

    Ok(Response::new()
        .add_messages(msgs)
        .add_event(swap_result_event(&symbol, amount_in, true, false))
        .add_attributes(vec![
            attr("action", "convert_to_target"),
            attr("symbol", symbol),
            attr("amount_in", amount_in.to_string()),
            attr("estimate", estimate.to_string()),
        ]))
}

pub fn clear_batch(deps: DepsMut) -> Result<Response, ContractError> {
    LEDGER.remove(deps.storage);
    UNWIND_QUEUE.remove(deps.storage);
    Ok(Response::new().add_attribute("action", "clear_batch"))
}

/// Sends `amount` of `symbol` back to the batch depositor when the failure policy asks
/// for it, otherwise the funds stay in custody.
pub fn refund(
    config: &Config,
    ledger: &AccumulationLedger,
    msgs: &mut Vec<CosmosMsg>,
    symbol: &str,
    amount: Uint128,
    is_lp_token: bool,
) -> Result<(), ContractError> {
    if config.failure_policy != FailurePolicy::Refund {
        return Ok(());
    }

    let token_ledger = if is_lp_token {
        config.lp_ledger()
    } else {
        config.ledger()
    };
    token_ledger.transfer(msgs, &ledger.depositor, symbol, amount)?;
    Ok(())
}
