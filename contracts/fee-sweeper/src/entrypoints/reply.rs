use cosmwasm_std::{attr, CosmosMsg, DepsMut, Response};
use fee_sweeper_common::error::ContractError;

use crate::{
    contract::{reply_id, CONVERT_REPLY_ID, UNWIND_REPLY_ID},
    state::{CONFIG, LEDGER, UNWIND_QUEUE},
};

use super::{refund, swap_result_event};

/// The unwind of one pool share reverted. Its share stays in custody, or goes back to
/// the depositor under the refund policy. The rest of the batch carries on.
pub fn unwind_failed(deps: DepsMut, index: u64, error: String) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let item = UNWIND_QUEUE
        .load(deps.storage)?
        .into_iter()
        .nth(index as usize)
        .ok_or(ContractError::UnrecognizedReplyId {
            id: reply_id(UNWIND_REPLY_ID, index),
        })?;
    let ledger = LEDGER.load(deps.storage)?;

    let mut msgs: Vec<CosmosMsg> = vec![];
    refund(&config, &ledger, &mut msgs, &item.symbol, item.amount, true)?;

    Ok(Response::new()
        .add_messages(msgs)
        .add_event(swap_result_event(&item.symbol, item.amount, false, true))
        .add_attributes(vec![
            attr("action", "unwind_failed"),
            attr("symbol", item.symbol),
            attr("error", error),
        ]))
}

/// The conversion of one accumulated asset reverted at the AMM.
pub fn convert_failed(
    deps: DepsMut,
    index: u64,
    error: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let ledger = LEDGER.load(deps.storage)?;
    let entry = ledger
        .entries
        .get(index as usize)
        .cloned()
        .ok_or(ContractError::UnrecognizedReplyId {
            id: reply_id(CONVERT_REPLY_ID, index),
        })?;

    let mut msgs: Vec<CosmosMsg> = vec![];
    refund(&config, &ledger, &mut msgs, &entry.symbol, entry.amount, false)?;

    Ok(Response::new()
        .add_messages(msgs)
        .add_event(swap_result_event(&entry.symbol, entry.amount, false, false))
        .add_attributes(vec![
            attr("action", "convert_failed"),
            attr("symbol", entry.symbol),
            attr("error", error),
        ]))
}
