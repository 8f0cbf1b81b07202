use cosmwasm_std::{Decimal256, Uint128, Uint256};
use fee_sweeper_common::error::ContractError;

/// Accepts a forecast execution price unless it falls short of `expected_price` by
/// more than `tolerance` percent. Prices at or above the expectation always pass.
///
/// The deviation `(actual - expected) * 100 / expected` truncates toward zero, so a
/// shortfall under one percent counts as no deviation.
pub fn check_slippage(
    amount_in: Uint128,
    forecast_out: Uint128,
    tolerance: i64,
    expected_price: Decimal256,
) -> Result<bool, ContractError> {
    if expected_price.is_zero() {
        return Err(ContractError::InvalidExpectedPrice {});
    }

    let actual_price = Decimal256::checked_from_ratio(forecast_out, amount_in)?;
    if actual_price >= expected_price {
        return Ok(true);
    }

    let shortfall = (expected_price.atomics() - actual_price.atomics())
        .checked_mul(Uint256::from(100u8))?
        .checked_div(expected_price.atomics())?;
    if shortfall.is_zero() {
        return Ok(true);
    }

    Ok(tolerance > 0 && shortfall <= Uint256::from(tolerance.unsigned_abs()))
}
