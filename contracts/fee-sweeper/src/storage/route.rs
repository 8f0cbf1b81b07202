use std::collections::BTreeMap;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal256;
use fee_sweeper_common::{
    asset::{pair_tokens, PAIR_SEPARATOR},
    error::ContractError,
};

/// Routes supplied with a sweep, keyed by source symbol.
pub type RouteMap = BTreeMap<String, Route>;

#[cw_serde]
pub struct Route {
    /// Either a flat symbol path starting at the source (`[AAVE, LINK, USDT]`) or a
    /// list of pair hops (`[ALP AAVE-LINK, LINK-USDT]`).
    pub hops: Vec<String>,
    /// Target units per source unit, 18 decimals.
    pub expected_price: Decimal256,
    /// Largest adverse deviation from `expected_price`, in percent.
    pub slippage_tolerance: i64,
}

impl Route {
    pub fn new(
        hops: impl IntoIterator<Item = impl Into<String>>,
        expected_price: Decimal256,
        slippage_tolerance: i64,
    ) -> Self {
        Self {
            hops: hops.into_iter().map(Into::into).collect(),
            expected_price,
            slippage_tolerance,
        }
    }

    /// Expands the route into the symbol path handed to the AMM.
    ///
    /// A flat route is returned unchanged. A pair route is walked from `source`: each
    /// hop contributes the constituent that is not the current tail of the path.
    pub fn resolve(&self, source: &str) -> Result<Vec<String>, ContractError> {
        let first = self.hops.first().ok_or_else(|| ContractError::InvalidRoute {
            reason: format!("empty route for {}", source),
        })?;

        if !first.contains(PAIR_SEPARATOR) {
            return Ok(self.hops.clone());
        }

        let mut path = vec![source.to_string()];
        for hop in &self.hops {
            let (a, b) = pair_tokens(hop)?;
            // path is never empty, it starts with the source
            let tail = &path[path.len() - 1];
            let next = if &a == tail {
                b
            } else if &b == tail {
                a
            } else {
                return Err(ContractError::InvalidRoute {
                    reason: format!("hop {} does not continue from {}", hop, tail),
                });
            };
            path.push(next);
        }

        Ok(path)
    }
}

pub fn route_for<'a>(routes: &'a RouteMap, symbol: &str) -> Result<&'a Route, ContractError> {
    routes
        .get(symbol)
        .filter(|route| !route.hops.is_empty())
        .ok_or_else(|| ContractError::MissingPath {
            symbol: symbol.to_string(),
        })
}

/// Rejects a batch whose routes carry a zero expected price.
pub fn validate_routes(routes: &RouteMap) -> Result<(), ContractError> {
    if routes.values().any(|route| route.expected_price.is_zero()) {
        return Err(ContractError::InvalidExpectedPrice {});
    }
    Ok(())
}
