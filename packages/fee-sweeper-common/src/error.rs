use cosmwasm_std::{
    CheckedFromRatioError, ConversionOverflowError, DivideByZeroError, OverflowError, StdError,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("{0}")]
    ConversionOverflow(#[from] ConversionOverflowError),

    #[error("{0}")]
    CheckedFromRatio(#[from] CheckedFromRatioError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Contract already initialized")]
    AlreadyInitialized {},

    #[error("Invalid params: empty token list")]
    EmptyBatch {},

    #[error("Invalid route: {reason}")]
    InvalidRoute { reason: String },

    #[error("Missing path for {symbol}")]
    MissingPath { symbol: String },

    #[error("{kind} token threshold not configured for {symbol}")]
    ThresholdNotConfigured { kind: String, symbol: String },

    #[error("Threshold should be greater than 0")]
    InvalidThreshold {},

    #[error("Target token not configured")]
    TargetAssetNotConfigured {},

    #[error("Token {symbol} not exist")]
    TargetAssetNotFound { symbol: String },

    #[error("Token pair {expected} not match, got {actual}")]
    PairMismatch { expected: String, actual: String },

    #[error("Expected price should be greater than 0")]
    InvalidExpectedPrice {},

    #[error("Invalid Reply ID")]
    UnrecognizedReplyId { id: u64 },
}

impl From<ContractError> for StdError {
    fn from(source: ContractError) -> Self {
        Self::generic_err(source.to_string())
    }
}
