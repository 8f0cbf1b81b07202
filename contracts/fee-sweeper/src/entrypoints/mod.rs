pub mod common;
pub mod continuation;
pub mod execute;
pub mod gate;
pub mod query;
pub mod reply;
pub mod slippage;

pub use common::*;
pub use continuation::*;
pub use execute::*;
pub use gate::*;
pub use query::*;
pub use slippage::*;
