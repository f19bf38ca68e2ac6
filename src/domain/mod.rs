mod category;
mod currency;
mod date;
mod expense;
mod ledger;
mod money;
mod payment;
mod validation;

pub use category::*;
pub use currency::*;
pub use date::*;
pub use expense::*;
pub use ledger::*;
pub use money::*;
pub use payment::*;
pub use validation::*;
