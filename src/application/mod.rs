// Application layer - use cases and orchestration.
// The ledger and validation rules live in `domain`; this layer adds totals,
// the edit flow, and the error type clients see.

pub mod aggregate;
pub mod error;
pub mod service;

pub use aggregate::*;
pub use error::*;
pub use service::*;
