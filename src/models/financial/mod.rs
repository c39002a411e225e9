pub mod aggregate;
pub mod queries;
pub mod types;

pub use aggregate::{bar_width, derive_yearly_aggregates, max_value, YearlyAggregate};
pub use queries::*;
pub use types::*;
