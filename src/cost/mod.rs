//! Partition cost models.
//!
//! A cost model maps one candidate split of the roster to a scalar
//! imbalance score. Lower is better; zero means every team has identical
//! per-attribute and overall means. The search runner treats the model as a
//! black box, so alternative scoring schemes plug in through the
//! [`CostModel`] trait.

mod model;
mod types;

pub use model::{population_std_dev, BalanceCost};
pub use types::CostModel;
