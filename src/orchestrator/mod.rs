//! Search orchestration: per-site pagination and cross-site aggregation.
//!
//! Two levels of launch-all-then-await-all fan-out: across configured
//! sites, and across additional pages within one site. Every branch
//! neutralizes its own failures, so the join steps never short-circuit.

pub mod pagination;
pub mod search;
