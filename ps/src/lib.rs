//! PlanStore - file-backed document store for generated task plans
//!
//! Each generated plan is appended as one JSON line to `plans.jsonl` under
//! the store directory. Records are immutable once written; lookups scan the
//! file in insertion order.
//!
//! # Layout
//!
//! ```text
//! .planstore/
//! └── plans.jsonl      # one PlanRecord per line
//! ```
//!
//! # Example
//!
//! ```ignore
//! use planstore::PlanStore;
//!
//! let store = PlanStore::open(".planstore")?;
//! let record = store.insert("Launch a product in 3 months", plan_text)?;
//! let fetched = store.get(&record.id)?;
//! ```

mod store;

pub use store::{PlanId, PlanRecord, PlanStore};

/// File name for the plan record log
pub const PLANS_FILE: &str = "plans.jsonl";
