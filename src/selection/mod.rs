//! Catalog selection: best DLT, consensus group, and algorithm.
//!
//! Every selector is a pure function of its inputs. Maximum-score
//! selection is stable: on equal scores the entry declared first in the
//! catalog wins.

mod algorithm;
mod dlt;
mod group;

pub use algorithm::{select_algorithm, AlgorithmSelection};
pub use dlt::{select_dlt, DltEvaluation, DltScore, DltSelection};
pub use group::{select_group, GroupRule, GroupSelection, GROUP_RULES};

/// Name used wherever no recommendation is available.
pub const NOT_AVAILABLE: &str = "Not available";
