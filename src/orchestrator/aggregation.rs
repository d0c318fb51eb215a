//! Aggregator
//!
//! Looks across every stored record for a recurring need and proposes a
//! merged interpretant pair.

use serde::{Deserialize, Serialize};

use crate::graph::Record;

pub const RECURRING_NEED: &str = "User needs help";
/// Occurrences of the recurring need must exceed this count
pub const RECURRENCE_THRESHOLD: usize = 1;
pub const MERGED_DYNAMIC: &str = "User expressing uncertainty needs guidance";
pub const MERGED_FINAL: &str = "Uncertainty implies guidance";

/// Dynamic / final interpretant pair proposed by `refine`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Refinement {
    pub dynamic: Option<String>,
    #[serde(rename = "final")]
    pub final_: Option<String>,
}

impl Refinement {
    fn merged() -> Self {
        Self {
            dynamic: Some(MERGED_DYNAMIC.to_string()),
            final_: Some(MERGED_FINAL.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dynamic.is_none() && self.final_.is_none()
    }
}

/// Records must be given in storage order
pub fn refine<'a, I>(records: I) -> Refinement
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut recurrences = 0usize;
    let mut last = None;

    for record in records {
        let interpretants = record.interpretants();
        if interpretants.dynamic == RECURRING_NEED {
            recurrences += 1;
        }
        last = Some(interpretants);
    }

    if recurrences > RECURRENCE_THRESHOLD {
        return Refinement::merged();
    }

    match last {
        Some(i) => Refinement {
            dynamic: Some(i.dynamic.clone()),
            final_: Some(i.final_.clone()),
        },
        None => Refinement::default(),
    }
}
