//! Record Builder
//!
//! Assembles the sheet / first cut / double cut triad using the category
//! names from the schema.

use crate::graph::{Cut, Interpretants, Record, Schema, SheetParts};
use crate::orchestrator::classifier::{initial_meaning, promote_to_interpretants};

pub struct RecordBuilder<'a> {
    schema: &'a Schema,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Classify and assemble in one step
    pub fn build(&self, immediate_object: &str, dynamic_object: &str, context: &str) -> Record {
        let sign = initial_meaning(immediate_object, dynamic_object, context);
        let interpretants = promote_to_interpretants(&sign, dynamic_object);
        self.assemble(immediate_object, dynamic_object, sign, interpretants)
    }

    pub fn assemble(
        &self,
        immediate_object: &str,
        dynamic_object: &str,
        sign: String,
        interpretants: Interpretants,
    ) -> Record {
        let structure = &self.schema.structure;
        Record {
            sheet: Cut {
                category: structure.sheet.category.clone(),
                value: SheetParts::render(immediate_object, dynamic_object),
            },
            first_cut: Cut {
                category: structure.first_cut.category.clone(),
                value: sign,
            },
            double_cut: Cut {
                category: structure.double_cut.category.clone(),
                value: interpretants,
            },
        }
    }
}
