//! List known ID types.

use anyhow::Result;
use clap::Args;
use resid::IdDescriptor;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

/// List known ID types.
#[derive(Debug, Args)]
pub struct TypesCommand {}

#[derive(Debug, Serialize, Tabled)]
struct TypeRow {
    kind: &'static str,
    label: &'static str,
    shape: String,
}

impl From<&IdDescriptor> for TypeRow {
    fn from(descriptor: &IdDescriptor) -> Self {
        Self {
            kind: descriptor.kind,
            label: descriptor.label,
            shape: descriptor.shape(),
        }
    }
}

impl TypesCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let rows: Vec<TypeRow> = resid::registry().iter().map(TypeRow::from).collect();
        print_output(&rows, ctx.format);
        Ok(())
    }
}
