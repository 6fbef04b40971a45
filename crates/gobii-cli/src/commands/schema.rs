use gobii_core::TaskRecord;
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `gobii schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_for!(TaskRecord), flags.format)
}
