use dv_core::VerificationResult;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `dv schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(VerificationResult);
    output(&schema, flags.format)
}
