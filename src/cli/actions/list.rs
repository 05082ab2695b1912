//! Print alias help for the selected config file

use std::io::Write;
use tracing::debug;

use crate::cli::context::Context;
use crate::error::Result;
use crate::formatter::AliasFormatter;
use crate::parser::print_aliases;

/// Execute the list action, writing the report to `out`
pub fn execute<W: Write>(ctx: &Context, out: &mut W) -> Result<()> {
    debug!(file = %ctx.config_file.display(), options = ?ctx.options, "listing aliases");
    let formatter = AliasFormatter::new(ctx.options);
    print_aliases(&formatter, out, &ctx.config_file)?;
    out.flush()?;
    Ok(())
}
