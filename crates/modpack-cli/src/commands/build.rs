//! Build command implementation.

use crate::error::add_pack_context;
use crate::output::OutputFormatter;
use crate::progress::FormatterProgress;
use anyhow::Result;
use modpack_core::PackConfig;
use modpack_core::Packager;

pub fn execute(config: &PackConfig, formatter: &dyn OutputFormatter) -> Result<()> {
    let packager = Packager::new(config.clone());
    tracing::debug!(
        source = %packager.config().source_dir.display(),
        output = %packager.config().output_dir.display(),
        "starting build"
    );

    let mut progress = FormatterProgress::new(formatter);
    let result = add_pack_context(packager.build_with_progress(&mut progress))?;

    formatter.format_build_result(&result)?;

    Ok(())
}
