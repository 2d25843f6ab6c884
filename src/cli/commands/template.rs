//! Template command handler
//!
//! Writes the commented sample `agent-config.yaml`.

use crate::cli::args::TemplateArgs;
use crate::error::ClusterBootError;
use crate::template::write_template;

/// Write the sample configuration into the asset directory.
///
/// # Errors
///
/// Returns an error if the file already exists (without `--force`) or
/// cannot be written.
pub fn run(args: &TemplateArgs) -> Result<(), ClusterBootError> {
    let path = write_template(&args.dir, args.force)?;
    println!("{}", path.display());
    Ok(())
}
