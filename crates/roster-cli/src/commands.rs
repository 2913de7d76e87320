use anyhow::{Context, Result};
use tracing::info;

use roster_cli::pipeline::{Prepared, export, prepare};

use crate::cli::{ExportArgs, ReportFormatArg, ValidateArgs};
use crate::summary::{print_export, print_report};

/// Returns the process exit code.
pub fn run_validate(args: &ValidateArgs) -> Result<i32> {
    let prepared = prepare(&args.data_folder, args.config.as_deref())?;
    match args.format {
        ReportFormatArg::Table => print_report(&prepared),
        ReportFormatArg::Json => {
            let json = serde_json::to_string_pretty(&prepared.summary)
                .context("serialize validation summary")?;
            println!("{json}");
        }
    }
    Ok(exit_code(&prepared))
}

/// Returns the process exit code.
pub fn run_export(args: &ExportArgs) -> Result<i32> {
    let prepared = prepare(&args.data_folder, args.config.as_deref())?;
    print_report(&prepared);
    let paths = export(prepared, &args.output_dir, args.allow_errors)?;
    info!(dir = %args.output_dir.display(), "export complete");
    print_export(&args.output_dir, &paths);
    Ok(0)
}

fn exit_code(prepared: &Prepared) -> i32 {
    if prepared.summary.has_errors() { 1 } else { 0 }
}
