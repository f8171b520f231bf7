use anyhow::{Context, Result};

use super::super::args::ExtractCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{
    print_failure, print_parse_warning, print_skipped_headers, print_success,
};
use crate::core::{ExtractContext, po::write_po_file};

pub fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let args = &cmd.args;
    let ctx = ExtractContext::new(args)?;

    let report = match ctx.extract() {
        Ok(report) => report,
        Err(failure) => {
            print_failure(&failure);
            return Ok(ExitStatus::Failure);
        }
    };

    print_parse_warning(report.parse_errors.len(), ctx.verbose);

    if args.json {
        let json = serde_json::to_string_pretty(&report.catalog)
            .context("Failed to serialize catalog")?;
        println!("{}", json);
        return Ok(ExitStatus::Success);
    }

    let skipped = write_po_file(&report.catalog, &ctx.output_path)?;
    print_skipped_headers(&skipped);
    print_success(&report, &ctx.output_path.display().to_string());

    Ok(ExitStatus::Success)
}
