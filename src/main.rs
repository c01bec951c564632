use std::io::Write;

use anyhow::Result;

use sysreport::commands::report::{build_cli, run_report, ReportOptions};

fn main() -> Result<()> {
    sysreport::init_logging();

    let matches = build_cli().get_matches();
    let opts = ReportOptions::from_matches(&matches);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = run_report(&opts, &mut out)?;
    out.flush()?;

    if !summary.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
