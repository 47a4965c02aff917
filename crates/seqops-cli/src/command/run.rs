use std::path::PathBuf;

use clap::Args;

use crate::{
    check::Checker,
    report::{GroupReport, Report, ReportTarget},
    suite::Group,
};

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct RunArg {
    /// Operation groups to check, as printed by `list` or in `snake_case`
    /// (comma-separated, e.g. `where,standard_deviation`); all when omitted
    #[arg(long, value_delimiter = ',')]
    only: Vec<Group>,
    /// Print every individual check on stderr
    #[arg(long)]
    verbose: bool,
    /// Also write a JSON report to this path (`-` for stdout)
    #[arg(long)]
    report: Option<PathBuf>,
}

pub(crate) fn run(arg: &RunArg) -> anyhow::Result<()> {
    let groups = if arg.only.is_empty() {
        Group::ALL.to_vec()
    } else {
        arg.only.clone()
    };
    let target = arg.report.as_deref().map(ReportTarget::from_path);

    let mut report = Report::default();
    for group in groups {
        if arg.verbose {
            eprintln!("Checking {group}()...");
        }
        let mut checker = Checker::new(group, arg.verbose);
        let result = group.run(&mut checker);
        report.groups.push(GroupReport {
            group,
            checks: checker.passed(),
            passed: result.is_ok(),
        });
        if let Err(failure) = result {
            report.failure = Some(failure.to_string());
            save_report(&report, target.as_ref())?;
            return Err(failure.into());
        }
        println!("{group}() tested.");
    }

    report.passed = true;
    save_report(&report, target.as_ref())?;
    println!("All test passed!");
    Ok(())
}

fn save_report(report: &Report, target: Option<&ReportTarget>) -> anyhow::Result<()> {
    if let Some(target) = target {
        target.write(report)?;
    }
    Ok(())
}
