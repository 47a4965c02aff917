use clap::{Parser, Subcommand};

use self::run::RunArg;

mod list;
mod run;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Self-test harness for the seqops library", long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Run the checks for every (or the selected) operation group
    Run(#[clap(flatten)] RunArg),
    /// List the operation groups
    List,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Run(RunArg::default())) {
        Mode::Run(arg) => run::run(&arg)?,
        Mode::List => list::run(),
    }
    Ok(())
}
