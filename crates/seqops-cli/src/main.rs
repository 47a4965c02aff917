mod check;
mod command;
mod report;
mod suite;

fn main() -> anyhow::Result<()> {
    command::run()
}
