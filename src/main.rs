use clap::Parser;
use jigsaw_pieces::{init_logging, run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    let report = run(&cli)?;
    print!("{}", report);
    Ok(())
}
