use clap::Parser;
use color_eyre::Result;
use distassets::{init_logger, run, Args, CONFIRMATION};

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logger();

    let args = Args::parse();
    run(&args)?;

    println!("{CONFIRMATION}");
    Ok(())
}
