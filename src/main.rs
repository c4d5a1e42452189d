// src/main.rs

use kiln::{cli, logging, run};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("kiln error: {err:?}");
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.debug)?;
    run(args)?;
    Ok(())
}
