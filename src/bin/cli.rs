// src/bin/cli.rs
use color_eyre::eyre::{Result, WrapErr};

use finance_scraper::cli::{self, Mode};
use finance_scraper::{log, mapper, runner};

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init();

    let opts = match cli::parse_args(std::env::args().skip(1))? {
        Mode::Run(opts) => opts,
        Mode::Help => {
            eprintln!("{}", cli::HELP);
            return Ok(());
        }
    };

    let raw = runner::scrape(&opts).wrap_err("failed to scrape")?;
    let quote = mapper::map(&raw).wrap_err("failed to map")?;
    let report = runner::report(&opts, &quote);

    println!("{report}");
    Ok(())
}
