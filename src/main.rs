use clap::Parser;
use std::error::Error;
use subnet_calc::cli::Cli;
use subnet_calc::config::Config;
use subnet_calc::models::MaskSpec;
use subnet_calc::output::{print_json, print_report};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let args = Cli::parse();
    let config = Config::from_env();

    let report = subnet_calc::build(&args.address, MaskSpec::Prefix(args.prefix))?;

    if args.json {
        print_json(&report)?;
    } else {
        print_report(&report, config.table_limit);
    }

    Ok(())
}
