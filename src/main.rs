mod args;
mod bmd;

use clap::Parser;
use env_logger::Env;
use log::{debug, warn};
use snafu::{prelude::*, ErrorCompat};

use crate::args::{Args, Command};
use crate::bmd::BmdResult;

fn run(args: Args) -> BmdResult<()> {
    match args.command {
        Command::Encode {
            election,
            ballot_style,
            precinct,
            activation_code,
            votes,
            serial,
        } => {
            let payload = bmd::run_encode(
                &election,
                ballot_style,
                precinct,
                activation_code,
                &votes,
                serial,
            )?;
            println!("{}", payload);
            Ok(())
        }
        Command::Decode {
            election,
            payload,
            out,
        } => {
            let votes_js = bmd::run_decode(&election, &payload)?;
            let pretty = serde_json::to_string_pretty(&votes_js)
                .whatever_context::<_, bmd::BmdError>("Failed to serialize the votes")?;
            bmd::io_common::write_output(out.as_deref(), &pretty)
        }
        Command::TestDeck {
            election,
            precinct,
            format,
            out,
            reference,
        } => {
            let deck = bmd::run_test_deck(
                &election,
                precinct.as_deref(),
                format.as_deref(),
                reference.as_deref(),
            )?;
            bmd::io_common::write_output(out.as_deref(), &deck)
        }
    }
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    }

    debug!("args: {:?}", args);

    if let Err(e) = run(args) {
        warn!("Error occured {:?}", e);
        eprintln!("An error occured {}", e);
        if let Some(bt) = ErrorCompat::backtrace(&e) {
            eprintln!("trace: {}", bt);
        }
        std::process::exit(1);
    }
}
