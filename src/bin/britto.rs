use anyhow::Result;
use britto::cli::{CliArgs, log_level, print_help, run};
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::env;

fn main() -> Result<()> {
    let args = CliArgs::parse(env::args().skip(1))?;

    if args.help {
        print_help("britto");
        return Ok(());
    }

    let _ = TermLogger::init(
        log_level(args.verbose),
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    for line in run(&args)? {
        println!("{}", line);
    }
    Ok(())
}
