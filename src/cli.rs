// File: ./src/cli.rs
//! Command-line argument handling, the run entry point and help text.
use crate::config::Config;
use crate::context::StandardContext;
use crate::processor::evaluate;
use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub today: Option<NaiveDate>,
    pub verbose: bool,
    pub help: bool,
}

impl CliArgs {
    /// Parses arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" | "help" => out.help = true,
                "-v" | "--verbose" => out.verbose = true,
                "-c" | "--config" => out.config = Some(PathBuf::from(value(&arg, args.next())?)),
                "-r" | "--root" => out.root = Some(PathBuf::from(value(&arg, args.next())?)),
                "--today" => {
                    let raw = value(&arg, args.next())?;
                    let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                        .with_context(|| format!("Invalid --today date '{}'", raw))?;
                    out.today = Some(date);
                }
                other => bail!("Unknown argument '{}'. See --help.", other),
            }
        }
        Ok(out)
    }
}

/// Log filter for the terminal logger.
pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Loads the config, evaluates it against one captured "now" and returns the
/// lines to print.
///
/// Config and template errors are returned as `Err`. Reminders with bad dates
/// are only logged and do not fail the run.
pub fn run(args: &CliArgs) -> Result<Vec<String>> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(&StandardContext::new(args.root.clone()))?,
    };

    // Captured once; every reminder is compared against the same day.
    let now = args.today.unwrap_or_else(|| Local::now().date_naive());

    let batch = evaluate(&config, now)?;
    Ok(batch.lines)
}

fn value(flag: &str, next: Option<String>) -> Result<String> {
    next.ok_or_else(|| anyhow::anyhow!("Missing value for {}", flag))
}

pub fn print_help(binary_name: &str) {
    println!(
        "Britto v{} - Birthday and event reminders for your shell",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!(
        "    {} [--config <path>] [--root <dir>] [--today YYYY-MM-DD] [-v]",
        binary_name
    );
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <path>   Config file, or a directory of *.toml files.");
    println!("    -r, --root <dir>      Use a different directory for the config.");
    println!("    --today <date>        Evaluate as if today were <date>.");
    println!("    -v, --verbose         Log why each reminder matched or not (stderr).");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("DATES:");
    println!("    DD/MM                 Yearly, age unknown (31/12)");
    println!("    DD/MM/YYYY            Yearly with origin year, or one-time (25/12/1985)");
    println!();
    println!("TEMPLATE PLACEHOLDERS:");
    println!("    {{{{name}}}} {{{{due}}}} {{{{date}}}} {{{{age}}}} {{{{days}}}} {{{{message}}}}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BOOTSTRAP_NOTICE_LEVEL;
    use crate::context::{AppContext, TestContext};
    use std::fs;

    fn args_for(ctx: &TestContext, today: NaiveDate) -> CliArgs {
        CliArgs {
            root: Some(ctx.get_config_dir().unwrap()),
            today: Some(today),
            ..CliArgs::default()
        }
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse(["--config", "/tmp/b.toml", "--today", "2024-12-20", "-v"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/b.toml")));
        assert_eq!(args.today, NaiveDate::from_ymd_opt(2024, 12, 20));
        assert!(args.verbose);
        assert!(!args.help);
    }

    #[test]
    fn test_parse_errors() {
        assert!(CliArgs::parse(["--config"]).is_err());
        assert!(CliArgs::parse(["--today", "20/12/2024"]).is_err());
        assert!(CliArgs::parse(["--bogus"]).is_err());
    }

    #[test]
    fn test_run_broken_template_is_err() {
        let ctx = TestContext::new();
        fs::write(
            ctx.get_config_file_path().unwrap(),
            r#"
[template]
reminder = "[{{name}] is due"

[[reminder]]
name = "Rent"
date = "21/12"
"#,
        )
        .unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        assert!(run(&args_for(&ctx, today)).is_err());
    }

    #[test]
    fn test_run_bad_dates_are_ok() {
        let ctx = TestContext::new();
        fs::write(
            ctx.get_config_file_path().unwrap(),
            r#"
[[reminder]]
name = "Broken"
date = "31/12"
one_time = true

[[reminder]]
name = "Garbage"
date = "soon"

[[reminder]]
name = "Rent"
date = "21/12"
"#,
        )
        .unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        let lines = run(&args_for(&ctx, today)).unwrap();
        assert_eq!(lines, vec!["[Rent] is due tomorrow! 21/12"]);
    }

    #[test]
    fn test_run_explicit_config_file() {
        let ctx = TestContext::new();
        let file = ctx.root.join("other.toml");
        fs::write(&file, "[[birthday]]\nname = \"Ann\"\ndate = \"20/12/2000\"\n").unwrap();

        let args = CliArgs {
            config: Some(file),
            today: NaiveDate::from_ymd_opt(2024, 12, 20),
            ..CliArgs::default()
        };
        assert_eq!(
            run(&args).unwrap(),
            vec!["[Ann] is turning 24 years old today! 20/12/2024"]
        );
    }

    #[test]
    fn test_first_run_writes_config_and_notice_is_visible() {
        let ctx = TestContext::new();
        let today = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();

        let lines = run(&args_for(&ctx, today)).unwrap();
        assert!(ctx.get_config_file_path().unwrap().exists());
        assert!(!lines.is_empty());

        // The first-run notice must pass the default (non-verbose) filter.
        assert!(BOOTSTRAP_NOTICE_LEVEL <= log_level(false));
    }
}
