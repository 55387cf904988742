use crate::prelude::{println, *};
use clap::Parser;
use std::ffi::OsString;

mod convert;
mod error;
mod help;
mod prelude;

/// Long flags only; the short conversion options are walked in order by
/// [`convert::plan`]
#[derive(Debug, clap::Parser)]
#[command(
    name = "bacon",
    version,
    about = "Convert numbers between binary, octal, decimal and hexadecimal",
    disable_help_flag = true
)]
pub struct App {
    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Print each conversion as a JSON object.
    #[clap(long, env = "BACON_JSON", default_value = "false")]
    json: bool,

    /// Whether to display additional information.
    #[clap(long, env = "BACON_VERBOSE", default_value = "false")]
    verbose: bool,
}

/// Parse the process arguments into the ordered list of steps to run
fn parse<I, T>(args: I) -> Result<convert::Invocation, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() < 2 {
        return Err(Error::NoArguments);
    }

    let plan = convert::plan(args);
    let app = App::try_parse_from(plan.globals)?;

    Ok(convert::Invocation {
        steps: plan.steps,
        global: app.global,
    })
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let invocation = match parse(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(Error::Clap(err)) => err.exit(),
        Err(err @ Error::NoArguments) => {
            log::debug!("{err}");
            println!("{}", help::usage());
            return Ok(());
        }
    };

    convert::run(invocation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bacon_core::Base;
    use clap::error::ErrorKind;
    use clap::CommandFactory;
    use convert::Step;

    fn parse_args(args: &[&str]) -> Result<convert::Invocation, Error> {
        parse(std::iter::once("bacon").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_no_arguments() {
        assert!(matches!(parse_args(&[]), Err(Error::NoArguments)));
    }

    #[test]
    fn test_parse_keeps_steps_before_unknown_option() {
        let invocation = parse_args(&["-d", "25", "-z"]).unwrap();
        assert_eq!(
            invocation.steps,
            vec![
                Step::Convert {
                    literal: "25".to_string(),
                    target: Base::Decimal
                },
                Step::OptionError("z".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_help_then_unknown_option() {
        let invocation = parse_args(&["-h", "-z"]).unwrap();
        assert_eq!(
            invocation.steps,
            vec![Step::Help, Step::OptionError("z".to_string())]
        );
    }

    #[test]
    fn test_parse_missing_number() {
        let invocation = parse_args(&["-b"]).unwrap();
        assert_eq!(invocation.steps, vec![Step::OptionError("b".to_string())]);
    }

    #[test]
    fn test_parse_non_options_only() {
        let invocation = parse_args(&["25"]).unwrap();
        assert!(invocation.steps.is_empty());
    }

    #[test]
    fn test_parse_version_is_left_to_clap() {
        match parse_args(&["--version"]) {
            Err(Error::Clap(err)) => assert_eq!(err.kind(), ErrorKind::DisplayVersion),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_conversions() {
        let invocation = parse_args(&["-d", "0x10", "-b", "5"]).unwrap();
        assert_eq!(
            invocation.steps,
            vec![
                Step::Convert {
                    literal: "0x10".to_string(),
                    target: Base::Decimal
                },
                Step::Convert {
                    literal: "5".to_string(),
                    target: Base::Binary
                },
            ]
        );
        assert!(!invocation.global.json);
        assert!(!invocation.global.verbose);
    }

    #[test]
    fn test_parse_global_flags() {
        let invocation = parse_args(&["--json", "-x", "255", "--verbose"]).unwrap();
        assert!(invocation.global.json);
        assert!(invocation.global.verbose);
        assert_eq!(invocation.steps.len(), 1);
    }

    #[test]
    fn test_command_definition() {
        App::command().debug_assert();
    }
}
