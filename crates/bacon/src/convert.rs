use crate::prelude::*;
use bacon_core::{Base, ConversionReport, ConvertError};
use colored::Colorize;
use std::ffi::OsString;
use std::io::Write;

/// Long flags handed over to clap; everything else is walked here
const LONG_FLAGS: [&str; 3] = ["json", "verbose", "version"];

/// Base targeted by each conversion option
fn target_for(option: char) -> Option<Base> {
    match option {
        'b' => Some(Base::Binary),
        'q' => Some(Base::Octal),
        'd' => Some(Base::Decimal),
        'x' => Some(Base::Hexadecimal),
        _ => None,
    }
}

/// One unit of work requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Help,
    Convert { literal: String, target: Base },
    /// Unknown option, or a conversion option missing its number; nothing after it runs
    OptionError(String),
}

/// Result of walking the raw arguments
#[derive(Debug, Default)]
pub struct Plan {
    pub steps: Vec<Step>,
    /// Program name plus the long flags, ready for clap
    pub globals: Vec<OsString>,
}

/// Parsed command line, ready to execute
#[derive(Debug)]
pub struct Invocation {
    pub steps: Vec<Step>,
    pub global: crate::Global,
}

/// Walk `args` (program name first) in order, getopt style
///
/// A conversion option takes the rest of its cluster or the next argument
/// verbatim as its number, even when it starts with `-`. Arguments that are
/// not options are ignored, and `--` ends option processing. The walk stops
/// at the first bad option so that it is the last step.
pub fn plan<I, T>(args: I) -> Plan
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let raw = clap_lex::RawArgs::new(args);
    let mut cursor = raw.cursor();
    let mut plan = Plan::default();

    if let Some(program) = raw.next_os(&mut cursor) {
        plan.globals.push(program.to_os_string());
    }

    while let Some(arg) = raw.next(&mut cursor) {
        if arg.is_escape() {
            break;
        }

        if let Some((name, value)) = arg.to_long() {
            match name {
                Ok(name) if LONG_FLAGS.contains(&name) => {
                    let mut flag = OsString::from(f!("--{name}"));
                    if let Some(value) = value {
                        flag.push("=");
                        flag.push(value);
                    }
                    plan.globals.push(flag);
                }
                Ok(name) => {
                    plan.steps.push(Step::OptionError(name.to_string()));
                    return plan;
                }
                Err(name) => {
                    plan.steps
                        .push(Step::OptionError(name.to_string_lossy().into_owned()));
                    return plan;
                }
            }
            continue;
        }

        let Some(mut shorts) = arg.to_short() else {
            log::debug!("ignoring argument {}", arg.display());
            continue;
        };

        while let Some(flag) = shorts.next_flag() {
            let option = match flag {
                Ok(option) => option,
                Err(invalid) => {
                    plan.steps
                        .push(Step::OptionError(invalid.to_string_lossy().into_owned()));
                    return plan;
                }
            };

            if option == 'h' {
                plan.steps.push(Step::Help);
                continue;
            }

            let Some(target) = target_for(option) else {
                plan.steps.push(Step::OptionError(option.to_string()));
                return plan;
            };

            let literal = match shorts.next_value_os() {
                Some(rest) => Some(rest),
                None => raw.next_os(&mut cursor),
            };

            match literal {
                Some(literal) => plan.steps.push(Step::Convert {
                    literal: literal.to_string_lossy().into_owned(),
                    target,
                }),
                None => {
                    plan.steps.push(Step::OptionError(option.to_string()));
                    return plan;
                }
            }
            break;
        }
    }

    plan
}

/// Module entry point
pub fn run(invocation: Invocation) -> Result<()> {
    let mut stdout = anstream::stdout();
    execute(&invocation.steps, &invocation.global, &mut stdout)
}

/// Run `steps` in order, writing every line to `out`
pub fn execute<W: Write>(steps: &[Step], global: &crate::Global, out: &mut W) -> Result<()> {
    for step in steps {
        match step {
            Step::Help => writeln!(out, "{}", crate::help::document())?,
            Step::Convert { literal, target } => {
                log::debug!("converting {literal:?} to {target}");

                match bacon_core::convert(literal, *target) {
                    Ok(report) => writeln!(out, "{}", render(&report, global)?)?,
                    Err(err) => {
                        log::debug!("skipping {literal:?}: {err}");
                        writeln!(out, "{}", error_line(&err))?;
                    }
                }
            }
            Step::OptionError(option) => {
                writeln!(out, "{}", crate::help::option_error(option))?;
                writeln!(out, "{}", crate::help::usage())?;
                return Ok(());
            }
        }
    }

    Ok(())
}

/// Format a successful conversion for stdout
pub fn render(report: &ConversionReport, global: &crate::Global) -> Result<String> {
    let mut output = if global.json {
        serde_json::to_string(report).context("Failed to serialize conversion report")?
    } else {
        report.to_string()
    };

    if global.verbose && !global.json {
        output.push_str(&f!(
            "\n    detected {} literal, value {}",
            report.from,
            report.value
        ));
    }

    Ok(output)
}

pub fn error_line(err: &ConvertError) -> String {
    f!("{}: {}", "[ERROR]".red(), err)
}
