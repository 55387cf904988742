use crate::prelude::*;
use bacon_core::Base;
use colored::Colorize;

const PROGRAM: &str = env!("CARGO_PKG_NAME");

const BANNER: &str = "\
###
# ###                  #########
#   #####         ######       #
#       ###########            #
#                              #
#           BACON              #
#      - base converter -      #
 ##                        ####
   #####         ##########
        ##########";

const OPTIONS: &str = "\
Options:

        >  -b number   (convert number into binary number)
        >  -q number   (convert number into octal number)
        >  -d number   (convert number into decimal number)
        >  -x number   (convert number into hexadecimal number)
        >  -h          (help)

        >  --json      (print each conversion as a JSON object)
        >  --verbose   (also print the detected base and value)";

const EXAMPLES: &str = "\
Examples:               -b 25      (decimal to binary conversion of the number 25)
                        -x 011001  (convert 25 from binary into hexadecimal)
                        -d 31q     (convert 25 from octal into decimal)";

/// Two-line usage message printed when no usable options were given
pub fn usage() -> String {
    f!("[USAGE]: {PROGRAM} <opt> <unsigned_number_to_convert>\nFor more information use: {PROGRAM} -h")
}

/// Line printed for an unknown option or a conversion option missing its number
pub fn option_error(option: &str) -> String {
    f!("{}: {}", "[OPERR]".yellow(), option)
}

fn long_name(base: Base) -> &'static str {
    match base {
        Base::Binary => "BINARY",
        Base::Octal => "OCTAL",
        Base::Decimal => "DECIMAL",
        Base::Hexadecimal => "HEXADECIMAL",
    }
}

fn example(base: Base) -> &'static str {
    match base {
        Base::Binary => "011001",
        Base::Octal => "31q",
        Base::Decimal => "128",
        Base::Hexadecimal => "0xff00",
    }
}

/// Full help document: banner, supported bases, options and examples
pub fn document() -> String {
    let mut table = new_table();
    table.set_titles(prettytable::row!["NAME", "BASE", "EXAMPLE"]);
    for base in Base::ALL {
        table.add_row(prettytable::row![long_name(base), base.radix(), example(base)]);
    }

    f!(
        "{BANNER}\n\n\nConvert between number bases\n\n        Version:  {}\n\n\n\
         The program supports the following number types:\n\n{table}\n\n{OPTIONS}\n\n\n{EXAMPLES}",
        env!("CARGO_PKG_VERSION")
    )
}
