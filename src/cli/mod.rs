use std::process::ExitCode;

use clap::{arg, value_parser, ArgMatches, Command};

mod run;

use run::{inspect_halves, inspect_value, read_file, write_file, Format};

pub fn cli() -> Command {
    let radix = arg!(-r --radix <RADIX> "Radix the value is printed in")
        .value_parser(value_parser!(u32))
        .default_value("10");
    let separator = arg!(-s --separator <SEPARATOR> "Separator between printed octets");
    let offset = arg!(-o --offset <OFFSET> "Byte offset of the integer in the file")
        .value_parser(value_parser!(usize))
        .default_value("0");

    Command::new("int64-buffer")
        .about("Inspect and write big-endian 64-bit integers")
        .version("0.1.0")
        .subcommand_required(true)
        .arg(arg!(-d --debug "Print debug information").global(true))
        .subcommand(
            Command::new("inspect")
                .arg(arg!(<VALUE> "Decimal number or 0x-prefixed hex string").allow_hyphen_values(true))
                .arg(radix.clone())
                .arg(separator.clone())
                .about("Encode a value and print it"),
        )
        .subcommand(
            Command::new("halves")
                .arg(arg!(<HI> "High 32 bits, decimal or 0x-prefixed hex"))
                .arg(arg!(<LO> "Low 32 bits, decimal or 0x-prefixed hex"))
                .arg(radix.clone())
                .arg(separator.clone())
                .about("Encode raw 32-bit halves and print them"),
        )
        .subcommand(
            Command::new("read")
                .arg(arg!(<FILE_PATH> "File to read from"))
                .arg(offset.clone())
                .arg(radix)
                .arg(separator)
                .about("Print the 8 bytes of a file at an offset"),
        )
        .subcommand(
            Command::new("write")
                .arg(arg!(<FILE_PATH> "File to write into"))
                .arg(arg!(<VALUE> "Decimal number or 0x-prefixed hex string").allow_hyphen_values(true))
                .arg(offset)
                .about("Overwrite the 8 bytes of a file at an offset"),
        )
}

fn format(args: &ArgMatches) -> Format<'_> {
    Format {
        radix: *args.get_one::<u32>("radix").unwrap_or(&10),
        separator: args
            .get_one::<String>("separator")
            .map(String::as_str)
            .unwrap_or(""),
    }
}

fn init_logging(debug: bool) {
    let filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

pub fn parse_cli() -> ExitCode {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("debug"));

    let result = match matches.subcommand() {
        Some(("inspect", args)) => {
            let value = args.get_one::<String>("VALUE").expect("Required");
            inspect_value(value, format(args))
        }
        Some(("halves", args)) => {
            let hi = args.get_one::<String>("HI").expect("Required");
            let lo = args.get_one::<String>("LO").expect("Required");
            inspect_halves(hi, lo, format(args))
        }
        Some(("read", args)) => {
            let file_path = args.get_one::<String>("FILE_PATH").expect("Required");
            let offset = *args.get_one::<usize>("offset").unwrap_or(&0);
            read_file(file_path, offset, format(args))
        }
        Some(("write", args)) => {
            let file_path = args.get_one::<String>("FILE_PATH").expect("Required");
            let value = args.get_one::<String>("VALUE").expect("Required");
            let offset = *args.get_one::<usize>("offset").unwrap_or(&0);
            write_file(file_path, value, offset)
        }
        _ => return ExitCode::FAILURE,
    };

    if let Err(error) = result {
        eprintln!("Error: {error:?}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{cli, format};

    #[test]
    fn verify_cli() {
        cli().debug_assert();
    }

    #[test]
    fn negative_values_and_defaults() {
        let matches = cli()
            .try_get_matches_from(["int64-buffer", "inspect", "-1", "-s", ":"])
            .unwrap();
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "inspect");
        assert_eq!(args.get_one::<String>("VALUE").unwrap(), "-1");

        let format = format(args);
        assert_eq!(format.radix, 10);
        assert_eq!(format.separator, ":");
    }

    #[test]
    fn global_debug_flag() {
        let matches = cli()
            .try_get_matches_from(["int64-buffer", "read", "data.bin", "-o", "4", "--debug"])
            .unwrap();
        assert!(matches.get_flag("debug"));
        let (_, args) = matches.subcommand().unwrap();
        assert_eq!(*args.get_one::<usize>("offset").unwrap(), 4);
    }
}
