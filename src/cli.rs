use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

pub(crate) static USAGE: &str = "\
Usage: termsnake [<options>]

Steer the snake with w/a/s/d, eat the fruit, and don't bite yourself.
Press q to quit.

Options:
  -l, --log-file <PATH>  Append log messages to PATH; the level is taken
                         from $TERMSNAKE_LOG (default: info)
  -s, --seed <N>         Seed the fruit placement RNG with N
  -h, --help             Show this help and exit
  -V, --version          Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) seed: Option<u64>,
    pub(crate) log_file: Option<PathBuf>,
}

impl Command {
    pub(crate) fn from_env() -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('s') | Arg::Long("seed") => {
                    args.seed = Some(parser.value()?.parse()?);
                }
                Arg::Short('l') | Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(args))
    }
}
