//! Runs the getopt engine over an argument vector and prints the handler
//! trace, one item per line:
//!
//! - `-c` or `--long` for each handler call, then `{value}` if the option
//!   takes an argument
//! - `--`
//! - `{param}` for each positional parameter

mod decl;

use std::process;
use std::sync::{Arc, Mutex, MutexGuard};

use getopt::{Config, Getopt, NameType, Opt, OptionTable};
use tracing::debug;

const USAGE: &str = r#"Usage: getopt-trace [OPTION]... -- PROG [ARG]...
Parse PROG [ARG]... against the declared options and print what matched.

  -A, --abbrev           Accept unambiguous abbreviations of long options.
  -L, --alternative      Accept long options behind a single dash.
  -o, --option DECL      Declare an option.  Can be repeated.
  -h, --help             This help.

DECL is [SHORT][/LONG][:|::], e.g. "b/cba:" or "/verbose".  A trailing ':'
means a required argument, '::' an optional one.

Exit status is 1 if PROG [ARG]... fails to parse, 2 on usage errors.
"#;

#[derive(Debug, thiserror::Error)]
enum TraceError {
    #[error(transparent)]
    Decl(#[from] decl::DeclError),

    #[error(transparent)]
    Getopt(#[from] getopt::Error),
}

#[derive(Debug, Default)]
struct Cmdline {
    config: Config,
    decls: Vec<String>,
    help: bool,
}

fn lock<T>(state: &Mutex<T>) -> getopt::Result<MutexGuard<'_, T>> {
    state
        .lock()
        .map_err(|_| getopt::Error::handler("option state poisoned"))
}

/// Parse the driver's own options. Returns them along with the positional
/// parameters, which make up the vector to trace.
fn parse_cmdline(argv: &[String]) -> getopt::Result<(Cmdline, Vec<String>)> {
    let state = Arc::new(Mutex::new(Cmdline::default()));

    let abbrev = state.clone();
    let alternative = state.clone();
    let option = state.clone();
    let help = state.clone();
    let table = OptionTable::new()
        .option(Opt::new().short('A').long("abbrev").handler(move |_, _, _| {
            lock(&abbrev)?.config.allow_abbrev = true;
            Ok(())
        }))
        .option(Opt::new().short('L').long("alternative").handler(move |_, _, _| {
            lock(&alternative)?.config.allow_alternative = true;
            Ok(())
        }))
        .option(Opt::new().short('o').long("option").required().handler(
            move |_, _, value| {
                lock(&option)?.decls.push(value.to_string());
                Ok(())
            },
        ))
        .option(Opt::new().short('h').long("help").handler(move |_, _, _| {
            lock(&help)?.help = true;
            Ok(())
        }));

    let mut getopt = Getopt::builder().allow_abbrev(true).options(table).build();
    getopt.parse(argv)?;

    let cmdline = std::mem::take(&mut *lock(&state)?);
    Ok((cmdline, getopt.args().to_vec()))
}

/// Run `vector` against the declared options and render the trace.
fn trace(
    config: Config,
    decls: &[String],
    vector: &[String],
) -> Result<Vec<String>, TraceError> {
    let lines = Arc::new(Mutex::new(Vec::new()));

    let log = lines.clone();
    let mut table = OptionTable::new().callback(move |opt, name_type, value| {
        let mut out = lock(&log)?;
        let name = match name_type {
            NameType::ShortName => opt.short_name().map(|c| format!("-{}", c)),
            NameType::LongName => opt.long_name().map(|n| format!("--{}", n)),
        };
        out.extend(name);
        if opt.takes_arg() {
            out.push(format!("{{{}}}", value));
        }
        Ok(())
    });
    for d in decls {
        table = table.option(decl::parse_decl(d)?);
    }

    let mut getopt = Getopt::new(table, config);
    getopt.parse(vector)?;

    let mut out = std::mem::take(&mut *lock(&lines)?);
    out.push("--".to_string());
    out.extend(getopt.args().iter().map(|a| format!("{{{}}}", a)));
    Ok(out)
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let argv: Vec<String> = std::env::args().collect();
    let (cmdline, vector) = match parse_cmdline(&argv) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("getopt-trace: {}", e);
            eprint!("{}", USAGE);
            process::exit(2);
        }
    };

    if cmdline.help {
        print!("{}", USAGE);
        return;
    }
    if vector.is_empty() {
        eprintln!("getopt-trace: no argument vector given");
        eprint!("{}", USAGE);
        process::exit(2);
    }

    debug!(
        config = ?cmdline.config,
        decls = cmdline.decls.len(),
        tokens = vector.len(),
        "tracing argument vector"
    );

    match trace(cmdline.config, &cmdline.decls, &vector) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(TraceError::Decl(e)) => {
            eprintln!("getopt-trace: {}", e);
            process::exit(2);
        }
        Err(TraceError::Getopt(e)) => {
            eprintln!("getopt-trace: {}", e);
            process::exit(1);
        }
    }
}
