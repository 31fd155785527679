//! GNU-style command-line tokenizer.
//!
//! Splits an argument vector into option events and positional parameters:
//! - short options behind one dash, clusterable (`-abc`, `-ofile`, `-o=file`)
//! - long options behind two dashes (`--output file`, `--output=file`)
//! - unambiguous abbreviations of long names (`--out`) when enabled
//! - "alternative" long options behind a single dash (`-output`) when enabled
//! - `--` ends option scanning; everything after it is positional
//!
//! Each matched option fires its handler with the option, the name form that
//! matched and the argument (empty when there is none).
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use getopt::{Getopt, Opt, OptionTable};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let log = seen.clone();
//! let table = OptionTable::new()
//!     .callback(move |opt, _, value| {
//!         log.lock().unwrap().push((opt.display_name(), value.to_string()));
//!         Ok(())
//!     })
//!     .option(Opt::new().short('v').long("verbose"))
//!     .option(Opt::new().short('o').long("output").required());
//!
//! let mut getopt = Getopt::builder().allow_abbrev(true).options(table).build();
//! getopt.parse(&["prog", "-vofile", "--verb", "input"]).unwrap();
//!
//! assert_eq!(getopt.args(), ["input"]);
//! assert_eq!(seen.lock().unwrap().len(), 3);
//! ```

mod error;
mod option;
mod parser;
mod resolve;
mod split;

pub use error::{Error, ErrorKind, Result};
pub use option::{ArgumentMode, NameType, Opt, OptionHandler, OptionTable};
pub use parser::{Config, Getopt, GetoptBuilder};
pub use split::{split_on_equals, TokenSplit};
