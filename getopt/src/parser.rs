use tracing::{debug, trace};

use crate::resolve::{resolve_long, resolve_short};
use crate::split::split_on_equals;
use crate::{ArgumentMode, Error, NameType, Opt, OptionTable, Result};

// ============================================================================
// Config / GetoptBuilder
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Long names may be given as any unambiguous prefix.
    pub allow_abbrev: bool,
    /// Long options may start with a single `-`; a single-dash token whose
    /// character is not a short option is retried as a long option.
    pub allow_alternative: bool,
}

#[derive(Debug, Default)]
pub struct GetoptBuilder {
    config: Config,
    options: OptionTable,
}

impl GetoptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(mut self, table: OptionTable) -> Self {
        self.options = table;
        self
    }

    pub fn allow_abbrev(mut self, allow: bool) -> Self {
        self.config.allow_abbrev = allow;
        self
    }

    pub fn allow_alternative(mut self, allow: bool) -> Self {
        self.config.allow_alternative = allow;
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Getopt {
        Getopt::new(self.options, self.config)
    }
}

// ============================================================================
// Getopt
// ============================================================================

#[derive(Debug)]
pub struct Getopt {
    config: Config,
    options: OptionTable,
    remaining: Vec<String>,
}

/// Outcome of scanning a single-dash token.
enum Cluster {
    /// Token handled; scanning resumes after this index.
    Done(usize),
    /// Not a short cluster after all; handle this token as a long option.
    TryLong(String),
}

impl Getopt {
    pub fn builder() -> GetoptBuilder {
        GetoptBuilder::new()
    }

    pub fn new(options: OptionTable, config: Config) -> Self {
        Getopt {
            config,
            options,
            remaining: Vec::new(),
        }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn options(&self) -> &OptionTable {
        &self.options
    }

    /// Positional parameters collected by the last `parse` call. After a
    /// failed parse this holds whatever was collected before the error.
    pub fn args(&self) -> &[String] {
        &self.remaining
    }

    /// Scan `argv`, firing handlers for options and collecting positional
    /// parameters. `argv[0]` is the program name and is skipped.
    pub fn parse<S: AsRef<str>>(&mut self, argv: &[S]) -> Result<()> {
        self.remaining.clear();

        let mut optind = 1;
        while optind < argv.len() {
            let arg = argv[optind].as_ref();

            if arg == "--" {
                debug!(optind, "end of options");
                self.remaining
                    .extend(argv[optind + 1..].iter().map(|a| a.as_ref().to_string()));
                return Ok(());
            }

            if arg.len() > 1 && arg.starts_with("--") {
                optind = self.parse_long(arg, argv, optind)?;
            } else if arg.len() > 1 && arg.starts_with('-') {
                optind = match self.parse_cluster(arg, argv, optind)? {
                    Cluster::Done(last) => last,
                    Cluster::TryLong(token) => {
                        debug!(arg, token = %token, "retrying as alternative long option");
                        self.parse_long(&token, argv, optind)?
                    }
                };
            } else {
                self.remaining.push(arg.to_string());
            }

            optind += 1;
        }

        Ok(())
    }

    /// Handle a single-dash token as a run of short options. Returns the index
    /// of the last token consumed.
    fn parse_cluster<S: AsRef<str>>(
        &self,
        arg: &str,
        argv: &[S],
        optind: usize,
    ) -> Result<Cluster> {
        let split = split_on_equals(arg);
        let cluster = &split.name[1..];
        let options = self.options.options();

        for (pos, c) in cluster.char_indices() {
            let opt = match resolve_short(options, c, self.config.allow_alternative)? {
                Some(opt) => opt,
                None => {
                    let mut token = format!("-{}", split.name);
                    if let Some(value) = split.value {
                        token.push('=');
                        token.push_str(value);
                    }
                    return Ok(Cluster::TryLong(token));
                }
            };

            if !opt.takes_arg() {
                invoke(opt, NameType::ShortName, "")?;
                continue;
            }

            let rest = &cluster[pos + c.len_utf8()..];
            if let Some(value) = split.value {
                invoke(opt, NameType::ShortName, value)?;
                return Ok(Cluster::Done(optind));
            }
            if !rest.is_empty() {
                invoke(opt, NameType::ShortName, rest)?;
                return Ok(Cluster::Done(optind));
            }
            if let Some(next) = argv.get(optind + 1) {
                invoke(opt, NameType::ShortName, next.as_ref())?;
                return Ok(Cluster::Done(optind + 1));
            }
            if opt.argument_mode() == ArgumentMode::RequiredArgument {
                return Err(Error::MissingShortArgument(c));
            }
            invoke(opt, NameType::ShortName, "")?;
            return Ok(Cluster::Done(optind));
        }

        Ok(Cluster::Done(optind))
    }

    /// Handle `--name`, `--name=value` or `--name value`. Returns the index of
    /// the last token consumed.
    fn parse_long<S: AsRef<str>>(&self, arg: &str, argv: &[S], optind: usize) -> Result<usize> {
        let split = split_on_equals(arg);
        let name = split.name.strip_prefix("--").unwrap_or(split.name);
        let opt = resolve_long(self.options.options(), name, self.config.allow_abbrev)?;

        if opt.takes_arg() {
            if let Some(value) = split.value {
                invoke(opt, NameType::LongName, value)?;
                return Ok(optind);
            }
            if let Some(next) = argv.get(optind + 1) {
                invoke(opt, NameType::LongName, next.as_ref())?;
                return Ok(optind + 1);
            }
            if opt.argument_mode() == ArgumentMode::RequiredArgument {
                return Err(Error::MissingLongArgument(
                    opt.long_name().unwrap_or(name).to_string(),
                ));
            }
        } else if let Some(value) = split.value {
            debug!(arg, value, "option takes no argument; inline value discarded");
        }

        invoke(opt, NameType::LongName, "")?;
        Ok(optind)
    }
}

fn invoke(opt: &Opt, name_type: NameType, value: &str) -> Result<()> {
    trace!(option = %opt.display_name(), ?name_type, value, "option matched");
    opt.invoke(name_type, value)
}
