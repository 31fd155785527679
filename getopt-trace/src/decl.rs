//! Option declarations given on the command line, e.g. `b/cba:`.
//!
//! `[SHORT][/LONG][:|::]` where a trailing `:` means the option requires an
//! argument and `::` means the argument is optional.

use getopt::{ArgumentMode, Opt};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DeclError {
    #[error("option declaration '{0}' names neither a short nor a long form")]
    Empty(String),

    #[error("option declaration '{0}': short name must be a single character")]
    ShortTooLong(String),

    #[error("option declaration '{0}': long name is empty")]
    EmptyLong(String),
}

/// Parse one declaration into an option without a handler.
pub fn parse_decl(decl: &str) -> Result<Opt, DeclError> {
    let (body, mode) = if let Some(body) = decl.strip_suffix("::") {
        (body, ArgumentMode::OptionalArgument)
    } else if let Some(body) = decl.strip_suffix(':') {
        (body, ArgumentMode::RequiredArgument)
    } else {
        (decl, ArgumentMode::NoArgument)
    };

    let (short, long) = match body.split_once('/') {
        Some((short, long)) => (short, Some(long)),
        None => (body, None),
    };

    let mut opt = Opt::new().argument(mode);

    let mut chars = short.chars();
    match (chars.next(), chars.next()) {
        (None, _) => {}
        (Some(c), None) => opt = opt.short(c),
        (Some(_), Some(_)) => return Err(DeclError::ShortTooLong(decl.to_string())),
    }

    match long {
        Some("") => return Err(DeclError::EmptyLong(decl.to_string())),
        Some(name) => opt = opt.long(name),
        None => {}
    }

    if opt.short_name().is_none() && opt.long_name().is_none() {
        return Err(DeclError::Empty(decl.to_string()));
    }
    Ok(opt)
}
