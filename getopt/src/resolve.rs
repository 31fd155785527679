// ============================================================================
// Option table lookups
// ============================================================================

use crate::{Error, Opt, Result};

/// Find the first option whose short name is `c`.
///
/// `Ok(None)` means "not a short option, retry the token as a long option",
/// which only happens in alternative mode.
pub(crate) fn resolve_short(
    options: &[Opt],
    c: char,
    allow_alternative: bool,
) -> Result<Option<&Opt>> {
    if let Some(opt) = options.iter().find(|o| o.short_name() == Some(c)) {
        return Ok(Some(opt));
    }
    if allow_alternative {
        return Ok(None);
    }
    Err(Error::InvalidOption(c))
}

/// Find the option named by `name` (without leading dashes).
///
/// With abbreviations every long name starting with `name` is a candidate,
/// including an exact match, so `--ver` against `ver` and `verbose` is
/// ambiguous.
pub(crate) fn resolve_long<'a>(
    options: &'a [Opt],
    name: &str,
    allow_abbrev: bool,
) -> Result<&'a Opt> {
    if !allow_abbrev {
        return options
            .iter()
            .find(|o| o.long_name() == Some(name))
            .ok_or_else(|| Error::UnrecognizedOption(name.to_string()));
    }

    let mut candidates = options
        .iter()
        .filter(|o| o.long_name().is_some_and(|long| long.starts_with(name)));

    let first = candidates
        .next()
        .ok_or_else(|| Error::UnrecognizedOption(name.to_string()))?;

    let rest: Vec<&Opt> = candidates.collect();
    if rest.is_empty() {
        return Ok(first);
    }

    let possibilities = std::iter::once(first)
        .chain(rest)
        .filter_map(|o| o.long_name().map(str::to_string))
        .collect();
    Err(Error::AmbiguousOption {
        name: name.to_string(),
        possibilities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn table() -> Vec<Opt> {
        vec![
            Opt::new().short('h').long("help"),
            Opt::new().short('V').long("version"),
            Opt::new().short('v').long("verbose"),
            Opt::new().short('a').long("daa"),
            Opt::new().short('b').long("cba").required(),
            Opt::new().long("xyz"),
            Opt::new().short('0'),
        ]
    }

    #[test]
    fn short_found() {
        let options = table();
        let opt = resolve_short(&options, 'b', false).unwrap().unwrap();
        assert_eq!(opt.long_name(), Some("cba"));
    }

    #[test]
    fn short_zero_is_a_real_name() {
        let options = table();
        assert!(resolve_short(&options, '0', false).unwrap().is_some());
    }

    #[test]
    fn short_first_match_wins() {
        let options = vec![
            Opt::new().short('x').long("first"),
            Opt::new().short('x').long("second"),
        ];
        let opt = resolve_short(&options, 'x', false).unwrap().unwrap();
        assert_eq!(opt.long_name(), Some("first"));
    }

    #[test]
    fn short_unknown() {
        let options = table();
        let err = resolve_short(&options, 'q', false).unwrap_err();
        assert!(matches!(err, Error::InvalidOption('q')));
    }

    #[test]
    fn short_unknown_in_alternative_mode_defers() {
        let options = table();
        assert!(resolve_short(&options, 'q', true).unwrap().is_none());
    }

    #[test]
    fn long_exact() {
        let options = table();
        let opt = resolve_long(&options, "daa", false).unwrap();
        assert_eq!(opt.short_name(), Some('a'));
    }

    #[test]
    fn long_prefix_rejected_without_abbrev() {
        let options = table();
        let err = resolve_long(&options, "da", false).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedOption(ref n) if n == "da"));
    }

    #[test]
    fn long_unique_prefix() {
        let options = table();
        let long = |name| resolve_long(&options, name, true).unwrap().long_name();
        assert_eq!(long("d"), Some("daa"));
        assert_eq!(long("cb"), Some("cba"));
        assert_eq!(long("verb"), Some("verbose"));
    }

    #[test]
    fn long_ambiguous_prefix() {
        let options = table();
        match resolve_long(&options, "ver", true).unwrap_err() {
            Error::AmbiguousOption { name, possibilities } => {
                assert_eq!(name, "ver");
                assert_eq!(possibilities, vec!["version", "verbose"]);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn exact_match_that_prefixes_another_name_is_ambiguous() {
        let options = vec![Opt::new().long("ver"), Opt::new().long("verbose")];
        let err = resolve_long(&options, "ver", true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AmbiguousOption);
        assert!(resolve_long(&options, "ver", false).is_ok());
    }

    #[test]
    fn long_no_candidates() {
        let options = table();
        let err = resolve_long(&options, "zzz", true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownOption);
    }

    #[test]
    fn options_without_long_name_are_skipped() {
        let options = vec![Opt::new().short('x'), Opt::new().long("xyz")];
        assert_eq!(resolve_long(&options, "", true).unwrap().long_name(), Some("xyz"));
    }
}
