/// A token cut at its first `=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSplit<'a> {
    /// Byte offset of the `=`, if one was found.
    pub index: Option<usize>,
    pub name: &'a str,
    /// Text after the `=`; `Some("")` for a trailing `=`.
    pub value: Option<&'a str>,
}

/// Split `token` on the first `=` at or after position 1.
///
/// Position 0 is where the leading dash sits, so a token starting with `=`
/// is only split on a later `=`.
pub fn split_on_equals(token: &str) -> TokenSplit<'_> {
    match token.get(1..).and_then(|rest| rest.find('=')) {
        Some(pos) => {
            let pos = pos + 1;
            TokenSplit {
                index: Some(pos),
                name: &token[..pos],
                value: Some(&token[pos + 1..]),
            }
        }
        None => TokenSplit {
            index: None,
            name: token,
            value: None,
        },
    }
}
