/// A byte cursor over one markup string.
///
/// Every delimiter of the grammar (`$`, `**`, `___`, `\n`) is ASCII, so the
/// cursor only ever slices at positions where a delimiter was matched; those
/// are always char boundaries even when the text around them is not ASCII.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i.min(self.s.len())..].starts_with(pat)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Byte index of the next `pat` at or after `from`.
    ///
    /// `from` must sit on a char boundary (i.e. right after a matched delimiter).
    pub fn find_from(&self, from: usize, pat: &str) -> Option<usize> {
        self.s.get(from..)?.find(pat).map(|offset| from + offset)
    }
}

/// Splits `s` on a symmetric delimiter pair, non-greedy, left to right.
///
/// The result alternates outside / inside: even indices are text outside any
/// pair (possibly empty), odd indices are the contents of a matched pair. A
/// pair never spans a newline. An opening delimiter with no closing partner is
/// left in the surrounding text untouched.
pub fn split_delimited<'a>(s: &'a str, delim: &str) -> Vec<&'a str> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        if cur.starts_with(delim.as_bytes()) {
            let inner_start = cur.i + delim.len();
            match cur.find_from(inner_start, delim) {
                Some(inner_end) if !s[inner_start..inner_end].contains('\n') => {
                    out.push(&s[text_start..cur.i]);
                    out.push(&s[inner_start..inner_end]);
                    cur.i = inner_end + delim.len();
                    text_start = cur.i;
                    continue;
                }
                _ => {
                    log::debug!(
                        "unmatched `{delim}` at byte {} kept as literal text",
                        cur.i
                    );
                    // Skip the whole delimiter so its tail cannot open a new pair.
                    cur.bump_n(delim.len());
                    continue;
                }
            }
        }
        cur.bump();
    }

    out.push(&s[text_start..]);
    out
}

/// Splits `s` into alternating non-whitespace / whitespace runs.
///
/// Even indices hold non-whitespace tokens (the first and last may be empty),
/// odd indices hold the whitespace between them, verbatim.
pub fn split_whitespace_runs(s: &str) -> Vec<&str> {
    let mut out = vec![];
    let mut start = 0;
    let mut in_space = false;

    for (idx, ch) in s.char_indices() {
        let is_space = ch.is_whitespace();
        if is_space != in_space {
            out.push(&s[start..idx]);
            start = idx;
            in_space = is_space;
        }
    }
    out.push(&s[start..]);
    if in_space {
        out.push("");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.i, 1);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("**bold**");
        assert!(cur.starts_with(b"**"));
        assert!(!cur.starts_with(b"___"));
    }

    #[test]
    fn starts_with_at_eof() {
        let mut cur = Cursor::new("ab");
        cur.bump_n(2);
        assert!(cur.eof());
        assert!(cur.starts_with(b""));
        assert!(!cur.starts_with(b"a"));
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn find_from_reports_absolute_index() {
        let cur = Cursor::new("a $x$ b");
        assert_eq!(cur.find_from(3, "$"), Some(4));
        assert_eq!(cur.find_from(5, "$"), None);
    }

    #[test]
    fn split_delimited_alternates() {
        assert_eq!(split_delimited("a**b**c", "**"), vec!["a", "b", "c"]);
        assert_eq!(split_delimited("**b**", "**"), vec!["", "b", ""]);
    }

    #[test]
    fn split_delimited_is_non_greedy() {
        assert_eq!(
            split_delimited("___x___ and ___y___", "___"),
            vec!["", "x", " and ", "y", ""]
        );
    }

    #[test]
    fn split_delimited_leaves_unmatched_delimiter() {
        assert_eq!(split_delimited("a**b**c**d", "**"), vec!["a", "b", "c**d"]);
        assert_eq!(split_delimited("no pair **here", "**"), vec!["no pair **here"]);
    }

    #[test]
    fn split_delimited_handles_multibyte_text() {
        assert_eq!(
            split_delimited("été **à** ça", "**"),
            vec!["été ", "à", " ça"]
        );
    }

    #[test]
    fn split_whitespace_runs_keeps_whitespace() {
        assert_eq!(
            split_whitespace_runs("the quick  brown"),
            vec!["the", " ", "quick", "  ", "brown"]
        );
    }

    #[test]
    fn split_whitespace_runs_edges() {
        assert_eq!(split_whitespace_runs(" a "), vec!["", " ", "a", " ", ""]);
        assert_eq!(split_whitespace_runs(""), vec![""]);
    }
}
