//! Math segmentation and the math-side blank substitution.

use std::sync::LazyLock;

use regex::Regex;

use super::cursor::{Cursor, split_delimited};
use super::id::{IdPath, Stage};
use super::segment::{MathBlank, MathSegment};
use crate::annotations::AnnotationView;
use crate::math::directive;

const DISPLAY: &str = "$$";
const INLINE: &str = "$";
const BLANK: &str = "___";

static FRAC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\frac").unwrap());

/// One run of a math split: text outside delimiters, or a delimited expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawRun<'a> {
    Text(&'a str),
    Math { inner: &'a str, display: bool },
}

/// Splits `s` into runs that alternate text / math, starting and ending with
/// a (possibly empty) text run, so a run's position is its index.
///
/// `$$...$$` is tried before `$...$`, both non-greedy. An inline pair needs
/// something between its dollars. Unterminated delimiters stay in the text.
pub fn split_math(s: &str) -> Vec<RawRun<'_>> {
    let mut cur = Cursor::new(s);
    let mut runs = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        if cur.peek() != Some(b'$') {
            cur.bump();
            continue;
        }

        let found = try_pair(&cur, DISPLAY, true).or_else(|| try_pair(&cur, INLINE, false));
        match found {
            Some((inner, display, end)) => {
                runs.push(RawRun::Text(&s[text_start..cur.i]));
                runs.push(RawRun::Math { inner, display });
                cur.i = end;
                text_start = end;
            }
            None if cur.starts_with(DISPLAY.as_bytes()) => {
                // Neither half of an unclosed `$$` may open an inline pair.
                log::debug!("unterminated `$$` at byte {} kept as literal text", cur.i);
                cur.bump_n(DISPLAY.len());
            }
            None => {
                log::debug!("unterminated `$` at byte {} kept as literal text", cur.i);
                cur.bump();
            }
        }
    }

    runs.push(RawRun::Text(&s[text_start..]));
    runs
}

/// A `delim`-delimited expression starting at the cursor, with the byte index
/// just past its closing delimiter.
fn try_pair<'a>(cur: &Cursor<'a>, delim: &str, display: bool) -> Option<(&'a str, bool, usize)> {
    if !cur.starts_with(delim.as_bytes()) {
        return None;
    }
    let inner_start = cur.i + delim.len();
    let inner_end = cur.find_from(inner_start, delim)?;
    if !display && inner_end == inner_start {
        return None;
    }
    Some((&cur.s[inner_start..inner_end], display, inner_end + delim.len()))
}

/// Trims the expression; display math gets `\dfrac` for every bare `\frac`.
pub fn clean(inner: &str, display: bool) -> String {
    let trimmed = inner.trim();
    if !display {
        return trimmed.to_string();
    }

    let mut out = String::with_capacity(trimmed.len() + 8);
    let mut last = 0;
    for m in FRAC.find_iter(trimmed) {
        let next_is_letter = trimmed[m.end()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());
        if next_is_letter {
            continue;
        }
        out.push_str(&trimmed[last..m.start()]);
        out.push_str(r"\dfrac");
        last = m.end();
    }
    out.push_str(&trimmed[last..]);
    out
}

/// Builds the math segment for run `path`, turning each `___answer___` into
/// an embedding directive addressed `{path}-m-{k}`.
pub fn math_segment(
    inner: &str,
    display: bool,
    path: &IdPath,
    annotations: &AnnotationView<'_>,
) -> MathSegment {
    let cleaned = clean(inner, display);
    let parts = split_delimited(&cleaned, BLANK);

    let mut raw = String::with_capacity(cleaned.len());
    let mut blanks = vec![];
    for (i, part) in parts.iter().enumerate() {
        if i % 2 == 0 {
            raw.push_str(part);
            continue;
        }
        let id = path.child(Stage::MathBlank, blanks.len()).into_string();
        let revealed = annotations.is_revealed(&id);
        raw.push_str(&directive::embed_blank(&id, part, revealed));
        blanks.push(MathBlank {
            id,
            answer: (*part).to_string(),
            revealed,
        });
    }

    MathSegment {
        raw,
        display,
        blanks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::ChapterAnnotations;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn math(inner: &str, display: bool) -> RawRun<'_> {
        RawRun::Math { inner, display }
    }

    #[test]
    fn splits_inline_math_between_text() {
        assert_eq!(
            split_math("Let $x^2$ be defined"),
            vec![
                RawRun::Text("Let "),
                math("x^2", false),
                RawRun::Text(" be defined")
            ]
        );
    }

    #[test]
    fn display_math_wins_over_inline() {
        assert_eq!(
            split_math("$$a$$ and $b$"),
            vec![
                RawRun::Text(""),
                math("a", true),
                RawRun::Text(" and "),
                math("b", false),
                RawRun::Text("")
            ]
        );
    }

    #[test]
    fn math_may_span_lines() {
        assert_eq!(
            split_math("$$a\n+b$$"),
            vec![RawRun::Text(""), math("a\n+b", true), RawRun::Text("")]
        );
    }

    #[rstest]
    #[case("costs 5$")]
    #[case("no math here")]
    #[case("$")]
    fn unterminated_dollar_is_literal(#[case] input: &str) {
        assert_eq!(split_math(input), vec![RawRun::Text(input)]);
    }

    #[rstest]
    #[case("price $$5 and $x$", "price $$5 and ", "x")]
    #[case("$$ open $y$", "$$ open ", "y")]
    fn unclosed_display_opener_stays_literal(
        #[case] input: &str,
        #[case] text: &str,
        #[case] inner: &str,
    ) {
        assert_eq!(
            split_math(input),
            vec![RawRun::Text(text), math(inner, false), RawRun::Text("")]
        );
    }

    #[test]
    fn empty_inline_pair_is_literal() {
        assert_eq!(
            split_math("a $$$x$"),
            vec![RawRun::Text("a $$"), math("x", false), RawRun::Text("")]
        );
    }

    #[rstest]
    #[case(r"\frac{1}{2}", r"\dfrac{1}{2}")]
    #[case(r"\frac12 + \frac{a}{b}", r"\dfrac12 + \dfrac{a}{b}")]
    #[case(r"\fraction", r"\fraction")]
    #[case(r"\dfrac{1}{2}", r"\dfrac{1}{2}")]
    fn display_cleanup_rewrites_frac(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(clean(input, true), expected);
    }

    #[test]
    fn inline_cleanup_only_trims() {
        assert_eq!(clean(r"  \frac{1}{2} ", false), r"\frac{1}{2}");
    }

    #[test]
    fn blank_inside_math_becomes_directive() {
        let path = IdPath::root("el-0-cont").run(1);
        let segment = math_segment("a + ___5___ = b", false, &path, &AnnotationView::empty());

        assert_eq!(
            segment.blanks,
            vec![MathBlank {
                id: "el-0-cont-1-m-0".into(),
                answer: "5".into(),
                revealed: false,
            }]
        );
        assert_eq!(
            segment.raw,
            r"a + \htmlId{el-0-cont-1-m-0}{\htmlClass{blank-hidden}{.....}} = b"
        );
    }

    #[test]
    fn revealed_math_blank_shows_answer() {
        let mut chapter = ChapterAnnotations::default();
        chapter.toggle_blank("p-1-m-1");
        let path = IdPath::root("p").run(1);

        let segment = math_segment("___x___ + ___y___", false, &path, &chapter.view());

        assert!(!segment.blanks[0].revealed);
        assert!(segment.blanks[1].revealed);
        assert!(segment.raw.ends_with(r"\htmlId{p-1-m-1}{\htmlClass{blank-revealed}{y}}"));
    }
}
