//! Embedding directives: `\htmlId{ID}{\htmlClass{CLASS}{BODY}}`.
//!
//! The tokenizer writes them into math source to mark blanks; the renderer
//! reads them back and attaches `id`/`class` to the typeset body.

pub const HTML_ID: &str = r"\htmlId";
pub const HTML_CLASS: &str = r"\htmlClass";

/// Class of a revealed blank inside math.
pub const REVEALED_CLASS: &str = "blank-revealed";
/// Class of a hidden blank inside math.
pub const HIDDEN_CLASS: &str = "blank-hidden";
/// What a hidden blank shows in place of its answer.
pub const HIDDEN_PLACEHOLDER: &str = ".....";

/// Writes a directive attaching `id` and `class` to `body`.
pub fn embed(id: &str, class: &str, body: &str) -> String {
    format!("{HTML_ID}{{{id}}}{{{HTML_CLASS}{{{class}}}{{{body}}}}}")
}

/// Directive for a blank in its current state.
pub fn embed_blank(id: &str, answer: &str, revealed: bool) -> String {
    if revealed {
        embed(id, REVEALED_CLASS, answer)
    } else {
        embed(id, HIDDEN_CLASS, HIDDEN_PLACEHOLDER)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub id: String,
    pub class: Option<String>,
    pub body: String,
}

/// A math source with its directives pulled out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// Source with each directive replaced by `\text{<slot token>}`.
    pub template: String,
    /// Source with each directive replaced by its bare body in a group.
    pub plain: String,
    pub directives: Vec<Directive>,
}

/// Text the `n`-th directive leaves in the template; unique per expression.
pub fn slot_token(n: usize) -> String {
    format!("lessonmarkslot{n}end")
}

/// Finds every well-formed directive in `source`. Malformed ones stay as text.
pub fn extract(source: &str) -> Extracted {
    let mut template = String::with_capacity(source.len());
    let mut plain = String::with_capacity(source.len());
    let mut directives = vec![];
    let mut rest = source;

    while let Some(at) = rest.find(HTML_ID) {
        let (before, candidate) = rest.split_at(at);
        template.push_str(before);
        plain.push_str(before);

        match parse_directive(candidate) {
            Some((directive, consumed)) => {
                template.push_str(&format!(r"\text{{{}}}", slot_token(directives.len())));
                plain.push('{');
                plain.push_str(&directive.body);
                plain.push('}');
                directives.push(directive);
                rest = &candidate[consumed..];
            }
            None => {
                log::debug!("malformed {HTML_ID} directive kept as text");
                template.push_str(HTML_ID);
                plain.push_str(HTML_ID);
                rest = &candidate[HTML_ID.len()..];
            }
        }
    }
    template.push_str(rest);
    plain.push_str(rest);

    Extracted {
        template,
        plain,
        directives,
    }
}

/// Parses a directive at the start of `s`; returns it and the bytes consumed.
fn parse_directive(s: &str) -> Option<(Directive, usize)> {
    let after_cmd = s.strip_prefix(HTML_ID)?;
    let mut pos = HTML_ID.len();

    let (id, used) = group(after_cmd)?;
    pos += used;
    let (content, used) = group(&s[pos..])?;
    pos += used;

    let (class, body) = match content.trim_start().strip_prefix(HTML_CLASS) {
        Some(class_args) => {
            let (class, used) = group(class_args)?;
            let (body, _) = group(&class_args[used..])?;
            (Some(class.to_string()), body.to_string())
        }
        None => (None, content.to_string()),
    };

    Some((
        Directive {
            id: id.to_string(),
            class,
            body,
        },
        pos,
    ))
}

/// Reads one `{...}` group (after optional spaces) honouring nesting and
/// `\{` / `\}` escapes. Returns the inner text and the bytes consumed.
fn group(s: &str) -> Option<(&str, usize)> {
    let skipped = s.len() - s.trim_start().len();
    let bytes = s.as_bytes();
    if bytes.get(skipped) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    let mut i = skipped;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&s[skipped + 1..i], i + 1));
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}
