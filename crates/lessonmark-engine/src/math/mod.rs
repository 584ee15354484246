//! # Math Rendering
//!
//! [`MathRenderer`] wraps a [`MathEngine`] (pulldown-latex by default) and adds
//! what the engine itself does not know about:
//!
//! - **Embedding directives**: `\htmlId{ID}{\htmlClass{CLASS}{BODY}}` written by
//!   the tokenizer for blanks inside math. When directives are trusted, each
//!   body is typeset in place inside an `<mrow id=.. class=..>`; when not, only
//!   the body is typeset. Trusting is only sound for internally authored
//!   content: ids and classes end up in the output markup.
//! - **Fallback**: an expression the engine rejects is shown as its source
//!   text; one bad formula never blanks out the rest of the document.
//! - **Readiness**: while the engine is not ready, expressions render as a
//!   neutral placeholder that is not cached.
//! - **Memoization** keyed by `(expression, display)`.

pub mod directive;
pub mod latex;

use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::HashMap;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::markup::math::{RawRun, split_math};
pub use latex::LatexEngine;

#[derive(Debug, thiserror::Error)]
pub enum MathError {
    #[error("LaTeX parse error: {0}")]
    Parse(String),
    #[error("MathML output error: {0}")]
    Output(String),
}

/// A typesetting backend turning LaTeX into presentational markup.
pub trait MathEngine {
    /// Whether the engine can typeset yet.
    fn is_ready(&self) -> bool {
        true
    }

    fn render(&self, latex: &str, display: bool) -> Result<String, MathError>;
}

/// What the renderer produced for one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathOutput {
    /// Engine markup.
    Rendered(String),
    /// The engine rejected the expression; holds its source text.
    Fallback(String),
    /// The engine is not ready yet; holds the source text.
    Pending(String),
}

impl MathOutput {
    pub fn html(&self) -> Cow<'_, str> {
        match self {
            MathOutput::Rendered(markup) => Cow::Borrowed(markup),
            MathOutput::Fallback(source) => Cow::Owned(format!(
                r#"<span class="math-fallback">{}</span>"#,
                encode_text(source)
            )),
            MathOutput::Pending(source) => Cow::Owned(format!(
                r#"<span class="math-pending">{}</span>"#,
                encode_text(source)
            )),
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, MathOutput::Rendered(_))
    }
}

pub struct MathRenderer<E = LatexEngine> {
    engine: E,
    trust_directives: bool,
    cache: RefCell<HashMap<(String, bool), MathOutput>>,
}

impl MathRenderer<LatexEngine> {
    pub fn new() -> Self {
        Self::with_engine(LatexEngine)
    }
}

impl Default for MathRenderer<LatexEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: MathEngine> MathRenderer<E> {
    /// A renderer over `engine` that trusts embedding directives.
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            trust_directives: true,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn trust_directives(mut self, trust: bool) -> Self {
        self.trust_directives = trust;
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Renders one expression (without `$` delimiters).
    pub fn render(&self, expression: &str, display: bool) -> MathOutput {
        if !self.engine.is_ready() {
            return MathOutput::Pending(expression.to_string());
        }

        let key = (expression.to_string(), display);
        if let Some(hit) = self.cache.borrow().get(&key) {
            return hit.clone();
        }

        let output = self.render_uncached(expression, display);
        self.cache.borrow_mut().insert(key, output.clone());
        output
    }

    /// Renders text that may contain `$...$` / `$$...$$` runs (titles,
    /// headers): math runs are typeset, everything else is escaped text.
    pub fn render_text(&self, text: &str) -> String {
        let mut html = String::new();
        for run in split_math(text) {
            match run {
                RawRun::Text(plain) => html.push_str(&encode_text(plain)),
                RawRun::Math { inner, display } => {
                    let output = self.render(inner.trim(), display);
                    if display {
                        html.push_str(r#"<span class="math-display">"#);
                        html.push_str(&output.html());
                        html.push_str("</span>");
                    } else {
                        html.push_str(&output.html());
                    }
                }
            }
        }
        html
    }

    /// Number of memoized expressions.
    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }

    fn render_uncached(&self, expression: &str, display: bool) -> MathOutput {
        let extracted = directive::extract(expression);

        if !self.trust_directives || extracted.directives.is_empty() {
            return self.render_plain(&extracted.plain, display);
        }

        let mut markup = match self.engine.render(&extracted.template, display) {
            Ok(markup) => markup,
            Err(e) => {
                log::warn!("math expression failed, showing source: {e}");
                return MathOutput::Fallback(extracted.plain);
            }
        };

        for (n, found) in extracted.directives.iter().enumerate() {
            let class_attr = found
                .class
                .as_deref()
                .map(|class| format!(r#" class="{}""#, encode_double_quoted_attribute(class)))
                .unwrap_or_default();
            let replacement = format!(
                r#"<mrow id="{}"{class_attr}>{}</mrow>"#,
                encode_double_quoted_attribute(&found.id),
                self.render_body(&found.body, display)
            );

            match splice(&markup, &directive::slot_token(n), &replacement) {
                Some(spliced) => markup = spliced,
                None => {
                    log::warn!(
                        "could not place directive `{}` in engine output, rendering without ids",
                        found.id
                    );
                    return self.render_plain(&extracted.plain, display);
                }
            }
        }

        MathOutput::Rendered(markup)
    }

    fn render_plain(&self, latex: &str, display: bool) -> MathOutput {
        match self.engine.render(latex, display) {
            Ok(markup) => MathOutput::Rendered(markup),
            Err(e) => {
                log::warn!("math expression failed, showing source: {e}");
                MathOutput::Fallback(latex.to_string())
            }
        }
    }

    /// Typesets a directive body as bare content (no outer `<math>`).
    fn render_body(&self, body: &str, display: bool) -> String {
        self.engine
            .render(body, display)
            .ok()
            .and_then(|markup| strip_math_wrapper(&markup).map(str::to_string))
            .unwrap_or_else(|| format!("<mtext>{}</mtext>", encode_text(body)))
    }
}

/// Inner content of the outermost `<math ...>...</math>` element.
fn strip_math_wrapper(markup: &str) -> Option<&str> {
    let start = markup.find("<math")?;
    let open_end = start + markup[start..].find('>')? + 1;
    let close = markup.rfind("</math>")?;
    (open_end <= close).then(|| &markup[open_end..close])
}

/// Replaces the element whose text is `token` with `replacement`.
fn splice(markup: &str, token: &str, replacement: &str) -> Option<String> {
    let at = markup.find(token)?;
    let open = markup[..at].rfind('<')?;
    let close_tag = at + markup[at..].find("</")?;
    let close_end = close_tag + markup[close_tag..].find('>')? + 1;

    let mut out = String::with_capacity(markup.len() + replacement.len());
    out.push_str(&markup[..open]);
    out.push_str(replacement);
    out.push_str(&markup[close_end..]);
    Some(out)
}
