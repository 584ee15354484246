//! LaTeX math rendering via pulldown-latex → MathML

use pulldown_latex::{
    Parser, Storage, config::DisplayMode, config::RenderConfig, mathml::push_mathml,
};

use super::{MathEngine, MathError};

/// The built-in engine. Compiled in, so it is always ready.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexEngine;

impl MathEngine for LatexEngine {
    fn render(&self, latex: &str, display: bool) -> Result<String, MathError> {
        let storage = Storage::new();
        let parser = Parser::new(latex, &storage);
        let config = RenderConfig {
            display_mode: if display {
                DisplayMode::Block
            } else {
                DisplayMode::Inline
            },
            ..Default::default()
        };

        // Collect events, tracking any errors
        let events: Vec<_> = parser.collect();
        let errors: Vec<String> = events
            .iter()
            .filter_map(|e| e.as_ref().err().map(|err| err.to_string()))
            .collect();
        if !errors.is_empty() {
            return Err(MathError::Parse(errors.join("; ")));
        }

        let mut mathml = String::new();
        push_mathml(&mut mathml, events.into_iter(), config)
            .map_err(|e| MathError::Output(e.to_string()))?;
        Ok(mathml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_inline_math() {
        let mathml = LatexEngine.render("x^2", false).unwrap();
        assert!(mathml.contains("<math"));
        assert!(mathml.contains("</math>"));
    }

    #[test]
    fn renders_display_fraction() {
        let mathml = LatexEngine.render(r"\frac{a}{b}", true).unwrap();
        assert!(mathml.contains("<mfrac"));
    }

    #[test]
    fn rejects_unclosed_group() {
        assert!(LatexEngine.render(r"\frac{a", false).is_err());
    }
}
