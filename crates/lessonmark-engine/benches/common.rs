// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markup(lines: usize) -> String {
    let base = [
        "Une **fonction** $f$ associe à chaque réel $x$ un ___unique___ nombre $f(x)$.",
        ">> À retenir",
        "Si $a + ___b___ = c$ alors $$\\frac{a}{c} + \\frac{b}{c} = 1$$ pour $c \\neq 0$.",
        "Le domaine de définition est noté ___$D_f$___ dans la suite du cours.",
    ];
    base.iter().cycle().take(lines).copied().collect::<Vec<_>>().join("\n")
}

#[allow(dead_code)]
pub fn generate_expressions(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!(r"\frac{{{i}}}{{x + {i}}} + \sqrt{{{i}}}"))
        .collect()
}
