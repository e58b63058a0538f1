//! Options that control how ring elements are rendered.
//!
//! Every ring formats its elements through [Ring::format](crate::domains::Ring::format),
//! which receives a [PrintOptions]. The default options produce the
//! human-readable form `2 x^2 + x + 1`, while [PrintOptions::compact]
//! yields `2*x^2+x+1`, which can be pasted into most other software.

/// Formatting options for ring elements.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PrintOptions {
    /// The symbol placed between a coefficient and a variable power.
    pub multiplication_operator: char,
    /// The symbol placed between a variable and its exponent.
    pub power_operator: char,
    /// Surround `+` and the `/` of compound fractions with spaces.
    pub spaced_operators: bool,
    /// Wrap non-integral fractions in parentheses when they multiply a
    /// variable power, e.g. `(1/2) x^2` instead of `1/2 x^2`.
    pub parenthesize_fractions: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl PrintOptions {
    pub const fn new() -> PrintOptions {
        PrintOptions {
            multiplication_operator: ' ',
            power_operator: '^',
            spaced_operators: true,
            parenthesize_fractions: true,
        }
    }

    /// Print without any whitespace and with an explicit `*`.
    pub const fn compact() -> PrintOptions {
        PrintOptions {
            multiplication_operator: '*',
            power_operator: '^',
            spaced_operators: false,
            parenthesize_fractions: true,
        }
    }

    pub fn sum_separator(&self) -> &'static str {
        if self.spaced_operators {
            " + "
        } else {
            "+"
        }
    }

    pub fn division_separator(&self) -> &'static str {
        if self.spaced_operators {
            " / "
        } else {
            "/"
        }
    }
}
