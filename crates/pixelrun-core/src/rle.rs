//! Run-length compression of symbol streams.
//!
//! A run is serialized as the bare symbol when it has length one, or as the
//! decimal count immediately followed by the symbol otherwise:
//!
//! ```text
//! AAAB  ->  [(3, 'A'), (1, 'B')]  ->  "3AB"
//! ```
//!
//! The format has no separators, so it is only unambiguous for palettes that
//! never use a digit as a symbol. [`Palette`](crate::palette::Palette)
//! enforces that at construction.

use std::fmt;

/// A maximal stretch of identical symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    /// Number of repetitions, at least 1.
    pub count: usize,
    pub symbol: char,
}

impl Run {
    pub fn new(count: usize, symbol: char) -> Self {
        debug_assert!(count >= 1, "runs have at least one symbol");
        Self { count, symbol }
    }

    /// Length of the serialized form in characters.
    #[inline]
    pub fn serialized_len(&self) -> usize {
        if self.count > 1 {
            decimal_digits(self.count) + 1
        } else {
            1
        }
    }

    /// Append the serialized form to `out`.
    pub fn write_to(&self, out: &mut String) {
        use fmt::Write;
        // Writing into a String cannot fail.
        let _ = write!(out, "{self}");
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count > 1 {
            write!(f, "{}{}", self.count, self.symbol)
        } else {
            write!(f, "{}", self.symbol)
        }
    }
}

#[inline]
fn decimal_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Incremental run builder.
///
/// Symbols are pushed one at a time; the pending run is flushed whenever the
/// symbol changes and once more by [`RunBuilder::finish`].
#[derive(Debug, Default)]
pub struct RunBuilder {
    runs: Vec<Run>,
    current: Option<Run>,
    symbols: usize,
}

impl RunBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, symbol: char) {
        self.symbols += 1;
        match &mut self.current {
            Some(run) if run.symbol == symbol => run.count += 1,
            current => {
                if let Some(done) = current.replace(Run::new(1, symbol)) {
                    self.runs.push(done);
                }
            }
        }
    }

    /// Number of symbols pushed so far.
    pub fn symbol_count(&self) -> usize {
        self.symbols
    }

    pub fn finish(mut self) -> Vec<Run> {
        if let Some(run) = self.current.take() {
            self.runs.push(run);
        }
        self.runs
    }
}

/// Compress a symbol stream into maximal runs.
pub fn compress(symbols: &[char]) -> Vec<Run> {
    let mut builder = RunBuilder::new();
    for &symbol in symbols {
        builder.push(symbol);
    }
    builder.finish()
}

/// Serialize runs into one string.
pub fn serialize(runs: &[Run]) -> String {
    let mut out = String::with_capacity(runs.iter().map(|r| r.serialized_len()).sum());
    for run in runs {
        run.write_to(&mut out);
    }
    out
}

/// Expand runs back into the symbol stream.
pub fn expand(runs: &[Run]) -> Vec<char> {
    let total = runs.iter().map(|r| r.count).sum();
    let mut symbols = Vec::with_capacity(total);
    for run in runs {
        symbols.extend(std::iter::repeat(run.symbol).take(run.count));
    }
    symbols
}


// ============================================================================
// Property-Based Tests
// ============================================================================
