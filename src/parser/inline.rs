//! Inline `**bold**` / `*italic*` scanning.

use crate::model::StyledRun;
use regex::Regex;

/// Splits text into plain, bold and italic runs.
///
/// Matching is leftmost-first and non-greedy: `**x**` is tried before `*x*`
/// at every position, spans never nest and bold never combines with italic.
#[derive(Debug, Clone)]
pub struct InlineScanner {
    pattern: Regex,
}

impl InlineScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\*\*.*?\*\*|\*.*?\*").expect("valid inline markup regex"),
        }
    }

    /// Scan text into runs, in source order. Empty runs are not emitted.
    pub fn scan(&self, text: &str) -> Vec<StyledRun> {
        let mut runs = Vec::new();
        let mut last = 0;

        for m in self.pattern.find_iter(text) {
            push_run(&mut runs, StyledRun::plain(&text[last..m.start()]));
            push_run(&mut runs, span_run(m.as_str()));
            last = m.end();
        }
        push_run(&mut runs, StyledRun::plain(&text[last..]));

        runs
    }
}

impl Default for InlineScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a matched span by its delimiters.
fn span_run(span: &str) -> StyledRun {
    if span.starts_with("**") && span.ends_with("**") {
        // a bare "**" is an empty span
        let inner = if span.len() >= 4 {
            &span[2..span.len() - 2]
        } else {
            ""
        };
        StyledRun::bold(inner)
    } else {
        StyledRun::italic(&span[1..span.len() - 1])
    }
}

fn push_run(runs: &mut Vec<StyledRun>, run: StyledRun) {
    if !run.is_empty() {
        runs.push(run);
    }
}
