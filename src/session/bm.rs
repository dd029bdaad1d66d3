use crate::report::{Comparison, Outcome, StepReport};
use crate::table::BadCharTable;

/// The Boyer-Moore half of the engine, using only the bad-character rule.
///
/// Comparisons run right to left within the current window. The following
/// diagram describes the variable naming.
///
/// ```text
/// lorem ipsum dolor
///       ipsum
///       ^   ^
///       s   s + j   window start and comparison position
/// ```
///
/// `j` counts down from `m - 1` and is reset whenever the window shifts,
/// so it is always in `0..m`.
#[derive(Debug, Clone)]
pub(crate) struct BoyerMoore {
    pub(crate) text: Vec<u8>,
    pub(crate) pattern: Vec<u8>,
    pub(crate) bad_char: BadCharTable,
    s: usize,
    j: usize,
    pub(crate) comparisons: usize,
    pub(crate) finished: bool,
    pub(crate) found: Vec<usize>,
}

impl BoyerMoore {
    pub(crate) fn new(text: Vec<u8>, pattern: Vec<u8>, bad_char: BadCharTable) -> Self {
        let j = pattern.len() - 1;
        Self {
            text,
            pattern,
            bad_char,
            s: 0,
            j,
            comparisons: 0,
            finished: false,
            found: Vec::new(),
        }
    }

    /// Perform one comparison and advance the window accordingly.
    pub(crate) fn step(&mut self) -> StepReport {
        if self.finished {
            return StepReport::Finished;
        }
        let n = self.text.len();
        let m = self.pattern.len();
        if self.s + m > n {
            // No remaining window fits; also covers a pattern longer than
            // the text.
            self.finished = true;
            return StepReport::Finished;
        }

        let (s, j) = (self.s, self.j);
        let text_index = s + j;
        let text_byte = self.text[text_index];
        let pattern_byte = self.pattern[j];
        let outcome = if text_byte == pattern_byte {
            Outcome::Match
        } else {
            Outcome::Mismatch
        };
        self.comparisons += 1;

        let mut matched_at = None;
        let mut shift = None;
        match outcome {
            Outcome::Match if j > 0 => self.j -= 1,
            Outcome::Match => {
                // Every pattern byte matched; the window starts a full
                // occurrence.
                self.found.push(s);
                matched_at = Some(s);
                // Shift using the byte just past the window: line its
                // rightmost occurrence in the pattern up under it, or jump
                // the whole window past it if it never occurs.
                let by = match self.text.get(s + m) {
                    Some(&next) => match self.bad_char.last_index(next) {
                        Some(k) => m - k,
                        None => m + 1,
                    },
                    None => 1,
                };
                shift = Some(by);
                self.s += by;
                self.j = m - 1;
            }
            Outcome::Mismatch => {
                // Bad-character rule: line the rightmost occurrence of the
                // offending text byte up with the mismatch position. The
                // floor of one keeps the window moving when that occurrence
                // sits at or to the right of `j`.
                let by = match self.bad_char.last_index(text_byte) {
                    Some(k) if k < j => j - k,
                    Some(_) => 1,
                    None => j + 1,
                };
                shift = Some(by);
                self.s += by;
                self.j = m - 1;
            }
        }

        StepReport::Compared(Comparison {
            alignment: s,
            text_index,
            pattern_index: j,
            text_byte,
            pattern_byte,
            outcome,
            matched_at,
            shift,
        })
    }
}
