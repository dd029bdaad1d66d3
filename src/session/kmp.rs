use crate::report::{Comparison, Outcome, StepReport};
use crate::table::LpsTable;

/// The Knuth-Morris-Pratt half of the engine.
///
/// The cursors advance exactly as in the classic linear scan, the only
/// difference being that the loop lives outside. The following diagram
/// describes the variable naming.
///
/// ```text
/// lorem ipsum dolor
///          ^
///          i        text cursor, never moves backward
///     ipsum
///          ^
///          j        pattern cursor, rewinds through the failure function
/// ```
///
/// The pattern alignment within the text is always `i - j`.
#[derive(Debug, Clone)]
pub(crate) struct Kmp {
    pub(crate) text: Vec<u8>,
    pub(crate) pattern: Vec<u8>,
    pub(crate) lps: LpsTable,
    i: usize,
    j: usize,
    pub(crate) comparisons: usize,
    pub(crate) finished: bool,
    pub(crate) found: Vec<usize>,
}

impl Kmp {
    pub(crate) fn new(text: Vec<u8>, pattern: Vec<u8>, lps: LpsTable) -> Self {
        Self {
            text,
            pattern,
            lps,
            i: 0,
            j: 0,
            comparisons: 0,
            finished: false,
            found: Vec::new(),
        }
    }

    /// Perform one comparison and advance the cursors accordingly.
    pub(crate) fn step(&mut self) -> StepReport {
        if self.finished {
            return StepReport::Finished;
        }
        if self.i >= self.text.len() {
            self.finished = true;
            return StepReport::Finished;
        }

        let m = self.pattern.len();
        let (i, j) = (self.i, self.j);
        let text_byte = self.text[i];
        let pattern_byte = self.pattern[j];
        let outcome = if text_byte == pattern_byte {
            Outcome::Match
        } else {
            Outcome::Mismatch
        };
        self.comparisons += 1;

        let mut matched_at = None;
        match outcome {
            Outcome::Match => {
                self.i += 1;
                self.j += 1;
                if self.j == m {
                    // Full match. Continuing with `lps[m - 1]` instead of
                    // resetting to zero keeps overlapping occurrences
                    // reachable.
                    let at = self.i - m;
                    self.found.push(at);
                    matched_at = Some(at);
                    self.j = self.lps[m - 1];
                }
            }
            Outcome::Mismatch => {
                if self.j != 0 {
                    // The first `j` pattern bytes matched; the failure
                    // function says how much of that prefix still lines up,
                    // so the text cursor stays put.
                    self.j = self.lps[self.j - 1];
                } else {
                    self.i += 1;
                }
            }
        }

        StepReport::Compared(Comparison {
            alignment: i - j,
            text_index: i,
            pattern_index: j,
            text_byte,
            pattern_byte,
            outcome,
            matched_at,
            shift: None,
        })
    }
}
