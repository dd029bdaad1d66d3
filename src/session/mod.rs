//! Sessions own one search and advance it one comparison at a time.

mod bm;
mod kmp;

use crate::report::{Comparison, StepReport};
use crate::table::{BadCharTable, LpsTable};
use crate::{Algorithm, Result};

use self::bm::BoyerMoore;
use self::kmp::Kmp;

/// A single in-progress or completed search over a fixed (text, pattern,
/// algorithm) triple.
///
/// A session is driven by repeatedly calling [`step`][Session::step]; each
/// call performs at most one comparison and reports what it did, and all
/// state is observable in between. To search a different text or pattern,
/// or to switch algorithm, create a new session; sessions are never reused.
///
/// ```
/// use stepfind::{Algorithm, Session};
///
/// let mut session = Session::new("aaaa", "aa", Algorithm::Kmp)?;
/// session.step();
/// assert_eq!(session.comparisons(), 1);
/// # Ok::<(), stepfind::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    imp: Imp,
}

#[derive(Debug, Clone)]
enum Imp {
    Kmp(Kmp),
    BoyerMoore(BoyerMoore),
}

impl Session {
    /// Create a session over the given text and pattern.
    ///
    /// The text may be empty or shorter than the pattern; such a session
    /// simply finishes on its first step without recording any match.
    ///
    /// # Errors
    ///
    /// Fails if the pattern is empty.
    pub fn new<T, P>(text: T, pattern: P, algorithm: Algorithm) -> Result<Self>
    where
        T: AsRef<[u8]>,
        P: AsRef<[u8]>,
    {
        let text = text.as_ref().to_vec();
        let pattern = pattern.as_ref().to_vec();
        let imp = match algorithm {
            Algorithm::Kmp => {
                let lps = LpsTable::build(&pattern)?;
                Imp::Kmp(Kmp::new(text, pattern, lps))
            }
            Algorithm::BoyerMoore => {
                let bad_char = BadCharTable::build(&pattern)?;
                Imp::BoyerMoore(BoyerMoore::new(text, pattern, bad_char))
            }
        };
        Ok(Self { imp })
    }

    /// Advance the search by exactly one comparison.
    ///
    /// Once the session is finished this is a no-op that keeps returning
    /// [`StepReport::Finished`], so drivers can poll without guarding.
    pub fn step(&mut self) -> StepReport {
        match &mut self.imp {
            Imp::Kmp(s) => s.step(),
            Imp::BoyerMoore(s) => s.step(),
        }
    }

    /// An iterator that steps the session, yielding one [`Comparison`] per
    /// productive step and ending when the session finishes.
    pub fn steps(&mut self) -> Steps<'_> {
        Steps { session: self }
    }

    /// Drive the session until the first match is recorded, and return it.
    ///
    /// Returns [`None`] if the text is exhausted without a match. If a
    /// match was already recorded this returns it without stepping.
    pub fn run_until_match(&mut self) -> Option<usize> {
        while self.found().is_empty() && !self.finished() {
            self.step();
        }
        self.found().first().copied()
    }

    /// Drive the session to completion and return every match start.
    pub fn run_to_end(&mut self) -> &[usize] {
        while !self.finished() {
            self.step();
        }
        self.found()
    }

    /// The algorithm this session runs.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        match &self.imp {
            Imp::Kmp(_) => Algorithm::Kmp,
            Imp::BoyerMoore(_) => Algorithm::BoyerMoore,
        }
    }

    /// The text being searched.
    #[inline]
    pub fn text(&self) -> &[u8] {
        match &self.imp {
            Imp::Kmp(s) => &s.text,
            Imp::BoyerMoore(s) => &s.text,
        }
    }

    /// The pattern being searched for.
    #[inline]
    pub fn pattern(&self) -> &[u8] {
        match &self.imp {
            Imp::Kmp(s) => &s.pattern,
            Imp::BoyerMoore(s) => &s.pattern,
        }
    }

    /// Whether the search has exhausted the text.
    #[inline]
    pub fn finished(&self) -> bool {
        match &self.imp {
            Imp::Kmp(s) => s.finished,
            Imp::BoyerMoore(s) => s.finished,
        }
    }

    /// The total number of comparisons performed so far.
    #[inline]
    pub fn comparisons(&self) -> usize {
        match &self.imp {
            Imp::Kmp(s) => s.comparisons,
            Imp::BoyerMoore(s) => s.comparisons,
        }
    }

    /// Every match start recorded so far, in ascending order, overlapping
    /// occurrences included.
    #[inline]
    pub fn found(&self) -> &[usize] {
        match &self.imp {
            Imp::Kmp(s) => &s.found,
            Imp::BoyerMoore(s) => &s.found,
        }
    }

    /// The failure function, for display. `None` for Boyer-Moore sessions.
    #[inline]
    pub fn lps(&self) -> Option<&LpsTable> {
        match &self.imp {
            Imp::Kmp(s) => Some(&s.lps),
            Imp::BoyerMoore(_) => None,
        }
    }

    /// The bad-character table, for display. `None` for KMP sessions.
    #[inline]
    pub fn bad_char(&self) -> Option<&BadCharTable> {
        match &self.imp {
            Imp::Kmp(_) => None,
            Imp::BoyerMoore(s) => Some(&s.bad_char),
        }
    }
}

/// An iterator over the remaining steps of a session.
///
/// Created by [`Session::steps`]. Each `next` call performs one step; the
/// iterator ends when the session reaches its terminal state.
#[derive(Debug)]
pub struct Steps<'a> {
    session: &'a mut Session,
}

impl Iterator for Steps<'_> {
    type Item = Comparison;

    fn next(&mut self) -> Option<Comparison> {
        match self.session.step() {
            StepReport::Compared(c) => Some(c),
            StepReport::Finished => None,
        }
    }
}
