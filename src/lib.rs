//! Steppable, introspectable exact string matching.
//!
//! This crate implements two classical algorithms, Knuth-Morris-Pratt and
//! Boyer-Moore with the bad-character rule, as engines that are driven one
//! character comparison at a time. Between steps the entire engine state is
//! open for inspection: the precomputed table, the cursors, the running
//! comparison count, and every match found so far. That makes the crate
//! useful wherever the *process* of matching matters as much as the result,
//! e.g. algorithm visualizers, teaching tools, and tracing.
//!
//! # Features
//!
//! - Exactly one comparison per [`step`][Session::step]; no hidden loops
//! - A [`StepReport`] describing each step: positions and bytes compared,
//!   outcome, any match recorded, and the shift applied
//! - Standalone table construction ([`LpsTable`], [`BadCharTable`]) for
//!   displaying the precomputation on its own
//! - Overlapping matches are found by both engines
//! - Driver helpers composed purely of single steps:
//!   [`steps`][Session::steps], [`run_until_match`][Session::run_until_match],
//!   [`run_to_end`][Session::run_to_end]
//!
//! # Getting started
//!
//! Your entry point is the [`Session`] struct. A session is created from a
//! text, a non-empty pattern, and an [`Algorithm`], and owns that one search
//! until it is dropped.
//!
//! ```
//! use stepfind::{Algorithm, Session};
//!
//! let mut session = Session::new("hello world", "world", Algorithm::Kmp)?;
//! assert_eq!(session.run_to_end(), &[6]);
//! assert!(session.finished());
//! # Ok::<(), stepfind::Error>(())
//! ```
//!
//! # Stepping
//!
//! Instead of running to completion the session can be advanced one
//! comparison at a time. Each productive step returns a report that is a
//! pure projection of what the step did.
//!
//! ```
//! use stepfind::{Algorithm, Session, StepReport};
//!
//! let mut session = Session::new("aaaa", "aa", Algorithm::BoyerMoore)?;
//! while let StepReport::Compared(step) = session.step() {
//!     println!("{step}");
//! }
//! assert_eq!(session.found(), &[0, 1, 2]);
//! # Ok::<(), stepfind::Error>(())
//! ```
//!
//! Once finished, further calls to [`step`][Session::step] are no-ops that
//! keep returning [`StepReport::Finished`], so a driver can poll on a timer
//! without guarding.
//!
//! # Tables
//!
//! The precomputed tables can also be built without a session, e.g. to
//! render them before stepping begins.
//!
//! ```
//! use stepfind::LpsTable;
//!
//! let lps = LpsTable::build("ababaca")?;
//! assert_eq!(lps.as_slice(), &[0, 0, 1, 2, 3, 0, 1]);
//! # Ok::<(), stepfind::Error>(())
//! ```

mod error;
mod report;
mod session;
mod table;

pub use crate::error::Error;
pub use crate::report::{Comparison, Outcome, StepReport};
pub use crate::session::{Session, Steps};
pub use crate::table::{BadCharTable, LpsTable, Table};

/// A type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Selects which algorithm a table or session is built for.
///
/// The two engines share nothing at runtime. Changing the algorithm, text,
/// or pattern always means creating a new [`Session`]; no cursors or tables
/// carry over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Algorithm {
    /// Knuth-Morris-Pratt, driven by the failure function.
    Kmp,
    /// Boyer-Moore, using only the bad-character rule.
    BoyerMoore,
}
