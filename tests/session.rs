use stepfind::{Algorithm, Error, Session, StepReport};

const CASES: &[(&str, &str)] = &[
    ("hello world", "world"),
    ("aaaa", "aa"),
    ("aaaaaaaa", "aaa"),
    ("abcdef", "xyz"),
    ("xbaa", "baa"),
    ("aabaa", "aa"),
    ("abababab", "abab"),
    ("mississippi", "issi"),
    ("mississippi", "ss"),
    ("banana", "ana"),
    ("aaa", "aaa"),
    ("", "a"),
    ("a", "a"),
    ("abc", "abcd"),
    ("aaabaaab", "aaab"),
    ("the quick brown fox jumps over the lazy dog", "the"),
    ("abacabadabacaba", "aba"),
];

fn naive(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&s| &text[s..s + pattern.len()] == pattern)
        .collect()
}

#[test]
fn algorithms_find_identical_matches() {
    for &(text, pattern) in CASES {
        let expected = naive(text.as_bytes(), pattern.as_bytes());
        for algorithm in [Algorithm::Kmp, Algorithm::BoyerMoore] {
            let mut session = Session::new(text, pattern, algorithm).unwrap();
            assert_eq!(
                session.run_to_end(),
                expected,
                "{algorithm:?} disagrees on ({text:?}, {pattern:?})"
            );
            assert!(session.finished());
        }
    }
}

#[test]
fn stepping_always_terminates() {
    for &(text, pattern) in CASES {
        let (n, m) = (text.len(), pattern.len());
        let cap = (n + 2) * (m + 1) + 2;
        for algorithm in [Algorithm::Kmp, Algorithm::BoyerMoore] {
            let mut session = Session::new(text, pattern, algorithm).unwrap();
            let mut steps = 0;
            while !session.finished() {
                session.step();
                steps += 1;
                assert!(
                    steps <= cap,
                    "{algorithm:?} did not finish ({text:?}, {pattern:?})"
                );
            }
        }
    }
}

#[test]
fn terminal_step_is_an_idempotent_no_op() {
    for algorithm in [Algorithm::Kmp, Algorithm::BoyerMoore] {
        let mut session = Session::new("abracadabra", "abra", algorithm).unwrap();
        session.run_to_end();

        let comparisons = session.comparisons();
        let found = session.found().to_vec();
        for _ in 0..5 {
            assert_eq!(session.step(), StepReport::Finished);
            assert!(session.finished());
            assert_eq!(session.comparisons(), comparisons);
            assert_eq!(session.found(), found);
        }
    }
}

#[test]
fn comparisons_count_productive_steps_exactly() {
    for &(text, pattern) in CASES {
        for algorithm in [Algorithm::Kmp, Algorithm::BoyerMoore] {
            let mut session = Session::new(text, pattern, algorithm).unwrap();
            let mut productive = 0;
            loop {
                let report = session.step();
                if report.is_finished() {
                    assert_eq!(report.comparison(), None);
                    break;
                }
                assert!(report.comparison().is_some());
                productive += 1;
            }
            assert_eq!(session.comparisons(), productive);
        }
    }
}

#[test]
fn no_match_needs_at_most_n_comparisons() {
    for algorithm in [Algorithm::Kmp, Algorithm::BoyerMoore] {
        let mut session = Session::new("abcdef", "xyz", algorithm).unwrap();
        assert_eq!(session.run_to_end(), &[] as &[usize]);
        assert!(session.comparisons() <= 6);
    }
}

#[test]
fn run_until_match_stops_at_the_first_match() {
    for algorithm in [Algorithm::Kmp, Algorithm::BoyerMoore] {
        let mut session = Session::new("abab abab", "abab", algorithm).unwrap();

        assert_eq!(session.run_until_match(), Some(0));
        assert_eq!(session.found(), &[0]);
        assert!(!session.finished());

        // Already satisfied, so calling again must not step.
        let comparisons = session.comparisons();
        assert_eq!(session.run_until_match(), Some(0));
        assert_eq!(session.comparisons(), comparisons);

        assert_eq!(session.run_to_end(), &[0, 5]);
    }
}

#[test]
fn run_until_match_on_a_matchless_text() {
    let mut session = Session::new("abcdef", "xyz", Algorithm::BoyerMoore).unwrap();
    assert_eq!(session.run_until_match(), None);
    assert!(session.finished());
}

#[test]
fn steps_iterator_drains_the_session() {
    let mut session = Session::new("mississippi", "issi", Algorithm::Kmp).unwrap();
    let count = session.steps().count();
    assert_eq!(count, session.comparisons());
    assert!(session.finished());
    assert_eq!(session.steps().next(), None);
    assert_eq!(session.found(), &[1, 4]);
}

#[test]
fn found_is_ascending() {
    for &(text, pattern) in CASES {
        for algorithm in [Algorithm::Kmp, Algorithm::BoyerMoore] {
            let mut session = Session::new(text, pattern, algorithm).unwrap();
            let found = session.run_to_end();
            assert!(found.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn session_exposes_its_inputs_and_table() {
    let session = Session::new("banana", "ana", Algorithm::Kmp).unwrap();
    assert_eq!(session.text(), b"banana");
    assert_eq!(session.pattern(), b"ana");
    assert_eq!(session.algorithm(), Algorithm::Kmp);
    assert_eq!(session.lps().unwrap().as_slice(), &[0, 0, 1]);
    assert!(session.bad_char().is_none());

    let session = Session::new("banana", "ana", Algorithm::BoyerMoore).unwrap();
    assert_eq!(session.algorithm(), Algorithm::BoyerMoore);
    let table = session.bad_char().unwrap();
    assert_eq!(table.offset(b'a'), 0);
    assert_eq!(table.offset(b'n'), 1);
    assert!(session.lps().is_none());
}

#[test]
fn empty_pattern_is_rejected_for_both_algorithms() {
    for algorithm in [Algorithm::Kmp, Algorithm::BoyerMoore] {
        assert_eq!(
            Session::new("text", "", algorithm).unwrap_err(),
            Error::InvalidPattern
        );
    }
}
