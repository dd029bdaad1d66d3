use stepfind::{Algorithm, Session};

fn main() -> stepfind::Result<()> {
    let text = "the quick brown fox jumps over the lazy dog";
    let mut session = Session::new(text, "the", Algorithm::BoyerMoore)?;

    let found = session.run_to_end().to_vec();
    println!("found {found:?} in {} comparisons", session.comparisons());

    Ok(())
}
