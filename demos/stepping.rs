//! A terminal driver that auto-plays a session, printing one report line
//! per step. The engine has no notion of time; the cadence lives here.

use std::env;
use std::thread;
use std::time::Duration;

use stepfind::{Algorithm, Session, StepReport};

fn main() -> stepfind::Result<()> {
    let mut args = env::args().skip(1);
    let text = args.next().unwrap_or_else(|| "hello world".to_string());
    let pattern = args.next().unwrap_or_else(|| "world".to_string());

    let mut session = Session::new(&text, &pattern, Algorithm::Kmp)?;
    loop {
        match session.step() {
            StepReport::Compared(step) => println!("{step}"),
            StepReport::Finished => break,
        }
        thread::sleep(Duration::from_millis(120));
    }
    println!(
        "matches: {:?}, comparisons: {}",
        session.found(),
        session.comparisons()
    );

    Ok(())
}
