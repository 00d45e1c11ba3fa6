use super::console::Console;
use super::error::RenderError;
use std::io::{BufRead, Write};
use std::time::Duration;

/// Ask a yes/no question. Only answers starting with one of `true_resp`
/// (case-insensitive) count as yes; an empty answer is no.
pub fn ask_user<W: Write, R: BufRead>(
    console: &mut Console<W>,
    input: &mut R,
    msg: &str,
    true_resp: &[char],
) -> Result<bool, RenderError> {
    let choices = true_resp
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    console.write_raw(&format!("{} [{}/N]: ", msg, choices))?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(answer
        .chars()
        .next()
        .and_then(|c| c.to_lowercase().next())
        .is_some_and(|c| true_resp.contains(&c)))
}

const FRAMES: [char; 4] = ['/', '-', '\\', '|'];

/// Console spinner driven by iteration: every step redraws one frame in
/// place. A bounded spinner yields one last step after its frames. A size
/// of zero spins without bound.
pub struct Spinner<'a, W: Write> {
    console: &'a mut Console<W>,
    size: Option<usize>,
    delay: Duration,
    step: usize,
    started: bool,
    done: bool,
}

impl<'a, W: Write> Spinner<'a, W> {
    pub fn new(console: &'a mut Console<W>, size: Option<usize>) -> Self {
        Self {
            console,
            size: size.filter(|&n| n > 0),
            delay: Duration::from_millis(100),
            step: 0,
            started: false,
            done: false,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl<W: Write> Iterator for Spinner<'_, W> {
    type Item = ();

    fn next(&mut self) -> Option<()> {
        if self.done {
            return None;
        }
        if self.size == Some(self.step) {
            self.done = true;
            return Some(());
        }

        if !self.started {
            self.started = true;
            if self.console.write_raw(" ").is_err() {
                self.done = true;
                return None;
            }
        }

        let frame = FRAMES[self.step % FRAMES.len()];
        if self.console.write_raw(&format!("\u{8}{}", frame)).is_err() {
            self.done = true;
            return None;
        }
        self.step += 1;
        std::thread::sleep(self.delay);
        Some(())
    }
}
