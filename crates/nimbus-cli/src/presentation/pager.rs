use super::error::RenderError;
use std::io::{self, BufRead, Write};

/// Blocks between pages of output.
pub trait Pager {
    /// Show `prompt` and wait for the reader to continue.
    fn hold(&mut self, prompt: &str) -> io::Result<()>;
}

/// Prints the prompt on stdout and waits for one line on stdin.
pub struct StdinPager;

impl Pager for StdinPager {
    fn hold(&mut self, prompt: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

/// Never blocks. Used when input is not interactive.
pub struct NoPager;

impl Pager for NoPager {
    fn hold(&mut self, _prompt: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Decide whether more items follow, holding the page every `limit` items.
///
/// Returns `false` once `index` reaches `maxlen`. A `limit` of 0 never holds.
pub fn page_hold(
    index: usize,
    limit: usize,
    maxlen: usize,
    pager: &mut dyn Pager,
) -> Result<bool, RenderError> {
    if index >= maxlen {
        return Ok(false);
    }
    if index > 0 && limit > 0 && index % limit == 0 {
        let prompt = format!(
            "({} listed - {} more - \"enter\" to continue)",
            index,
            maxlen - index
        );
        pager.hold(&prompt)?;
    }
    Ok(true)
}
