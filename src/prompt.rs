//! Yes/no confirmation read from standard input.

use std::io::BufRead;

use crate::error::{Error, Result};
use crate::ui::Painter;

/// Print `question` and read one whitespace-delimited answer token.
///
/// Blank lines are skipped while waiting for a token. Anything after the first
/// token on its line is discarded, so one line answers one question. Closed or
/// unreadable input is an error.
pub fn confirm<R: BufRead, P: Painter>(question: &str, input: &mut R, out: &mut P) -> Result<bool> {
    out.plain(question)?;
    out.flush()?;
    let token = read_token(input)?;
    Ok(is_affirmative(&token))
}

fn read_token<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line).map_err(Error::Prompt)? == 0 {
            return Err(Error::PromptEof);
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(token.to_string());
        }
    }
}

/// `y` or `yes`, any case.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
