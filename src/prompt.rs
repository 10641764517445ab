//! Console interaction: the username prompt and the closing pause.
use std::io::{BufRead, Write};

use crate::error::InputError;

/// Prompt shown before reading the username.
pub const USERNAME_PROMPT: &str = "Enter windows username : ";

/// Prompt shown before the program exits.
pub const PAUSE_PROMPT: &str = "Press Enter to continue . . . ";

/// First whitespace-delimited token of `raw`, or `""` if there is none.
///
/// ```
/// use mpv_setup_cli::prompt::first_token;
///
/// assert_eq!(first_token("  Koby \r\n"), "Koby");
/// assert_eq!(first_token("Koby Smith"), "Koby");
/// assert_eq!(first_token("   "), "");
/// ```
#[must_use]
pub fn first_token(raw: &str) -> &str {
    raw.split_whitespace().next().unwrap_or_default()
}

/// Print [`USERNAME_PROMPT`] and read one line, returning its first token.
///
/// # Errors
///
/// Returns [`InputError::Eof`] if input is already closed and
/// [`InputError::Io`] if the console cannot be read or written.
pub fn read_username<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<String, InputError> {
    write!(output, "{USERNAME_PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Eof);
    }
    Ok(first_token(&line).to_string())
}

/// Print [`PAUSE_PROMPT`] and wait for a line (or end of input).
///
/// # Errors
///
/// Returns [`InputError::Io`] if the console cannot be read or written.
pub fn pause<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), InputError> {
    write!(output, "{PAUSE_PROMPT}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    writeln!(output)?;
    Ok(())
}
