//! Reading player input.

use std::io::{BufRead, Write};

/// Environment variable holding scripted input; used instead of stdin when set.
pub const TEST_INPUT_ENV: &str = "YAHTZEE_TEST_INPUT";

/// Reads one line and trims it. `None` on EOF or a read error.
///
/// ```rust
/// use std::io::Cursor;
/// # use yahtzee_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("1,3\n");
/// assert_eq!(read_stdin_line(&mut input), Some("1,3".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Writes `prompt` without a newline, flushes, then reads the answer.
pub fn prompt_line(
    prompt: &str,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> std::io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    Ok(read_stdin_line(stdin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_stdin_line_with_whitespace() {
        let mut cursor = Cursor::new(b"  all  \n");
        assert_eq!(read_stdin_line(&mut cursor), Some("all".to_string()));
    }

    #[test]
    fn test_read_stdin_line_empty_after_trim() {
        let mut cursor = Cursor::new(b"   \n");
        assert_eq!(read_stdin_line(&mut cursor), Some(String::new()));
    }

    #[test]
    fn test_read_stdin_line_eof() {
        let mut cursor = Cursor::new(b"");
        assert_eq!(read_stdin_line(&mut cursor), None);
    }

    #[test]
    fn prompt_is_written_before_reading() {
        let mut out = Vec::new();
        let mut cursor = Cursor::new(b"7\n");
        let answer = prompt_line("Pick: ", &mut out, &mut cursor).unwrap();
        assert_eq!(answer.as_deref(), Some("7"));
        assert_eq!(String::from_utf8(out).unwrap(), "Pick: ");
    }
}
