use crate::domain::model::{Choice, INVALID_INPUT_MESSAGE};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter your choice (rock, paper, or scissors): ";

/// The trimmed line the user typed and the choice it names, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntry {
    pub raw: String,
    pub choice: Option<Choice>,
}

impl UserEntry {
    fn from_line(raw: String) -> Self {
        let choice = raw.parse::<Choice>().ok();
        Self { raw, choice }
    }
}

// 非 UTF-8 的位元組以 U+FFFD 取代，視為無效輸入而不是 I/O 錯誤
fn read_trimmed_line<R: BufRead + ?Sized>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
}

pub(crate) fn read_entry<R: BufRead + ?Sized>(input: &mut R) -> Result<UserEntry> {
    let line = read_trimmed_line(input)?.unwrap_or_default();
    let entry = UserEntry::from_line(line);
    if entry.choice.is_none() {
        tracing::debug!("Rejected user input: {:?}", entry.raw);
    }
    Ok(entry)
}

/// Reads a single line and returns the label, or the invalid-input message.
///
/// End of input counts as invalid input. Only I/O failures are errors.
pub fn read_choice<R: BufRead + ?Sized>(input: &mut R) -> Result<String> {
    let entry = read_entry(input)?;
    Ok(match entry.choice {
        Some(choice) => choice.label().to_string(),
        None => INVALID_INPUT_MESSAGE.to_string(),
    })
}

/// Prompts until a valid choice arrives, at most `max_attempts` reads.
///
/// The last rejected line is kept in the entry when attempts run out or input
/// ends. The invalid-input message is only written before another prompt.
pub(crate) fn read_entry_with_retry<R, W>(
    input: &mut R,
    output: &mut W,
    max_attempts: usize,
) -> Result<UserEntry>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut last = UserEntry::from_line(String::new());
    for attempt in 1..=max_attempts {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = read_trimmed_line(input)? else {
            tracing::debug!("Input closed after {} attempt(s)", attempt - 1);
            return Ok(last);
        };

        last = UserEntry::from_line(line);
        if last.choice.is_some() {
            return Ok(last);
        }

        tracing::debug!("Attempt {}/{}: rejected {:?}", attempt, max_attempts, last.raw);
        if attempt < max_attempts {
            writeln!(output, "{}", INVALID_INPUT_MESSAGE)?;
        }
    }

    tracing::warn!("No valid choice after {} attempts", max_attempts);
    Ok(last)
}

/// Prompts until a valid choice arrives, at most `max_attempts` reads.
///
/// Returns `None` when attempts run out or input ends first.
pub fn read_choice_with_retry<R, W>(
    input: &mut R,
    output: &mut W,
    max_attempts: usize,
) -> Result<Option<Choice>>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    Ok(read_entry_with_retry(input, output, max_attempts)?.choice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_valid_choice() {
        let mut input = "rock".as_bytes();
        assert_eq!(read_choice(&mut input).unwrap(), "rock");
    }

    #[test]
    fn test_read_trims_whitespace() {
        let mut input = "  scissors \r\n".as_bytes();
        assert_eq!(read_choice(&mut input).unwrap(), "scissors");
    }

    #[test]
    fn test_read_invalid_choice() {
        let mut input = "gun\n".as_bytes();
        assert_eq!(read_choice(&mut input).unwrap(), INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn test_read_empty_input() {
        let mut input = "".as_bytes();
        assert_eq!(read_choice(&mut input).unwrap(), INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn test_non_utf8_input_is_invalid_not_an_error() {
        let mut input: &[u8] = b"\xff\xfe\n";
        assert_eq!(read_choice(&mut input).unwrap(), INVALID_INPUT_MESSAGE);

        let mut input: &[u8] = b"\xffrock\npaper\n";
        let mut output = Vec::new();
        assert_eq!(
            read_choice_with_retry(&mut input, &mut output, 2).unwrap(),
            Some(Choice::Paper)
        );
    }

    #[test]
    fn test_read_only_consumes_one_line() {
        let mut input = "gun\npaper\n".as_bytes();
        assert_eq!(read_choice(&mut input).unwrap(), INVALID_INPUT_MESSAGE);
        assert_eq!(read_choice(&mut input).unwrap(), "paper");
    }

    #[test]
    fn test_entry_keeps_raw_text() {
        let mut input = " gun \n".as_bytes();
        let entry = read_entry(&mut input).unwrap();
        assert_eq!(entry.raw, "gun");
        assert_eq!(entry.choice, None);
    }

    #[test]
    fn test_retry_until_valid() {
        let mut input = "gun\nPaper\npaper\n".as_bytes();
        let mut output = Vec::new();
        let choice = read_choice_with_retry(&mut input, &mut output, 3).unwrap();
        assert_eq!(choice, Some(Choice::Paper));

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches(PROMPT).count(), 3);
        assert_eq!(printed.matches(INVALID_INPUT_MESSAGE).count(), 2);
    }

    #[test]
    fn test_retry_gives_up_with_last_rejected_line() {
        let mut input = "gun\nknife\nrock\n".as_bytes();
        let mut output = Vec::new();
        let entry = read_entry_with_retry(&mut input, &mut output, 2).unwrap();
        assert_eq!(entry.raw, "knife");
        assert_eq!(entry.choice, None);

        // 最後一次失敗不在這裡印訊息，由呼叫端輸出結果
        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches(INVALID_INPUT_MESSAGE).count(), 1);
    }

    #[test]
    fn test_retry_stops_at_end_of_input() {
        let mut input = "gun\n".as_bytes();
        let mut output = Vec::new();
        let entry = read_entry_with_retry(&mut input, &mut output, 5).unwrap();
        assert_eq!(entry.raw, "gun");
        assert_eq!(entry.choice, None);

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches(PROMPT).count(), 2);
        assert_eq!(printed.matches(INVALID_INPUT_MESSAGE).count(), 1);
    }
}
