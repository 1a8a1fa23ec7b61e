use crate::utils::error::{Result, ShelterError};
use std::io::{BufRead, Write};

/// Prompt on `output` and read lines from `input` until `accept` passes,
/// echoing `error_message` after each rejected line. Retries without bound.
pub fn prompt_until_valid<R, W, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    accept: F,
    error_message: &str,
) -> Result<String>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> bool,
{
    loop {
        let value = read_trimmed_line(input, output, prompt)?;
        if accept(&value) {
            return Ok(value);
        }
        writeln!(output, "{}", error_message)?;
    }
}

pub fn read_trimmed_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ShelterError::InputClosedError);
    }
    Ok(line.trim().to_string())
}

pub fn is_valid_species(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "dog" | "cat")
}

pub fn is_valid_age(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) && value.parse::<u32>().is_ok()
}
