//! Shell-like tokenizer for command lines.
//!
//! # Quoting Rules
//!
//! - Double quotes (`"`) group characters together
//! - Single quotes (`'`) group characters together
//! - Backslash (`\`) escapes the closing quote or a backslash within quotes
//! - Unquoted tokens are terminated by whitespace
//! - Adjacent quoted and unquoted pieces join into one token
//!
//! Quotes are removed from the resulting tokens.
//!
//! # Example
//!
//! ```
//! use widgetboard_console::tokenize::split_args;
//!
//! let args = split_args(r#"form cwpp "Threat Detection" 'Live status'"#).unwrap();
//! assert_eq!(args, ["form", "cwpp", "Threat Detection", "Live status"]);
//! ```

use crate::error::CommandError;

/// Splits a command line into arguments.
///
/// # Errors
///
/// Returns [`CommandError::UnclosedQuote`] if a quote is opened but never
/// closed.
pub fn split_args(line: &str) -> Result<Vec<String>, CommandError> {
    let mut args = Vec::new();
    let mut current = String::new();
    // Distinguishes `""` (an empty argument) from no argument at all.
    let mut in_token = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' | '\'' => {
                in_token = true;
                read_quoted(&mut chars, ch, &mut current)?;
            }
            c if c.is_whitespace() => {
                if in_token {
                    args.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                in_token = true;
                current.push(c);
            }
        }
    }

    if in_token {
        args.push(current);
    }

    Ok(args)
}

/// Consumes characters up to and including the closing `quote_char`, pushing
/// the unescaped contents onto `out`.
///
/// Handles escape sequences within the quoted string:
/// - `\"` within double quotes becomes a literal `"`
/// - `\'` within single quotes becomes a literal `'`
/// - `\\` becomes a literal `\`
fn read_quoted<I>(
    chars: &mut std::iter::Peekable<I>,
    quote_char: char,
    out: &mut String,
) -> Result<(), CommandError>
where
    I: Iterator<Item = char>,
{
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.peek() {
                Some(&next_ch) if next_ch == quote_char || next_ch == '\\' => {
                    out.push(next_ch);
                    chars.next();
                }
                // Keep the backslash for other characters
                _ => out.push(ch),
            }
        } else if ch == quote_char {
            return Ok(());
        } else {
            out.push(ch);
        }
    }

    Err(CommandError::UnclosedQuote(quote_char))
}
