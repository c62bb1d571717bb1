use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use inquire::InquireError;
use std::io::{self, Write};

mod spinner;
mod theme;

pub use spinner::Spinner;
pub use theme::Style;

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Wraps a function that uses interactive prompts and handles user cancellation gracefully.
///
/// If the user cancels the prompt (Ctrl+C or Escape), this function prints a newline
/// to clean up the terminal and returns `Ok(())` instead of propagating the error.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Ok(()) => Ok(()),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Clears the terminal and moves the cursor home.
pub fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

/// Rings the terminal bell.
pub fn bell() {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\x07");
    let _ = stdout.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_prompt_cancellation_ok() {
        let result = handle_prompt_cancellation(|| Ok(()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_prompt_cancellation_operation_canceled() {
        let result = handle_prompt_cancellation(|| Err(InquireError::OperationCanceled.into()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_prompt_cancellation_operation_interrupted() {
        let result = handle_prompt_cancellation(|| Err(InquireError::OperationInterrupted.into()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_prompt_cancellation_other_error() {
        let result = handle_prompt_cancellation(|| Err(anyhow::anyhow!("Some other error")));
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("Some other error"));
    }

    #[test]
    fn test_is_prompt_cancelled_other_error() {
        let err = InquireError::Custom("test".into());
        assert!(!is_prompt_cancelled(&err));
    }
}
