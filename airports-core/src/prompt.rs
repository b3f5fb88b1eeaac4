use crate::error::PromptError;

/// Blocking console input.
///
/// Returning [`PromptError::Cancelled`] is how a caller stops the otherwise
/// endless search and retry loops.
pub trait Prompter {
    /// Ask for free text.
    fn ask(&mut self, message: &str) -> Result<String, PromptError>;

    /// Ask the user to pick one of `choices`, returning the picked string.
    fn choose(&mut self, message: &str, choices: &[String]) -> Result<String, PromptError>;
}
