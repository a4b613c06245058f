//! Chat command entry point.

use async_trait::async_trait;

use super::error::DelayError;
use super::service::DelayService;

/// A text command invoked by a chat dispatcher.
///
/// The dispatcher splits the user's message into arguments and relays the
/// returned text, or the error, back to the chat.
#[async_trait]
pub trait Command: Send + Sync {
    /// Name the command is registered under.
    fn name(&self) -> &'static str;

    /// Run the command with its arguments.
    async fn execute(&self, args: &[String]) -> Result<String, DelayError>;
}

/// `delay <from> <to> [categories]`
#[async_trait]
impl Command for DelayService {
    fn name(&self) -> &'static str {
        "delay"
    }

    async fn execute(&self, args: &[String]) -> Result<String, DelayError> {
        match args {
            [from, to] => self.next_departure(from, to, None).await,
            [from, to, categories] => {
                self.next_departure(from, to, Some(categories.as_str()))
                    .await
            }
            _ => Err(DelayError::InvalidArgument(format!(
                "usage: {} <from> <to> [categories], got {} argument(s)",
                self.name(),
                args.len()
            ))),
        }
    }
}
