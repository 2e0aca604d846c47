use super::*;
use colored::Colorize;
use dialoguer::Input;

/// A human stands in for the completion service.
///
/// The request is printed to the terminal and the completion is read back
/// one line at a time until an empty line is entered.
pub struct Console;

impl Console {
    fn show(messages: &[Message]) {
        for message in messages {
            match message.speaker {
                Speaker::System => println!("{}", message.content.dimmed()),
                Speaker::User => println!("{}", message.content),
            }
        }
    }
    fn read() -> anyhow::Result<String> {
        let mut lines = Vec::new();
        loop {
            let line = Input::<String>::new()
                .with_prompt("completion (empty line to finish)".cyan().to_string())
                .allow_empty(true)
                .report(false)
                .interact_text()?;
            match line.trim().is_empty() {
                true => break,
                false => lines.push(line),
            }
        }
        Ok(lines.join("\n"))
    }
}

#[async_trait::async_trait]
impl Oracle for Console {
    async fn complete(&self, messages: &[Message]) -> anyhow::Result<String> {
        let messages = messages.to_vec();
        tokio::task::spawn_blocking(move || {
            Self::show(&messages);
            Self::read()
        })
        .await?
    }
}
