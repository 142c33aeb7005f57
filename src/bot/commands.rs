//! Slash command definitions and registration.

use serenity::all::{Command, CommandOptionType, CreateCommand, CreateCommandOption, Http};

use crate::error::AppError;

/// Builds the full command set exposed by the bot.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("ask")
            .description("Ask the AI something")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "question",
                    "Your question or message",
                )
                .required(true),
            ),
        CreateCommand::new("help").description("Show help menu"),
        CreateCommand::new("donate").description("Support the bot ❤️"),
        CreateCommand::new("ping").description("Replies with Pong!"),
        CreateCommand::new("image")
            .description("Generate an image")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "prompt", "Image prompt")
                    .required(true),
            ),
        CreateCommand::new("clear")
            .description("Clears messages")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "amount",
                    "Number of messages to delete",
                )
                .required(true)
                .min_int_value(1)
                .max_int_value(100),
            ),
        CreateCommand::new("kick")
            .description("Kick a member")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "target", "Member to kick")
                    .required(true),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::String,
                "reason",
                "Reason for the kick",
            )),
        CreateCommand::new("ban")
            .description("Ban a member")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "target", "Member to ban")
                    .required(true),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::String,
                "reason",
                "Reason for the ban",
            )),
        CreateCommand::new("mute")
            .description("Time out a member")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "target", "Member to mute")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "minutes",
                    "Timeout length in minutes",
                )
                .required(true)
                .min_int_value(1),
            ),
        CreateCommand::new("warn")
            .description("Warn a member")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "target", "Member to warn")
                    .required(true),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::String,
                "reason",
                "Reason for the warning",
            )),
        CreateCommand::new("warnings")
            .description("List warnings for a member")
            .add_option(CreateCommandOption::new(
                CommandOptionType::User,
                "target",
                "Member to look up (defaults to you)",
            )),
    ]
}

/// Registers the command set globally.
pub async fn register_global(http: &Http) -> Result<(), AppError> {
    let registered = Command::set_global_commands(http, definitions()).await?;
    tracing::info!("Registered {} global slash commands", registered.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that every command on the surface is defined exactly once.
    #[test]
    fn defines_the_full_command_surface() {
        let expected = [
            "ask", "help", "donate", "ping", "image", "clear", "kick", "ban", "mute", "warn",
            "warnings",
        ];

        let encoded = serde_json::to_value(definitions()).unwrap();
        let names: Vec<&str> = encoded
            .as_array()
            .unwrap()
            .iter()
            .map(|command| command["name"].as_str().unwrap())
            .collect();

        assert_eq!(names, expected);
    }
}
