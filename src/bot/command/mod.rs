//! Slash command handlers.
//!
//! One module per command concern. Each handler produces exactly one
//! user-visible response; permission checks and argument validation
//! short-circuit before any remote call, and handlers that do perform a
//! remote call defer the interaction first.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    PartialMember, Permissions, ResolvedValue, User,
};

use crate::error::{AppError, CommandError};

pub mod ask;
pub mod ban;
pub mod clear;
pub mod image;
pub mod info;
pub mod kick;
pub mod mute;
pub mod warn;

/// Placeholder reason when a moderation command omits one.
pub const DEFAULT_REASON: &str = "No reason provided";

/// Checks whether a permission set grants everything in `required`.
///
/// An absent set (no member context, e.g. a DM) grants nothing.
fn holds(granted: Option<Permissions>, required: Permissions) -> bool {
    granted.is_some_and(|permissions| permissions.contains(required))
}

/// Requires the invoking member to hold a permission, before any remote call.
pub fn require_permission(
    interaction: &CommandInteraction,
    required: Permissions,
) -> Result<(), CommandError> {
    let granted = interaction
        .member
        .as_deref()
        .and_then(|member| member.permissions);

    if holds(granted, required) {
        Ok(())
    } else {
        Err(CommandError::PermissionDenied(required))
    }
}

/// Extracts a required string option.
pub fn option_str<'a>(
    interaction: &'a CommandInteraction,
    name: &'static str,
) -> Result<&'a str, CommandError> {
    for option in interaction.data.options() {
        if option.name == name {
            if let ResolvedValue::String(value) = option.value {
                return Ok(value);
            }
        }
    }
    Err(CommandError::MissingOption(name))
}

/// Extracts an optional string option.
pub fn option_str_opt<'a>(interaction: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    for option in interaction.data.options() {
        if option.name == name {
            if let ResolvedValue::String(value) = option.value {
                return Some(value);
            }
        }
    }
    None
}

/// Extracts a required integer option.
pub fn option_int(
    interaction: &CommandInteraction,
    name: &'static str,
) -> Result<i64, CommandError> {
    for option in interaction.data.options() {
        if option.name == name {
            if let ResolvedValue::Integer(value) = option.value {
                return Ok(value);
            }
        }
    }
    Err(CommandError::MissingOption(name))
}

/// Extracts a required user option together with its resolved member.
///
/// The member half is `None` when the target is not in the guild, which
/// lets not-found checks run without a platform call.
pub fn option_user<'a>(
    interaction: &'a CommandInteraction,
    name: &'static str,
) -> Result<(&'a User, Option<&'a PartialMember>), CommandError> {
    option_user_opt(interaction, name).ok_or(CommandError::MissingOption(name))
}

/// Extracts an optional user option together with its resolved member.
pub fn option_user_opt<'a>(
    interaction: &'a CommandInteraction,
    name: &str,
) -> Option<(&'a User, Option<&'a PartialMember>)> {
    for option in interaction.data.options() {
        if option.name == name {
            if let ResolvedValue::User(user, member) = option.value {
                return Some((user, member));
            }
        }
    }
    None
}

/// Sends a plain immediate response.
pub async fn respond(
    ctx: &Context,
    interaction: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content(content),
            ),
        )
        .await?;
    Ok(())
}

/// Sends an ephemeral immediate response, visible only to the invoker.
pub async fn respond_ephemeral(
    ctx: &Context,
    interaction: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await?;
    Ok(())
}
