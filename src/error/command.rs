use serenity::all::Permissions;
use thiserror::Error;

/// Command rejected before any remote call was made.
///
/// Every variant maps to a short, user-visible rejection sent as an ephemeral
/// response by the interaction router. None of these indicate a bug; they are
/// the expected outcome of invalid or unauthorized invocations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// A required option was absent or had the wrong type.
    ///
    /// Discord validates registered option schemas, so hitting this suggests
    /// a stale command registration rather than user error.
    #[error("missing required option '{0}'")]
    MissingOption(&'static str),

    /// An integer option fell outside its allowed range.
    #[error("option '{option}' out of range: {value}")]
    OutOfRange { option: &'static str, value: i64 },

    /// The invoking member lacks the permission the command requires.
    #[error("invoking member lacks required permission {0:?}")]
    PermissionDenied(Permissions),

    /// The target user is not a member of the guild.
    #[error("target user is not a member of this guild")]
    TargetNotFound,

    /// A guild-only command was invoked outside a guild.
    #[error("command can only be used in a guild")]
    GuildOnly,

    /// No handler is registered for the command name.
    #[error("unknown command '{0}'")]
    Unknown(String),
}

impl CommandError {
    /// Short rejection text shown to the invoking user.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingOption(name) => format!("⚠️ Missing required option `{name}`."),
            Self::OutOfRange { option, value } => {
                format!("⚠️ `{option}` value {value} is out of range.")
            }
            Self::PermissionDenied(_) => {
                "🚫 You don't have permission to use this command.".to_string()
            }
            Self::TargetNotFound => "⚠️ That user isn't a member of this server.".to_string(),
            Self::GuildOnly => "⚠️ This command can only be used in a server.".to_string(),
            Self::Unknown(name) => format!("⚠️ Unknown command `{name}`."),
        }
    }
}
