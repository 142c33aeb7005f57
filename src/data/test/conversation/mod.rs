use crate::data::conversation::{ConversationStore, CONTEXT_CAP};
use crate::model::Turn;
use serenity::all::UserId;

mod context;
mod record;
