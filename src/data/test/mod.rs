mod conversation;
mod warning;
