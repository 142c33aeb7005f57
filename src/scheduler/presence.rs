use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serenity::all::{ActivityData, Context, OnlineStatus};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::AppError;

/// Activity strings cycled through by the rotation job.
const ROTATION: &[&str] = &[
    "🧠 AI chat | /ask",
    "💬 Use /ask in DM or server",
    "⚙️ Mention me or use !chat",
    "📜 /help for commands",
    "💡 You can DM me to ask questions!",
    "⚡ /ask | Instant AI answers",
    "🛡️ Keeping the server tidy",
    "🚀 Ask me anything, anytime",
];

/// Starts the presence rotation scheduler.
///
/// Rotates the bot's activity string every 15 seconds, holding the gateway
/// context inside the job.
///
/// # Arguments
/// - `ctx`: Gateway context used to update presence
pub async fn start_rotation(ctx: Context) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;
    let index = Arc::new(AtomicUsize::new(0));

    // Fires at :00, :15, :30, :45 of every minute.
    let job = Job::new_async("0/15 * * * * *", move |_uuid, _lock| {
        let ctx = ctx.clone();
        let index = index.clone();

        Box::pin(async move {
            let i = index.fetch_add(1, Ordering::Relaxed) % ROTATION.len();
            ctx.set_presence(Some(ActivityData::custom(ROTATION[i])), OnlineStatus::Online);
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Presence rotation scheduler started");

    Ok(())
}
