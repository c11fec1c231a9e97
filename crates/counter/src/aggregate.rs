use std::collections::HashMap;

use serde::Serialize;
use tracing::info;

use slack::{Result, SlackApi};

use crate::collector::{fetch_messages, fetch_replies};
use crate::directory::admin_directory;
use crate::discovery::discover_channels;
use crate::window::ActivityWindow;

/// One ranked row of the final output, in render order. `id` is the
/// post-sort index, so it is a rank at render time, not a stable key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataNode {
    pub id: String,
    pub group: String,
    pub value: u64,
}

/// Runs one full aggregation cycle: discover channels, snapshot the
/// admin directory, count eligible top-level messages and thread
/// replies per user, then rank ascending by count.
///
/// Channels are walked one at a time and each message's replies are
/// folded in before the next message, keeping at most one request in
/// flight against the Slack API.
pub async fn run_cycle<C: SlackApi>(api: &C, period_days: i64) -> Result<Vec<DataNode>> {
    let window = ActivityWindow::last_days(period_days);

    let channels = discover_channels(api, &window).await?;
    info!(channels = channels.len(), "channels in window");

    let users = admin_directory(api).await?;

    let mut counts: HashMap<String, u64> = HashMap::new();
    for (i, channel) in channels.iter().enumerate() {
        info!(
            n = i + 1,
            total = channels.len(),
            channel = %channel.name,
            "processing channel"
        );

        for message in fetch_messages(api, &channel.id, &window).await {
            let Some(author) = message.user.as_deref() else {
                continue;
            };
            if !users.contains_key(author) {
                continue;
            }
            *counts.entry(author.to_string()).or_insert(0) += 1;

            let Some(thread_ts) = message.thread_ts.as_deref() else {
                continue;
            };
            for reply in fetch_replies(api, &channel.id, thread_ts).await {
                // conversations.replies repeats the thread root as its
                // first message; the history walk already counted it.
                if reply.ts == thread_ts {
                    continue;
                }
                let Some(reply_author) = reply.user.as_deref() else {
                    continue;
                };
                if !users.contains_key(reply_author) {
                    continue;
                }
                *counts.entry(reply_author.to_string()).or_insert(0) += 1;
            }
        }
    }

    Ok(rank(counts, &users))
}

/// Ascending by count, display name as the deterministic tie-break.
/// Users with no counted messages get no row.
fn rank(counts: HashMap<String, u64>, users: &HashMap<String, String>) -> Vec<DataNode> {
    let mut rows: Vec<(String, u64)> = counts
        .into_iter()
        .map(|(id, value)| {
            let group = users
                .get(&id)
                .cloned()
                .unwrap_or_else(|| "Unknown".to_string());
            (group, value)
        })
        .collect();

    rows.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    rows.into_iter()
        .enumerate()
        .map(|(index, (group, value))| DataNode {
            id: index.to_string(),
            group,
            value,
        })
        .collect()
}
