use slack::{collect_all, Channel, Result, SlackApi};

use crate::window::ActivityWindow;

/// Channels worth scanning this cycle: public, not archived, touched
/// inside the activity window. Listing failures abort the cycle;
/// without channels there is nothing to aggregate.
pub async fn discover_channels<C: SlackApi>(
    api: &C,
    window: &ActivityWindow,
) -> Result<Vec<Channel>> {
    let channels = collect_all(|cursor| api.list_channels(cursor)).await?;

    Ok(channels
        .into_iter()
        .filter(|channel| {
            !channel.is_archived && window.includes_update_ms(channel.updated.unwrap_or(0))
        })
        .collect())
}
