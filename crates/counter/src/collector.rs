use slack::{collect_partial, Message, SlackApi};

use crate::window::ActivityWindow;

/// Top-level messages for one channel inside the window. A mid-stream
/// failure keeps what was already fetched; one bad channel must not
/// abort the whole cycle.
pub async fn fetch_messages<C: SlackApi>(
    api: &C,
    channel_id: &str,
    window: &ActivityWindow,
) -> Vec<Message> {
    collect_partial(
        |cursor| api.channel_history(channel_id, window.oldest, window.latest, cursor),
        "channel history",
    )
    .await
}

/// All messages in one reply thread, same partial-failure policy as
/// [`fetch_messages`].
pub async fn fetch_replies<C: SlackApi>(
    api: &C,
    channel_id: &str,
    thread_ts: &str,
) -> Vec<Message> {
    collect_partial(
        |cursor| api.thread_replies(channel_id, thread_ts, cursor),
        "thread replies",
    )
    .await
}
