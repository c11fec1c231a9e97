//! Scripted [`SlackApi`] stub for pipeline tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use slack::{Channel, Member, Message, Page, Profile, Result, SlackApi};

/// Each call pops the next scripted response for its method; once a
/// script runs dry the method answers with an empty final page.
#[derive(Default)]
pub struct MockApi {
    pub channel_pages: Mutex<VecDeque<Result<Page<Channel>>>>,
    pub user_pages: Mutex<VecDeque<Result<Page<Member>>>>,
    pub history: Mutex<HashMap<String, VecDeque<Result<Page<Message>>>>>,
    pub replies: Mutex<HashMap<(String, String), VecDeque<Result<Page<Message>>>>>,
    pub history_bounds: Mutex<Vec<(String, i64, i64)>>,
    pub calls: AtomicUsize,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_channels(&self, page: Result<Page<Channel>>) {
        self.channel_pages.lock().unwrap().push_back(page);
    }

    pub fn push_users(&self, page: Result<Page<Member>>) {
        self.user_pages.lock().unwrap().push_back(page);
    }

    pub fn push_history(&self, channel: &str, page: Result<Page<Message>>) {
        self.history
            .lock()
            .unwrap()
            .entry(channel.to_string())
            .or_default()
            .push_back(page);
    }

    pub fn push_replies(&self, channel: &str, thread_ts: &str, page: Result<Page<Message>>) {
        self.replies
            .lock()
            .unwrap()
            .entry((channel.to_string(), thread_ts.to_string()))
            .or_default()
            .push_back(page);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn next_or_empty<T>(queue: Option<&mut VecDeque<Result<Page<T>>>>) -> Result<Page<T>> {
    queue.and_then(VecDeque::pop_front).unwrap_or_else(|| {
        Ok(Page {
            items: Vec::new(),
            next_cursor: None,
        })
    })
}

#[async_trait]
impl SlackApi for MockApi {
    async fn list_channels(&self, _cursor: Option<String>) -> Result<Page<Channel>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        next_or_empty(Some(&mut *self.channel_pages.lock().unwrap()))
    }

    async fn list_users(&self, _cursor: Option<String>) -> Result<Page<Member>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        next_or_empty(Some(&mut *self.user_pages.lock().unwrap()))
    }

    async fn channel_history(
        &self,
        channel: &str,
        oldest: i64,
        latest: i64,
        _cursor: Option<String>,
    ) -> Result<Page<Message>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.history_bounds
            .lock()
            .unwrap()
            .push((channel.to_string(), oldest, latest));
        next_or_empty(self.history.lock().unwrap().get_mut(channel))
    }

    async fn thread_replies(
        &self,
        channel: &str,
        thread_ts: &str,
        _cursor: Option<String>,
    ) -> Result<Page<Message>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        next_or_empty(
            self.replies
                .lock()
                .unwrap()
                .get_mut(&(channel.to_string(), thread_ts.to_string())),
        )
    }
}

pub fn page<T>(items: Vec<T>) -> Result<Page<T>> {
    Ok(Page {
        items,
        next_cursor: None,
    })
}

pub fn channel(id: &str, name: &str, updated_ms: i64) -> Channel {
    Channel {
        id: id.to_string(),
        name: name.to_string(),
        is_archived: false,
        updated: Some(updated_ms),
    }
}

pub fn admin(id: &str, name: &str) -> Member {
    Member {
        id: id.to_string(),
        name: Some(name.to_string()),
        is_admin: true,
        profile: Profile::default(),
    }
}

pub fn regular(id: &str, name: &str) -> Member {
    Member {
        id: id.to_string(),
        name: Some(name.to_string()),
        is_admin: false,
        profile: Profile::default(),
    }
}

pub fn msg(user: &str, ts: &str) -> Message {
    Message {
        user: Some(user.to_string()),
        ts: ts.to_string(),
        thread_ts: None,
    }
}

/// A thread root: Slack sets `thread_ts` equal to its own `ts`.
pub fn threaded(user: &str, ts: &str) -> Message {
    Message {
        user: Some(user.to_string()),
        ts: ts.to_string(),
        thread_ts: Some(ts.to_string()),
    }
}

/// A reply inside the thread rooted at `thread_ts`.
pub fn reply(user: &str, ts: &str, thread_ts: &str) -> Message {
    Message {
        user: Some(user.to_string()),
        ts: ts.to_string(),
        thread_ts: Some(thread_ts.to_string()),
    }
}
