use async_trait::async_trait;
use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::pager::{Page, PAGE_LIMIT};
use crate::types::{Channel, ChannelList, Envelope, Member, MemberList, Message, MessageList};

const API_BASE: &str = "https://slack.com/api";

/// The four Slack Web API calls the aggregation pipeline depends on.
/// Each accepts an opaque pagination cursor and may fail with
/// [`Error::RateLimited`] carrying the advisory retry-after.
#[async_trait]
pub trait SlackApi: Send + Sync {
    async fn list_channels(&self, cursor: Option<String>) -> Result<Page<Channel>>;

    async fn list_users(&self, cursor: Option<String>) -> Result<Page<Member>>;

    async fn channel_history(
        &self,
        channel: &str,
        oldest: i64,
        latest: i64,
        cursor: Option<String>,
    ) -> Result<Page<Message>>;

    async fn thread_replies(
        &self,
        channel: &str,
        thread_ts: &str,
        cursor: Option<String>,
    ) -> Result<Page<Message>>;
}

/// Web API client holding the single bot bearer token for the process.
pub struct SlackClient {
    http: reqwest::Client,
    token: String,
}

impl SlackClient {
    pub fn new(token: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self { http, token })
    }

    async fn call<T>(
        &self,
        method: &'static str,
        params: &[(&str, String)],
    ) -> Result<(T, Option<String>)>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", API_BASE, method);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(params)
            .send()
            .await?;

        let retry_after = response
            .headers()
            .get(header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::RateLimited { retry_after });
        }
        let response = response.error_for_status()?;

        let envelope: Envelope<T> = response.json().await?;
        decode(method, envelope, retry_after)
    }

    fn page_params(cursor: Option<String>) -> Vec<(&'static str, String)> {
        let mut params = vec![("limit", PAGE_LIMIT.to_string())];
        if let Some(cursor) = cursor {
            params.push(("cursor", cursor));
        }
        params
    }
}

/// Maps a decoded envelope into payload + next cursor. Slack signals
/// the end of pagination with either a missing `response_metadata` or
/// an empty-string cursor.
fn decode<T>(
    method: &'static str,
    envelope: Envelope<T>,
    retry_after: Option<u64>,
) -> Result<(T, Option<String>)> {
    if !envelope.ok {
        let code = envelope
            .error
            .unwrap_or_else(|| "unknown_error".to_string());
        if code == "ratelimited" {
            return Err(Error::RateLimited { retry_after });
        }
        return Err(Error::Api { method, code });
    }

    let next_cursor = envelope
        .response_metadata
        .and_then(|meta| meta.next_cursor)
        .filter(|cursor| !cursor.is_empty());

    Ok((envelope.payload, next_cursor))
}

#[async_trait]
impl SlackApi for SlackClient {
    async fn list_channels(&self, cursor: Option<String>) -> Result<Page<Channel>> {
        let mut params = Self::page_params(cursor);
        params.push(("types", "public_channel".to_string()));

        let (list, next_cursor): (ChannelList, _) =
            self.call("conversations.list", &params).await?;
        Ok(Page {
            items: list.channels,
            next_cursor,
        })
    }

    async fn list_users(&self, cursor: Option<String>) -> Result<Page<Member>> {
        let params = Self::page_params(cursor);

        let (list, next_cursor): (MemberList, _) = self.call("users.list", &params).await?;
        Ok(Page {
            items: list.members,
            next_cursor,
        })
    }

    async fn channel_history(
        &self,
        channel: &str,
        oldest: i64,
        latest: i64,
        cursor: Option<String>,
    ) -> Result<Page<Message>> {
        let mut params = Self::page_params(cursor);
        params.push(("channel", channel.to_string()));
        params.push(("oldest", oldest.to_string()));
        params.push(("latest", latest.to_string()));

        let (list, next_cursor): (MessageList, _) =
            self.call("conversations.history", &params).await?;
        Ok(Page {
            items: list.messages,
            next_cursor,
        })
    }

    async fn thread_replies(
        &self,
        channel: &str,
        thread_ts: &str,
        cursor: Option<String>,
    ) -> Result<Page<Message>> {
        let mut params = Self::page_params(cursor);
        params.push(("channel", channel.to_string()));
        params.push(("ts", thread_ts.to_string()));

        let (list, next_cursor): (MessageList, _) =
            self.call("conversations.replies", &params).await?;
        Ok(Page {
            items: list.messages,
            next_cursor,
        })
    }
}
