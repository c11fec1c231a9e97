use serde::Deserialize;

/// A public channel as returned by `conversations.list`.
#[derive(Debug, Clone, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_archived: bool,
    /// Last update time, epoch milliseconds. Absent for channels the
    /// workspace has never touched.
    #[serde(default)]
    pub updated: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// A workspace member as returned by `users.list`.
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub profile: Profile,
}

impl Member {
    /// Profile display name, else account name, else "Unknown". Slack
    /// leaves unset display names as empty strings, which do not count.
    pub fn display_name(&self) -> String {
        self.profile
            .display_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.name.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("Unknown")
            .to_string()
    }
}

/// A top-level or reply message from `conversations.history` or
/// `conversations.replies`. Text is not retrieved; only authorship and
/// threading matter to the counter.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub ts: String,
    /// Timestamp of the thread root. On the root itself this equals
    /// `ts`; absent on unthreaded messages.
    #[serde(default)]
    pub thread_ts: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Common shape of every Slack Web API response: `ok`, an error code
/// when `ok` is false, pagination metadata, and the method-specific
/// payload flattened alongside.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
    #[serde(flatten)]
    pub payload: T,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChannelList {
    #[serde(default)]
    pub channels: Vec<Channel>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MemberList {
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MessageList {
    #[serde(default)]
    pub messages: Vec<Message>,
}
