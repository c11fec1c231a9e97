pub mod client;
pub mod error;
pub mod pager;
pub mod types;

pub use client::{SlackApi, SlackClient};
pub use error::{Error, Result};
pub use pager::{collect_all, collect_partial, Page, DEFAULT_RETRY_AFTER_SECS, PAGE_LIMIT};
pub use types::{Channel, Member, Message, Profile};
