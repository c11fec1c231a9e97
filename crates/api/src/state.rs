use std::sync::Arc;

use counter::ResultCache;
use slack::SlackClient;

#[derive(Clone)]
pub struct AppState {
    pub slack: Arc<SlackClient>,
    pub cache: Arc<ResultCache>,
}
