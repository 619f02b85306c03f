use crate::models::SearchResult;
use crate::search::api::SearchRequest;
use crate::search::daily_time::DailyTime;
use crate::search::messages;
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: String,
    pub error_message: String,
    pub result: Option<Rc<SearchResult>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    QueryChanged(String),
    /// Input refused before any request went out.
    Rejected(String),
    Loaded(Rc<SearchResult>),
    Failed(String),
}

impl SearchState {
    pub fn apply(mut self, action: SearchAction) -> Self {
        match action {
            SearchAction::QueryChanged(query) => self.query = query,
            SearchAction::Rejected(message) | SearchAction::Failed(message) => {
                self.error_message = message;
            }
            SearchAction::Loaded(result) => {
                self.result = Some(result);
                self.error_message.clear();
            }
        }
        self
    }

    /// Request for a plain form submission, or the message to show when the
    /// query is blank.
    pub fn submit_request(&self) -> Result<SearchRequest, &'static str> {
        if self.query.trim().is_empty() {
            return Err(messages::EMPTY_QUERY);
        }
        Ok(SearchRequest::term(&self.query))
    }

    // The held query goes out as-is, even when empty.
    pub fn daily_time_request(&self, daily_time: DailyTime) -> SearchRequest {
        SearchRequest::term(&self.query).with_daily_time(daily_time)
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    // Presence, not length: an empty match still offers the buckets.
    pub fn has_items(&self) -> bool {
        self.result
            .as_ref()
            .is_some_and(|result| result.items.is_some())
    }
}

impl Reducible for SearchState {
    type Action = SearchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}
