use crate::env_variable_utils::API_BASE_URL;
use crate::models::SearchResult;
use crate::search::daily_time::DailyTime;
use gloo_net::http::Request;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request to search backend failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("search failed ({status}): {body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub term: String,
    pub daily_time: Option<DailyTime>,
}

impl SearchRequest {
    pub fn term(term: &str) -> Self {
        Self {
            term: term.to_string(),
            daily_time: None,
        }
    }

    pub fn with_daily_time(mut self, daily_time: DailyTime) -> Self {
        self.daily_time = Some(daily_time);
        self
    }

    pub fn url(&self, backend_url: &str) -> String {
        let mut url = format!(
            "{}/search?term={}",
            backend_url,
            urlencoding::encode(&self.term)
        );
        if let Some(daily_time) = self.daily_time {
            url.push_str("&dailyTime=");
            url.push_str(daily_time.key());
        }
        url
    }
}

pub async fn execute_search(request: &SearchRequest) -> Result<SearchResult, SearchError> {
    let url = request.url(&*API_BASE_URL);
    log::debug!("GET {url}");

    let response = Request::get(&url).send().await?;

    if response.ok() {
        Ok(response.json::<SearchResult>().await?)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(SearchError::Status { status, body })
    }
}
