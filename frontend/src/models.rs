use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoId {
    pub video_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Thumbnails {
    pub default: Thumbnail,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Snippet {
    pub title: String,
    pub description: String,
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoItem {
    pub id: VideoId,
    pub snippet: Snippet,
}

impl VideoItem {
    pub fn video_id(&self) -> &str {
        &self.id.video_id
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WordCount {
    pub word: String,
    pub repetition_number: i64,
}

impl WordCount {
    // Shown exactly as the server sent it.
    pub fn count_label(&self) -> String {
        format!("({})", self.repetition_number)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayGroup {
    pub day_week: String,
    pub video_ids: Vec<String>,
}

impl DayGroup {
    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }
}

/// Body returned by `GET /search`. Only the daily-time query fills
/// `days_week_watch_movie`. A present but empty `items` still counts as a
/// search that returned data.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<VideoItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub five_most_used_words: Option<Vec<WordCount>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_week_watch_movie: Option<Vec<DayGroup>>,
}

impl SearchResult {
    pub fn videos(&self) -> &[VideoItem] {
        self.items.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn video(id: &str) -> VideoItem {
        VideoItem {
            id: VideoId {
                video_id: id.to_string(),
            },
            snippet: Snippet {
                title: format!("Title {id}"),
                description: format!("Description {id}"),
                thumbnails: Thumbnails {
                    default: Thumbnail {
                        url: format!("https://i.ytimg.com/vi/{id}/default.jpg"),
                    },
                },
            },
        }
    }

    pub fn day(label: &str, ids: &[&str]) -> DayGroup {
        DayGroup {
            day_week: label.to_string(),
            video_ids: ids.iter().map(|id| id.to_string()).collect(),
        }
    }
}
