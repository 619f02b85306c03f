use crate::models::{SearchResult, VideoItem};

#[derive(Debug, PartialEq)]
pub struct DayGroupView<'a> {
    pub day_week: &'a str,
    pub videos: Vec<&'a VideoItem>,
}

/// How the result rows are laid out. Grouping wins whenever the response
/// carries at least one day group.
#[derive(Debug, PartialEq)]
pub enum ResultLayout<'a> {
    Grouped(Vec<DayGroupView<'a>>),
    Flat(Vec<&'a VideoItem>),
    Empty,
}

impl<'a> ResultLayout<'a> {
    pub fn plan(result: &'a SearchResult) -> Self {
        match (result.days_week_watch_movie.as_deref(), result.items.as_deref()) {
            (Some(days), _) if !days.is_empty() => ResultLayout::Grouped(
                days.iter()
                    .map(|day| DayGroupView {
                        day_week: &day.day_week,
                        // items order, not videoIds order; unknown ids drop out
                        videos: result
                            .videos()
                            .iter()
                            .filter(|video| day.contains(video.video_id()))
                            .collect(),
                    })
                    .collect(),
            ),
            (_, Some(items)) => ResultLayout::Flat(items.iter().collect()),
            (_, None) => ResultLayout::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{day, video};

    fn ids(videos: &[&VideoItem]) -> Vec<String> {
        videos.iter().map(|v| v.video_id().to_string()).collect()
    }

    #[test]
    fn groups_follow_items_order() {
        let result = SearchResult {
            items: Some(vec![video("a"), video("b"), video("c")]),
            five_most_used_words: None,
            days_week_watch_movie: Some(vec![day("Mon", &["c", "a"]), day("Tue", &["b"])]),
        };

        let ResultLayout::Grouped(groups) = ResultLayout::plan(&result) else {
            panic!("expected grouped layout");
        };
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].day_week, "Mon");
        assert_eq!(ids(&groups[0].videos), vec!["a", "c"]);
        assert_eq!(groups[1].day_week, "Tue");
        assert_eq!(ids(&groups[1].videos), vec!["b"]);
    }

    #[test]
    fn unreferenced_items_and_unknown_ids_are_dropped() {
        let result = SearchResult {
            items: Some(vec![video("a"), video("b"), video("c")]),
            five_most_used_words: None,
            days_week_watch_movie: Some(vec![day("Mon", &["a", "zzz"])]),
        };

        let ResultLayout::Grouped(groups) = ResultLayout::plan(&result) else {
            panic!("expected grouped layout");
        };
        assert_eq!(groups.len(), 1);
        assert_eq!(ids(&groups[0].videos), vec!["a"]);
    }

    #[test]
    fn item_may_appear_under_several_days() {
        let result = SearchResult {
            items: Some(vec![video("a"), video("b")]),
            five_most_used_words: None,
            days_week_watch_movie: Some(vec![day("Mon", &["a"]), day("Wed", &["a", "b"])]),
        };

        let ResultLayout::Grouped(groups) = ResultLayout::plan(&result) else {
            panic!("expected grouped layout");
        };
        assert_eq!(ids(&groups[0].videos), vec!["a"]);
        assert_eq!(ids(&groups[1].videos), vec!["a", "b"]);
    }

    #[test]
    fn day_without_matches_keeps_its_heading() {
        let result = SearchResult {
            items: Some(vec![video("a")]),
            five_most_used_words: None,
            days_week_watch_movie: Some(vec![day("Sun", &[])]),
        };

        assert_eq!(
            ResultLayout::plan(&result),
            ResultLayout::Grouped(vec![DayGroupView {
                day_week: "Sun",
                videos: vec![],
            }])
        );
    }

    #[test]
    fn no_grouping_renders_flat_in_order() {
        let result = SearchResult {
            items: Some(vec![video("c"), video("a"), video("b")]),
            ..SearchResult::default()
        };

        let ResultLayout::Flat(videos) = ResultLayout::plan(&result) else {
            panic!("expected flat layout");
        };
        assert_eq!(ids(&videos), vec!["c", "a", "b"]);
    }

    #[test]
    fn empty_grouping_counts_as_absent() {
        let result = SearchResult {
            items: Some(vec![video("a"), video("b")]),
            five_most_used_words: None,
            days_week_watch_movie: Some(vec![]),
        };

        let ResultLayout::Flat(videos) = ResultLayout::plan(&result) else {
            panic!("expected flat layout");
        };
        assert_eq!(ids(&videos), vec!["a", "b"]);
    }

    #[test]
    fn present_empty_items_render_an_empty_flat_list() {
        let result = SearchResult {
            items: Some(vec![]),
            ..SearchResult::default()
        };
        assert_eq!(ResultLayout::plan(&result), ResultLayout::Flat(vec![]));
    }

    #[test]
    fn nothing_to_show() {
        assert_eq!(
            ResultLayout::plan(&SearchResult::default()),
            ResultLayout::Empty
        );
    }
}
