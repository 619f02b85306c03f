use crate::models::{SearchResult, VideoItem, WordCount};
use crate::search::daily_time::DailyTime;
use crate::search::layout::ResultLayout;
use crate::search::messages;
use crate::utils::video_url;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub has_error: bool,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            on_input.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default(); // No page reload
            on_submit.emit(());
        })
    };

    let input_border = if props.has_error {
        "border-2 border-red-500"
    } else {
        "border border-gray-300"
    };

    html! {
        <form onsubmit={on_submit} class="flex mt-10 max-w-3xl">
            <input
                type="text"
                class={format!("flex-grow p-4 rounded-l-lg focus:outline-none {input_border}")}
                placeholder={messages::SEARCH_PLACEHOLDER}
                value={props.query.clone()}
                oninput={on_input}
            />
            <button
                type="submit"
                class="w-52 bg-green-500 text-white font-bold rounded-r-lg hover:bg-green-600"
            >
                { messages::SEARCH_BUTTON }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    if props.message.is_empty() {
        return html! {};
    }
    html! {
        <span class="block text-red-600 mt-2">{ props.message.clone() }</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct DailyTimeSelectorProps {
    pub on_select: Callback<MouseEvent>,
}

#[function_component(DailyTimeSelector)]
pub fn daily_time_selector(props: &DailyTimeSelectorProps) -> Html {
    html! {
        <div class="mt-8">
            <p class="text-gray-700 mb-2">{ messages::DAILY_TIME_HEADING }</p>
            <ul class="flex gap-3">
                { for DailyTime::all_variants().into_iter().map(|bucket| html! {
                    <li
                        id={bucket.key()}
                        onclick={props.on_select.clone()}
                        class="w-14 h-14 flex items-center justify-center rounded-full bg-white shadow cursor-pointer hover:bg-gray-100"
                    >
                        { bucket.key() }
                    </li>
                })}
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WordFrequencyListProps {
    pub words: Vec<WordCount>,
}

#[function_component(WordFrequencyList)]
pub fn word_frequency_list(props: &WordFrequencyListProps) -> Html {
    html! {
        <div class="mt-8">
            <p class="text-gray-700 mb-2">{ messages::WORDS_HEADING }</p>
            <ul>
                { for props.words.iter().map(|entry| html! {
                    <li class="text-gray-800">
                        { format!("{} ", entry.word) }
                        <strong>{ entry.count_label() }</strong>
                    </li>
                })}
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoRowProps {
    pub video: VideoItem,
}

#[function_component(VideoRow)]
pub fn video_row(props: &VideoRowProps) -> Html {
    let snippet = &props.video.snippet;
    html! {
        <a
            href={video_url(props.video.video_id())}
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center bg-white rounded-md p-6 mt-4 hover:translate-x-2 transition-transform"
        >
            <img
                class="w-32 mr-5"
                src={snippet.thumbnails.default.url.clone()}
                alt={snippet.title.clone()}
            />
            <div class="flex-1">
                <strong class="text-xl text-gray-800">{ snippet.title.clone() }</strong>
                <p class="text-gray-500 mt-1">{ snippet.description.clone() }</p>
            </div>
            <span class="text-gray-400 ml-4">{ "›" }</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultsViewProps {
    pub result: Rc<SearchResult>,
}

#[function_component(ResultsView)]
pub fn results_view(props: &ResultsViewProps) -> Html {
    let rows = |videos: Vec<&VideoItem>| -> Html {
        videos
            .into_iter()
            .map(|video| {
                html! {
                    <VideoRow video={video.clone()} />
                }
            })
            .collect()
    };

    match ResultLayout::plan(&props.result) {
        ResultLayout::Grouped(days) => html! {
            <div class="mt-10 max-w-3xl">
                { for days.into_iter().map(|day| html! {
                    <>
                        <h2 class="text-2xl font-bold text-gray-700 mt-6">{ day.day_week.to_string() }</h2>
                        { rows(day.videos) }
                    </>
                })}
            </div>
        },
        ResultLayout::Flat(videos) => html! {
            <div class="mt-10 max-w-3xl">
                { rows(videos) }
            </div>
        },
        ResultLayout::Empty => html! {},
    }
}
