pub mod api;
pub mod components;
pub mod daily_time;
pub mod layout;
pub mod messages;
pub mod state;

use crate::search::api::{execute_search, SearchRequest};
use crate::search::components::{
    DailyTimeSelector, ErrorBanner, ResultsView, SearchBar, WordFrequencyList,
};
use crate::search::daily_time::{event_target_id, DailyTime};
use crate::search::state::{SearchAction, SearchState};
use std::rc::Rc;
use yew::prelude::*;

// Fires the request in the background. Responses are applied in the order
// they resolve; an older request may overwrite a newer one.
fn spawn_search(
    request: SearchRequest,
    failure_message: String,
    dispatcher: UseReducerDispatcher<SearchState>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        match execute_search(&request).await {
            Ok(result) => dispatcher.dispatch(SearchAction::Loaded(Rc::new(result))),
            Err(e) => {
                log::error!("{e}");
                web_sys::console::error_1(&e.to_string().into());
                dispatcher.dispatch(SearchAction::Failed(failure_message));
            }
        }
    });
}

#[function_component(SearchView)]
pub fn search_view() -> Html {
    let state = use_reducer(SearchState::default);

    let on_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |query: String| {
            dispatcher.dispatch(SearchAction::QueryChanged(query));
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: ()| match state.submit_request() {
            Ok(request) => spawn_search(
                request,
                messages::SEARCH_FAILED.to_string(),
                state.dispatcher(),
            ),
            Err(message) => state.dispatch(SearchAction::Rejected(message.to_string())),
        })
    };

    let on_daily_time_select = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            let id = event_target_id(&e).unwrap_or_default();
            let Some(daily_time) = DailyTime::from_key(&id) else {
                log::warn!("Ignoring click on unknown daily time '{id}'");
                return;
            };
            spawn_search(
                state.daily_time_request(daily_time),
                messages::daily_time_failed(daily_time),
                state.dispatcher(),
            );
        })
    };

    let result = state.result.clone();

    html! {
        <div class="min-h-screen bg-gray-100 p-10">
            <div class="max-w-4xl mx-auto">
                <h1 class="text-5xl font-bold text-gray-700 max-w-md leading-tight mt-20">
                    { messages::PAGE_TITLE }
                </h1>

                <SearchBar
                    query={state.query.clone()}
                    has_error={state.has_error()}
                    on_input={on_input}
                    on_submit={on_submit}
                />

                <ErrorBanner message={state.error_message.clone()} />

                {
                    if state.has_items() {
                        html! { <DailyTimeSelector on_select={on_daily_time_select} /> }
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(words) = result.as_ref().and_then(|r| r.five_most_used_words.clone()) {
                        html! { <WordFrequencyList words={words} /> }
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(result) = result {
                        html! { <ResultsView result={result} /> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
