mod env_variable_utils;
mod models;
mod router;
mod search;
mod utils;

use crate::env_variable_utils::{get_app_name, is_debug_mode, API_BASE_URL};
use crate::router::{switch, Route};
use web_sys::console;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();

    console::log_1(
        &format!(
            "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
            get_app_name(),
            &*API_BASE_URL,
            is_debug_mode()
        )
        .into(),
    );
}
