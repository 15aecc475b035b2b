use yew::prelude::*;
use crate::content::TITLE;

/// The coloured banner at the top of the page holding the app title.

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="bg-blue-600 text-white p-4">
            <h1 class="text-2xl font-bold">{TITLE}</h1>
        </header>
    }
}
