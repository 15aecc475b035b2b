use yew::prelude::*;
use crate::content::{BUTTON_LABEL, INTRO_PARAGRAPH, WELCOME_HEADING};

/// The main region of the page.
///
/// It grows to fill whatever vertical space the header and footer leave. The
/// button is rendered without an `onclick`, so pressing it changes nothing.

#[function_component(WelcomePage)]
pub fn welcome_page() -> Html {
    html! {
        <main class="flex-grow container mx-auto px-4 py-8">
            <h2 class="text-xl font-semibold mb-4">{WELCOME_HEADING}</h2>
            <p class="mb-4">{INTRO_PARAGRAPH}</p>
            <button class="bg-green-500 hover:bg-green-600 text-white font-bold py-2 px-4 rounded">
                {BUTTON_LABEL}
            </button>
        </main>
    }
}
