use yew::prelude::*;
use crate::content::COPYRIGHT;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gray-200 p-4 text-center">
            <p>{COPYRIGHT}</p>
        </footer>
    }
}
