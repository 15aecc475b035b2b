use yew::prelude::*;
use components::header::Header;
use components::footer::Footer;
use pages::welcome_page::WelcomePage;

mod components;
mod content;
mod pages;


/// The whole page: a full-height column with the header on top, the welcome
/// page taking up the remaining space and the footer at the bottom.

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-gray-100">
            <Header />
            <WelcomePage />
            <Footer />
        </div>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    console_error_panic_hook::set_once();
    log::info!("mounting {}", content::TITLE);
    yew::Renderer::<App>::new().render();
}
