use yew::prelude::*;
use log::info;

mod config;
mod dom;
mod error;
mod components {
    pub mod back_to_top;
    pub mod contact;
    pub mod counter;
    pub mod nav;
    pub mod reveal;
    pub mod toast;
}
mod pages {
    pub mod home;
}

use components::{
    back_to_top::BackToTop,
    nav::Navbar,
    toast::ToastProvider,
};
use pages::home::Home;


#[function_component]
fn App() -> Html {
    html! {
        <ToastProvider>
            <Navbar />
            <Home />
            <BackToTop />
        </ToastProvider>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting site");
    yew::Renderer::<App>::new().render();
}
