use yew::prelude::*;
use log::{error, info};

mod config;
mod content;
mod flow {
    pub mod controller;
    pub mod error;
    pub mod state;
    pub mod summary;

    pub use controller::{Effect, FlowController, FlowEvent};
    pub use state::{Section, ViewState};
}
mod effects {
    pub mod messaging;
    pub mod navigation;
}
mod components {
    pub mod floating_contact;
    pub mod lightbox;
    pub mod marquee;
}
mod pages {
    pub mod analyzing;
    pub mod landing;
    pub mod quiz;
    pub mod result;
    pub mod site;
    pub mod welcome;
}

use content::SiteContent;
use pages::landing::Landing;

fn load_content() -> SiteContent {
    match SiteContent::embedded() {
        Ok(content) => {
            if let Err(e) = content.validate() {
                error!("Site content is inconsistent: {}", e);
            }
            info!(
                "Loaded content: {} quiz questions, {} gallery images",
                content.questions.len(),
                content.images.results.len()
            );
            content
        }
        Err(e) => {
            error!("Failed to load site content: {}", e);
            SiteContent::default()
        }
    }
}

#[function_component]
fn App() -> Html {
    let content = use_memo(|_| load_content(), ());

    html! {
        <Landing content={content} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
