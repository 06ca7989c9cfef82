use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use site_nav::NavbarConfig;

mod pages;

use pages::{
    About, CapacityBuilding, Diplomacy, Home, NotFound, Publications, Research, SiteLayout,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/operations/capacity-building#:section")]
        CapacityBuilding { section: String },
        #[route("/operations/diplomacy#:section")]
        Diplomacy { section: String },
        #[route("/operations/research")]
        Research {},
        #[route("/publications")]
        Publications {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

static NAVBAR_CONFIG: &str = include_str!("../assets/navbar.json");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {e}");
    }
    tracing::info!("starting site");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| NavbarConfig::load_or_default(NAVBAR_CONFIG));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
