//! wrm-web - Documentation site for the WoT Replay Manager
//!
//! A single static page: prose, table of contents, screenshot gallery and an
//! image lightbox. No routing, no network.

pub mod pages;

use dioxus::prelude::*;
use pages::Home;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "WoT Replay Manager" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Home {}
    }
}
