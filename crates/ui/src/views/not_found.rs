use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "page not-found",
            h2 { "Page not found" }
            p { "The address /{path} does not exist." }
            Link { class: "btn btn-secondary", to: Route::Home {}, "Back to topics" }
        }
    }
}
