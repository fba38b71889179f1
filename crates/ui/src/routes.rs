use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{AnswerView, HomeView, NotFoundView, QuizView, TopicView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/topics/:topic_id", TopicView)] Topic { topic_id: String },
        #[route("/topics/:topic_id/test", QuizView)] Quiz { topic_id: String },
        #[route("/topics/:topic_id/:slug", AnswerView)] Answer { topic_id: String, slug: String },
    #[end_layout]
    #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                Link { class: "app-header__brand", to: Route::Home {}, "Interview Prep" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
