use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    rsx! {
        div { class: "page home-page",
            section { class: "hero",
                h2 { class: "hero__title", "Get ready for your interview" }
                p { class: "hero__description",
                    "Browse questions by topic, read the answers, and check yourself with a timed test."
                }
            }
            section { class: "section",
                h2 { class: "section__title", "Topics" }
                div { class: "topic-grid",
                    for topic in catalog.iter() {
                        Link {
                            key: "{topic.id()}",
                            class: "topic-card",
                            to: Route::Topic { topic_id: topic.id().as_str().to_owned() },
                            div { class: "topic-card__header",
                                if let Some(icon) = topic.icon() {
                                    img {
                                        class: "topic-card__icon",
                                        src: "/assets/{icon}",
                                        alt: "{topic.name()}",
                                    }
                                }
                                h3 { class: "topic-card__title", "{topic.name()}" }
                            }
                            div { class: "topic-card__footer", span { "Open →" } }
                        }
                    }
                }
            }
        }
    }
}
