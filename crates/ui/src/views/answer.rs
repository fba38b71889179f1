use dioxus::prelude::*;
use dioxus_router::Link;

use quiz_core::model::TopicId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq)]
struct AnswerData {
    topic_name: String,
    article_html: String,
}

#[component]
pub fn AnswerView(topic_id: String, slug: String) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let store = ctx.content_store();

    let route_id = topic_id.clone();
    let route_slug = slug.clone();
    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let store = store.clone();
        let route_id = route_id.clone();
        let route_slug = route_slug.clone();
        async move {
            let id = TopicId::new(route_id).map_err(|_| ViewError::NotFound)?;
            let topic = catalog.lookup(&id).ok_or(ViewError::NotFound)?;
            let raw = store
                .read_answer_file(&id, &route_slug)
                .await
                .map_err(|err| ViewError::from(&err))?;
            Ok::<_, ViewError>(AnswerData {
                topic_name: topic.name().to_owned(),
                article_html: markdown_to_html(&raw),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page answer-page",
            header { class: "answer-header",
                Link {
                    class: "topic-header__back",
                    to: Route::Topic { topic_id: topic_id.clone() },
                    "← Back to questions"
                }
                Link { class: "topic-header__back", to: Route::Home {}, "Home" }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    if err == ViewError::NotFound {
                        Link {
                            class: "btn btn-secondary",
                            to: Route::Topic { topic_id: topic_id.clone() },
                            "All questions"
                        }
                    } else {
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut resource = resource;
                                resource.restart();
                            },
                            "Retry"
                        }
                    }
                },
                ViewState::Ready(data) => rsx! {
                    h1 { class: "answer-topic", "{data.topic_name}" }
                    article { class: "article",
                        div { dangerous_inner_html: "{data.article_html}" }
                    }
                    nav { class: "answer-nav",
                        Link {
                            class: "btn btn-secondary",
                            to: Route::Topic { topic_id: topic_id.clone() },
                            "← All questions"
                        }
                        Link {
                            class: "btn btn-primary",
                            to: Route::Quiz { topic_id: topic_id.clone() },
                            "Take the test →"
                        }
                    }
                },
            }
        }
    }
}
