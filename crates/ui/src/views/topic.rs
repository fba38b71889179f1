use dioxus::prelude::*;
use dioxus_router::Link;

use content::{OutlineEntry, parse_outline};
use quiz_core::model::{Topic, TopicId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct TopicData {
    topic: Topic,
    entries: Vec<OutlineEntry>,
}

#[component]
pub fn TopicView(topic_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let store = ctx.content_store();

    let route_id = topic_id.clone();
    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let store = store.clone();
        let route_id = route_id.clone();
        async move {
            let id = TopicId::new(route_id).map_err(|_| ViewError::NotFound)?;
            let topic = catalog.lookup(&id).ok_or(ViewError::NotFound)?.clone();
            let raw = store
                .read_question_file(topic.file())
                .await
                .map_err(|err| ViewError::from(&err))?;
            Ok::<_, ViewError>(TopicData {
                topic,
                entries: parse_outline(&raw),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page topic-page",
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
                        Link { class: "btn btn-secondary", to: Route::Home {}, "Back to topics" }
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
                ViewState::Ready(data) => {
                    let with_answers = data.entries.iter().filter(|e| e.has_answer_file()).count();
                    rsx! {
                        header { class: "topic-header",
                            div { class: "topic-header__content",
                                Link { class: "topic-header__back", to: Route::Home {}, "← Back" }
                                h1 { class: "topic-header__title", "{data.topic.name()}" }
                            }
                            Link {
                                class: "btn btn-primary",
                                to: Route::Quiz { topic_id: topic_id.clone() },
                                "Take the test"
                            }
                        }
                        div { class: "stats",
                            div { class: "stats__item",
                                span { class: "stats__value", "{data.entries.len()}" }
                                span { class: "stats__label", "Questions" }
                            }
                            div { class: "stats__item",
                                span { class: "stats__value", "{with_answers}" }
                                span { class: "stats__label", "With answers" }
                            }
                        }
                        section { class: "section",
                            h2 { class: "section__title", "Questions" }
                            if data.entries.is_empty() {
                                p { class: "empty-state", "No questions found." }
                            } else {
                                ol { class: "question-list",
                                    for (index, entry) in data.entries.iter().enumerate() {
                                        QuestionItem {
                                            key: "{index}",
                                            topic_id: topic_id.clone(),
                                            index: index + 1,
                                            entry: entry.clone(),
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionItem(topic_id: String, index: usize, entry: OutlineEntry) -> Element {
    let slug = entry.slug();
    let external = match &entry.link {
        content::AnswerLink::External(url) => Some(url.clone()),
        _ => None,
    };

    rsx! {
        li { class: "question-item",
            if let Some(slug) = slug {
                Link {
                    class: "question-item__link",
                    to: Route::Answer { topic_id, slug },
                    span { class: "question-item__number", "{index}." }
                    span { class: "question-item__text", "{entry.text}" }
                    span { class: "question-item__arrow", "→" }
                }
            } else if let Some(url) = external {
                div { class: "question-item__content",
                    span { class: "question-item__number", "{index}." }
                    span { class: "question-item__text", "{entry.text}" }
                    a {
                        class: "question-item__external",
                        href: "{url}",
                        target: "_blank",
                        "YouTube →"
                    }
                }
            } else {
                div { class: "question-item__content",
                    span { class: "question-item__number", "{index}." }
                    span { class: "question-item__text", "{entry.text}" }
                }
            }
        }
    }
}
