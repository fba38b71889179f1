use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use quiz_core::model::{Answer, QuestionKind, QuizQuestion, ScoreResult, TopicId};
use services::quiz::DEFAULT_QUIZ_SECS;
use services::{Countdown, FocusEvent, IntegrityGuard, Subscription, Tick};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizIntent, QuizPhase, QuizVm, count_options, default_count, format_clock};

use super::scripts;

fn parse_focus_event(message: &str) -> Option<FocusEvent> {
    match message {
        "fullscreen-exited" => Some(FocusEvent::FullscreenExited),
        "fullscreen-restored" => Some(FocusEvent::FullscreenRestored),
        "tab-hidden" => Some(FocusEvent::TabHidden),
        "tab-visible" => Some(FocusEvent::TabVisible),
        _ => None,
    }
}

fn option_letter(index: usize) -> char {
    char::from(b'A' + u8::try_from(index % 26).unwrap_or(0))
}

#[derive(Clone, Debug, PartialEq)]
struct RunningData {
    question: QuizQuestion,
    answer: Option<Answer>,
    index: usize,
    total: usize,
    is_last: bool,
}

#[component]
pub fn QuizView(topic_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_service = ctx.quiz_service();

    let vm = use_signal(|| None::<QuizVm>);
    let countdown = use_signal(|| Countdown::new(DEFAULT_QUIZ_SECS));
    let guard = use_signal(IntegrityGuard::new);
    let notice = use_signal(|| None::<&'static str>);
    let selected_count = use_signal(|| None::<usize>);
    let start_error = use_signal(|| None::<ViewError>);
    let timer_sub = use_signal(|| None::<Subscription>);
    let guard_sub = use_signal(|| None::<Subscription>);

    let route_id = topic_id.clone();
    let service_for_resource = quiz_service.clone();
    let resource = use_resource(move || {
        let service = service_for_resource.clone();
        let route_id = route_id.clone();
        async move {
            let id = TopicId::new(route_id).map_err(|_| ViewError::NotFound)?;
            service
                .load(&id)
                .await
                .map_err(|err| ViewError::from(&err))
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut timer_sub = timer_sub;
        let mut guard_sub = guard_sub;
        match intent {
            QuizIntent::Answer(answer) => {
                if let Some(vm) = vm.write().as_mut() {
                    vm.answer_current(answer);
                }
            }
            QuizIntent::Next => {
                if let Some(vm) = vm.write().as_mut() {
                    vm.next();
                }
            }
            QuizIntent::Prev => {
                if let Some(vm) = vm.write().as_mut() {
                    vm.prev();
                }
            }
            QuizIntent::Finish => {
                if let Some(vm) = vm.write().as_mut() {
                    vm.finish();
                }
                if let Some(sub) = timer_sub.write().take() {
                    sub.release();
                }
                if let Some(sub) = guard_sub.write().take() {
                    sub.release();
                }
                let _ = eval(scripts::GUARD_UNINSTALL);
            }
        }
    });

    let on_start = {
        let quiz_service = quiz_service.clone();
        use_callback(move |count: usize| {
            let mut vm = vm;
            let mut countdown = countdown;
            let mut guard = guard;
            let mut notice = notice;
            let mut start_error = start_error;
            let mut timer_sub = timer_sub;
            let mut guard_sub = guard_sub;

            let document = resource
                .value()
                .read()
                .as_ref()
                .and_then(|value| value.as_ref().ok())
                .cloned();
            let Some(document) = document else {
                start_error.set(Some(ViewError::Unknown));
                return;
            };
            let session = match quiz_service.start(&document, count) {
                Ok(session) => session,
                Err(err) => {
                    tracing::error!(error = %err, "failed to start quiz run");
                    start_error.set(Some(ViewError::Unknown));
                    return;
                }
            };
            start_error.set(None);
            notice.set(None);
            guard.set(IntegrityGuard::new());
            countdown.set(Countdown::new(DEFAULT_QUIZ_SECS));
            vm.set(Some(QuizVm::new(session)));

            // The repeating schedule lives here; the countdown only owns the
            // expiry transition, so a late tick after finish is inert.
            let timer_task = spawn(async move {
                let mut vm = vm;
                let mut countdown = countdown;
                let mut guard_sub = guard_sub;
                let mut interval = tokio::time::interval(Duration::from_secs(1));
                interval.tick().await;
                loop {
                    interval.tick().await;
                    if vm.read().as_ref().is_none_or(QuizVm::is_finished) {
                        break;
                    }
                    let tick = countdown.write().tick();
                    match tick {
                        Tick::Running(_) => {}
                        Tick::JustExpired => {
                            if let Some(vm) = vm.write().as_mut() {
                                vm.finish();
                            }
                            if let Some(sub) = guard_sub.write().take() {
                                sub.release();
                            }
                            break;
                        }
                        Tick::AlreadyExpired => break,
                    }
                }
            });
            timer_sub.set(Some(Subscription::new(move || timer_task.cancel())));

            let bridge = eval(scripts::guard_bridge_script());
            let guard_task = spawn(async move {
                let mut guard = guard;
                let mut notice = notice;
                let mut bridge = bridge;
                while let Ok(message) = bridge.recv::<String>().await {
                    let Some(event) = parse_focus_event(&message) else {
                        continue;
                    };
                    let effect = guard.write().observe(event);
                    if let Some(text) = effect.notice {
                        notice.set(Some(text));
                    }
                    if effect.request_fullscreen {
                        let _ = eval(scripts::REQUEST_FULLSCREEN);
                    }
                }
            });
            guard_sub.set(Some(Subscription::new(move || guard_task.cancel())));
        })
    };

    let topic_route = Route::Topic {
        topic_id: topic_id.clone(),
    };
    let leave_route = topic_route.clone();
    let on_leave = use_callback(move |()| {
        let mut timer_sub = timer_sub;
        let mut guard_sub = guard_sub;
        if let Some(sub) = timer_sub.write().take() {
            sub.release();
        }
        if let Some(sub) = guard_sub.write().take() {
            sub.release();
        }
        let _ = eval(scripts::GUARD_UNINSTALL);
        let _ = navigator.push(leave_route.clone());
    });
    let on_retake = use_callback(move |()| {
        let mut vm = vm;
        let mut notice = notice;
        vm.set(None);
        notice.set(None);
    });

    let vm_guard = vm.read();
    let running = vm_guard.as_ref().and_then(|vm| match vm.phase() {
        QuizPhase::Running => vm.current_question().cloned().map(|question| RunningData {
            answer: vm.current_answer().cloned(),
            index: vm.current_index(),
            total: vm.total(),
            is_last: vm.is_last(),
            question,
        }),
        QuizPhase::Finished(_) => None,
    });
    let finished = vm_guard.as_ref().and_then(|vm| match vm.phase() {
        QuizPhase::Finished(result) => Some((result, vm.total())),
        QuizPhase::Running => None,
    });
    let guard_state = *guard.read();
    let countdown_state = *countdown.read();
    let notice_text = *notice.read();

    rsx! {
        div { class: "page quiz-page",
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
                        Link { class: "btn btn-secondary", to: topic_route.clone(), "Back to questions" }
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
                ViewState::Ready(document) => rsx! {
                    if let Some((result, total)) = finished {
                        QuizResults {
                            title: document.title.clone(),
                            result,
                            total,
                            topic_id: topic_id.clone(),
                            on_retake,
                        }
                    } else if let Some(data) = running {
                        div { class: "quiz-run", id: "quiz-run-root",
                            header { class: "quiz-run__header",
                                div { class: "quiz-run__heading",
                                    h2 { class: "quiz-run__title", "{document.title}" }
                                    p { class: "quiz-run__progress",
                                        "Question {data.index + 1} of {data.total}"
                                    }
                                }
                                span {
                                    class: "quiz-timer",
                                    class: if countdown_state.in_warning_window() { "quiz-timer--warning" },
                                    "{format_clock(countdown_state.remaining())}"
                                }
                            }
                            QuestionCard {
                                question: data.question.clone(),
                                answer: data.answer.clone(),
                                on_intent: dispatch,
                            }
                            nav { class: "quiz-run__nav",
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    disabled: data.index == 0,
                                    onclick: move |_| dispatch.call(QuizIntent::Prev),
                                    "← Previous"
                                }
                                if data.is_last {
                                    button {
                                        class: "btn btn-primary",
                                        r#type: "button",
                                        onclick: move |_| dispatch.call(QuizIntent::Finish),
                                        "Finish test"
                                    }
                                } else {
                                    button {
                                        class: "btn btn-primary",
                                        r#type: "button",
                                        onclick: move |_| dispatch.call(QuizIntent::Next),
                                        "Next →"
                                    }
                                }
                            }
                            button {
                                class: "quiz-run__leave",
                                r#type: "button",
                                onclick: move |_| on_leave.call(()),
                                "Leave test"
                            }
                            if guard_state.is_blocking() {
                                GuardOverlay {
                                    notice: notice_text,
                                    violations: guard_state.violation_count(),
                                    on_leave,
                                }
                            }
                        }
                    } else {
                        QuizSettings {
                            title: document.title.clone(),
                            total: document.questions.len(),
                            selected: selected_count,
                            error: *start_error.read(),
                            topic_id: topic_id.clone(),
                            on_start,
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn QuizSettings(
    title: String,
    total: usize,
    selected: Signal<Option<usize>>,
    error: Option<ViewError>,
    topic_id: String,
    on_start: EventHandler<usize>,
) -> Element {
    let options = count_options(total);
    let effective = selected.read().unwrap_or_else(|| default_count(total));

    rsx! {
        section { class: "quiz-settings",
            h2 { class: "quiz-settings__title", "{title}" }
            if total == 0 {
                p { "This test has no questions yet." }
                Link {
                    class: "btn btn-secondary",
                    to: Route::Topic { topic_id: topic_id.clone() },
                    "Back to questions"
                }
            } else {
                p { class: "quiz-settings__pool", "{total} questions available" }
                p { class: "quiz-settings__hint",
                    "The test runs in fullscreen with a 30 minute limit. Pick how many questions to answer."
                }
                div { class: "quiz-settings__options",
                    for option in options {
                        button {
                            key: "{option.value}",
                            class: "count-option",
                            class: if option.value == effective { "count-option--selected" },
                            r#type: "button",
                            onclick: move |_| {
                                let mut selected = selected;
                                selected.set(Some(option.value));
                            },
                            "{option.label}"
                        }
                    }
                }
                if let Some(err) = error {
                    p { class: "quiz-settings__error", "{err.message()}" }
                }
                nav { class: "quiz-settings__actions",
                    Link {
                        class: "btn btn-secondary",
                        to: Route::Topic { topic_id: topic_id.clone() },
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_start.call(effective),
                        "Start test"
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionCard(
    question: QuizQuestion,
    answer: Option<Answer>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let body = match question.kind() {
        QuestionKind::MultipleChoice { options, .. } => {
            let options = options.clone();
            rsx! {
                ul { class: "question-card__options",
                    for (index , option) in options.into_iter().enumerate() {
                        li { key: "{index}",
                            button {
                                class: "option-btn",
                                class: if answer == Some(Answer::Choice(index)) { "option-btn--selected" },
                                r#type: "button",
                                onclick: move |_| on_intent.call(QuizIntent::Answer(Answer::Choice(index))),
                                span { class: "option-btn__letter", "{option_letter(index)}." }
                                "{option}"
                            }
                        }
                    }
                }
            }
        }
        QuestionKind::OpenEnded { .. } => {
            let current = match &answer {
                Some(Answer::Text(text)) => text.clone(),
                _ => String::new(),
            };
            rsx! {
                textarea {
                    class: "question-card__free-text",
                    placeholder: "Type your answer",
                    value: "{current}",
                    oninput: move |evt| {
                        on_intent.call(QuizIntent::Answer(Answer::Text(evt.value())));
                    },
                }
            }
        }
    };

    rsx! {
        section { class: "question-card",
            h3 { class: "question-card__prompt", "{question.prompt()}" }
            {body}
        }
    }
}

#[component]
fn GuardOverlay(
    notice: Option<&'static str>,
    violations: u32,
    on_leave: EventHandler<()>,
) -> Element {
    let message = notice.unwrap_or("The test must be taken in fullscreen mode.");
    rsx! {
        div { class: "guard-overlay", role: "alertdialog", aria_modal: "true",
            div { class: "guard-overlay__panel",
                h2 { class: "guard-overlay__title", "⚠ Test paused" }
                p { class: "guard-overlay__message", "{message}" }
                if violations > 0 {
                    p { class: "guard-overlay__count", "Warnings: {violations}" }
                }
                div { class: "guard-overlay__actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = eval(scripts::REQUEST_FULLSCREEN);
                        },
                        "Return to fullscreen"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_leave.call(()),
                        "Leave test"
                    }
                }
            }
        }
    }
}

#[component]
fn QuizResults(
    title: String,
    result: ScoreResult,
    total: usize,
    topic_id: String,
    on_retake: EventHandler<()>,
) -> Element {
    let percentage = result.percentage();
    rsx! {
        section { class: "quiz-results",
            h2 { class: "quiz-results__title", "{title}" }
            p { class: "quiz-results__score", "{percentage}%" }
            p { class: "quiz-results__detail", "{result.correct} of {total} correct" }
            div { class: "quiz-results__bar",
                div {
                    class: "quiz-results__bar-fill",
                    style: "width: {percentage}%;",
                }
            }
            nav { class: "quiz-results__actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_retake.call(()),
                    "Try again"
                }
                Link {
                    class: "btn btn-secondary",
                    to: Route::Topic { topic_id: topic_id.clone() },
                    "Back to questions"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_messages_map_to_focus_events() {
        assert_eq!(
            parse_focus_event("fullscreen-exited"),
            Some(FocusEvent::FullscreenExited)
        );
        assert_eq!(
            parse_focus_event("fullscreen-restored"),
            Some(FocusEvent::FullscreenRestored)
        );
        assert_eq!(parse_focus_event("tab-hidden"), Some(FocusEvent::TabHidden));
        assert_eq!(parse_focus_event("tab-visible"), Some(FocusEvent::TabVisible));
        assert_eq!(parse_focus_event("resize"), None);
    }

    #[test]
    fn option_letters_run_from_a() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(1), 'B');
        assert_eq!(option_letter(3), 'D');
    }
}
