use std::sync::Arc;

use content::{InMemoryQuestionSource, QuizDocument};
use quiz_core::Clock;
use quiz_core::model::{Answer, QuestionId, QuestionKind, QuizQuestion, TopicId};
use quiz_core::time::fixed_now;
use services::QuizService;

fn fixture_source(topic: &TopicId, n: usize) -> Arc<InMemoryQuestionSource> {
    let questions = (0..n)
        .map(|i| {
            QuizQuestion::new(
                QuestionId::new(format!("q{i}")).unwrap(),
                format!("Question {i}"),
                QuestionKind::MultipleChoice {
                    options: vec!["first".into(), "second".into(), "third".into()],
                    correct_index: i % 3,
                },
            )
            .unwrap()
        })
        .collect();

    let source = Arc::new(InMemoryQuestionSource::new());
    source.insert(
        topic.clone(),
        QuizDocument {
            title: "Smoke".into(),
            questions,
        },
    );
    source
}

#[tokio::test]
async fn unanswered_run_scores_zero_of_ten() {
    let topic = TopicId::new("css").unwrap();
    let service = QuizService::new(fixture_source(&topic, 12), Clock::fixed(fixed_now()));

    let document = service.load(&topic).await.unwrap();
    let mut session = service.start(&document, 10).unwrap();
    assert_eq!(session.total(), 10);

    let result = session.finish();
    assert_eq!(result.correct, 0);
    assert_eq!(result.total, 10);
    assert_eq!(result.percentage(), 0);
}

#[tokio::test]
async fn answering_every_question_correctly_scores_full_marks() {
    let topic = TopicId::new("js").unwrap();
    let service = QuizService::new(fixture_source(&topic, 6), Clock::fixed(fixed_now()));

    let document = service.load(&topic).await.unwrap();
    let mut session = service.start(&document, 6).unwrap();

    loop {
        let question = session.current_question().expect("a current question");
        let QuestionKind::MultipleChoice { correct_index, .. } = question.kind() else {
            panic!("fixture only contains multiple-choice questions");
        };
        let id = question.id().clone();
        let answer = Answer::Choice(*correct_index);
        session.record_answer(id, answer);
        if session.is_last() {
            break;
        }
        session.advance();
    }

    let result = session.finish();
    assert_eq!(result.correct, 6);
    assert_eq!(result.total, 6);
    assert_eq!(result.percentage(), 100);
}

#[tokio::test]
async fn revisiting_a_question_overwrites_its_answer() {
    let topic = TopicId::new("html").unwrap();
    let service = QuizService::new(fixture_source(&topic, 4), Clock::fixed(fixed_now()));

    let document = service.load(&topic).await.unwrap();
    let mut session = service.start(&document, 4).unwrap();

    let first_id = session.current_question().unwrap().id().clone();
    session.record_answer(first_id.clone(), Answer::Choice(2));
    session.advance();
    session.retreat();
    session.record_answer(first_id.clone(), Answer::Choice(1));

    assert_eq!(session.answer(&first_id), Some(&Answer::Choice(1)));
    assert_eq!(session.answered_count(), 1);
}
