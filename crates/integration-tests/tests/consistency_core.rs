//! Consistency Core Integration Tests
//!
//! Validation, existence checks and cascade delete against real SQLite.

mod common;

use common::TestApp;

/// Blank question text is rejected and nothing is stored
#[tokio::test]
async fn test_blank_question_is_rejected() {
    let app = TestApp::in_memory().await;

    for input in ["", "   ", "\n\t "] {
        let err = app.questions.create(input).await.unwrap_err();
        assert!(err.is_validation(), "expected validation error, got {err:?}");
    }

    assert!(app.questions.get_all().await.unwrap().is_empty());
    println!("✅ Blank questions rejected");
}

/// A created question gets an id and a timestamp no earlier than the call
#[tokio::test]
async fn test_create_question_stamps_time() {
    let app = TestApp::in_memory().await;
    let before = chrono::Utc::now().timestamp_millis();

    let question = app.questions.create("What is 2+2?").await.unwrap();

    assert!(question.id > 0);
    assert_eq!(question.text, "What is 2+2?");
    assert!(question.created_at >= before);
    assert!(question.answers.is_empty());

    let fetched = app.questions.get_by_id(question.id).await.unwrap();
    assert_eq!(fetched.text, question.text);
    assert_eq!(fetched.created_at, question.created_at);
}

/// Listing returns questions in creation order without answers attached
#[tokio::test]
async fn test_list_questions_without_answers() {
    let app = TestApp::in_memory().await;

    let first = app.questions.create("First?").await.unwrap();
    let second = app.questions.create("Second?").await.unwrap();
    app.answers.create(first.id, "alice", "yes").await.unwrap();

    let all = app.questions.get_all().await.unwrap();
    let ids: Vec<i64> = all.iter().map(|q| q.id).collect();

    assert_eq!(ids, vec![first.id, second.id]);
    assert!(all.iter().all(|q| q.answers.is_empty()));
}

/// Answers to an unknown question are refused and nothing is stored
#[tokio::test]
async fn test_answer_to_missing_question() {
    let app = TestApp::in_memory().await;

    let err = app.answers.create(999, "alice", "four").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(app.stored_answer_count(999).await, 0);
}

/// Field validation runs before the existence check
#[tokio::test]
async fn test_answer_validation_precedes_existence() {
    let app = TestApp::in_memory().await;

    let err = app.answers.create(999, "alice", "  ").await.unwrap_err();
    assert!(err.is_validation());

    let err = app.answers.create(999, "", "four").await.unwrap_err();
    assert!(err.is_validation());
}

/// Question detail lists its answers in creation order
#[tokio::test]
async fn test_question_detail_includes_answers() {
    let app = TestApp::in_memory().await;

    let question = app.questions.create("What is 2+2?").await.unwrap();
    let a1 = app.answers.create(question.id, "alice", "4").await.unwrap();
    let a2 = app.answers.create(question.id, "bob", "four").await.unwrap();

    let detail = app.questions.get_by_id(question.id).await.unwrap();

    assert_eq!(detail.answer_count(), 2);
    assert_eq!(detail.answers[0].id, a1.id);
    assert_eq!(detail.answers[1].id, a2.id);
    assert_eq!(detail.answers[1].user_id, "bob");
    assert!(detail.answers.iter().all(|a| a.question_id == question.id));

    let fetched = app.answers.get_by_id(a2.id).await.unwrap();
    assert_eq!(fetched.text, "four");
}

/// Deleting a question removes every answer with it
#[tokio::test]
async fn test_cascade_delete_removes_answers() {
    let app = TestApp::in_memory().await;

    let question = app.questions.create("What is 2+2?").await.unwrap();
    let a1 = app.answers.create(question.id, "alice", "4").await.unwrap();
    let a2 = app.answers.create(question.id, "bob", "four").await.unwrap();
    let other = app.questions.create("Unrelated?").await.unwrap();
    let kept = app.answers.create(other.id, "carol", "sure").await.unwrap();

    app.questions.delete(question.id).await.unwrap();

    assert!(app.questions.get_by_id(question.id).await.unwrap_err().is_not_found());
    assert!(app.answers.get_by_id(a1.id).await.unwrap_err().is_not_found());
    assert!(app.answers.get_by_id(a2.id).await.unwrap_err().is_not_found());
    assert_eq!(app.stored_answer_count(question.id).await, 0);

    // Other questions are untouched
    assert_eq!(app.answers.get_by_id(kept.id).await.unwrap().text, "sure");
    assert_eq!(app.questions.get_all().await.unwrap().len(), 1);
    println!("✅ Cascade delete removed 2 answers");
}

/// Deleting a question that never existed is NotFound and changes nothing
#[tokio::test]
async fn test_delete_unknown_question() {
    let app = TestApp::in_memory().await;
    let question = app.questions.create("Still here?").await.unwrap();

    let err = app.questions.delete(question.id + 100).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(app.questions.get_all().await.unwrap().len(), 1);
}

/// A second delete of the same question is NotFound
#[tokio::test]
async fn test_question_double_delete() {
    let app = TestApp::in_memory().await;
    let question = app.questions.create("Once?").await.unwrap();

    app.questions.delete(question.id).await.unwrap();
    let err = app.questions.delete(question.id).await.unwrap_err();

    assert!(err.is_not_found());
}

/// Deleting an answer leaves its question and sibling answers in place
#[tokio::test]
async fn test_answer_delete_is_isolated() {
    let app = TestApp::in_memory().await;

    let question = app.questions.create("What is 2+2?").await.unwrap();
    let a1 = app.answers.create(question.id, "alice", "4").await.unwrap();
    let a2 = app.answers.create(question.id, "bob", "four").await.unwrap();

    app.answers.delete(a1.id).await.unwrap();

    let detail = app.questions.get_by_id(question.id).await.unwrap();
    assert_eq!(detail.answer_count(), 1);
    assert_eq!(detail.answers[0].id, a2.id);

    let err = app.answers.delete(a1.id).await.unwrap_err();
    assert!(err.is_not_found());
}

/// Ids are never reused after deletion
#[tokio::test]
async fn test_ids_not_reused() {
    let app = TestApp::in_memory().await;

    let first = app.questions.create("First?").await.unwrap();
    app.questions.delete(first.id).await.unwrap();
    let second = app.questions.create("Second?").await.unwrap();

    assert!(second.id > first.id);
}
