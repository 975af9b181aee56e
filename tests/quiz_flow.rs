//! End-to-end session scenarios over the built-in catalog.

use rohe::catalog::{Region, RegionCatalog};
use rohe::session::SessionError;
use rohe::{QuizSession, SessionPhase};

fn three_regions() -> RegionCatalog {
    RegionCatalog::new(vec![
        Region::new("Northland", ["Te Tai Tokerau"]),
        Region::new("Auckland", ["Tāmaki Makaurau"]),
        Region::new("Otago", ["Ōtākou"]),
    ])
    .unwrap()
}

#[test]
fn perfect_round_over_the_full_map() {
    let catalog = RegionCatalog::aotearoa();
    let region_ids: Vec<String> = catalog
        .all_regions()
        .iter()
        .map(|region| region.id.clone())
        .collect();
    let mut session = QuizSession::builder()
        .catalog(catalog)
        .seed(2024)
        .build()
        .unwrap();

    let mut last_complete = false;
    for region_id in &region_ids {
        let choice = session.open_question(region_id).unwrap().correct_answer.clone();
        let outcome = session.submit_answer(&choice).unwrap();
        assert!(outcome.was_correct);
        last_complete = outcome.quiz_complete;
    }

    assert!(last_complete);
    assert!(session.is_complete());
    assert_eq!(session.correct_count(), 14);
    assert_eq!(session.incorrect_count(), 0);
    assert_eq!(session.accuracy_percent(), 100.0);

    let snapshot = session.snapshot();
    assert_eq!(
        snapshot.summary_line(),
        "Correct Answers: 14\nIncorrect Answers: 0\nPercentage: 100.00%"
    );
}

#[test]
fn mixed_round_reports_fractional_accuracy() {
    let mut session = QuizSession::with_seed(three_regions(), 5);

    let choice = session.open_question("Northland").unwrap().correct_answer.clone();
    let outcome = session.submit_answer(&choice).unwrap();
    assert!(outcome.was_correct);
    assert!(!outcome.quiz_complete);
    assert_eq!(session.correct_count(), 1);

    // Deliberately wrong: pick a name that cannot be Auckland's.
    session.open_question("Auckland").unwrap();
    let outcome = session.submit_answer("Te Tai Tokerau").unwrap();
    assert!(!outcome.was_correct);
    assert_eq!(outcome.correct_answer, "Tāmaki Makaurau");

    let choice = session.open_question("Otago").unwrap().correct_answer.clone();
    let outcome = session.submit_answer(&choice).unwrap();
    assert!(outcome.quiz_complete);

    assert_eq!(session.correct_count(), 2);
    assert_eq!(session.incorrect_count(), 1);
    assert_eq!(session.accuracy_percent(), 66.67);
}

#[test]
fn abandoning_and_closing_leave_no_trace_in_history() {
    let mut session = QuizSession::with_seed(three_regions(), 9);

    // Open, abandon by reopening, then close without answering.
    session.open_question("Northland").unwrap();
    session.open_question("Auckland").unwrap();
    session.close_question().unwrap();
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert!(session.history().is_empty());

    // Only the eventual submit writes a record, and only one.
    session.open_question("Northland").unwrap();
    session.open_question("Northland").unwrap();
    session.submit_answer("Te Tai Tokerau").unwrap();

    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history()[0].region_id, "Northland");
    assert!(session.history()[0].was_correct);
}

#[test]
fn play_again_replays_from_scratch() {
    let mut session = QuizSession::with_seed(three_regions(), 31);

    for region_id in ["Northland", "Auckland", "Otago"] {
        let choice = session.open_question(region_id).unwrap().options[0].clone();
        session.submit_answer(&choice).unwrap();
    }
    assert!(session.is_complete());

    session.reset();

    assert!(!session.is_complete());
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert!(session.history().is_empty());
    assert_eq!(session.accuracy_percent(), 0.0);

    // The whole map is askable again.
    for region_id in ["Northland", "Auckland", "Otago"] {
        let choice = session.open_question(region_id).unwrap().correct_answer.clone();
        session.submit_answer(&choice).unwrap();
    }
    assert_eq!(session.accuracy_percent(), 100.0);
}

#[test]
fn snapshot_serializes_for_the_exporter() {
    let mut session = QuizSession::with_seed(three_regions(), 17);
    session.open_question("Otago").unwrap();
    session.submit_answer("Ōtākou").unwrap();

    let json = session.snapshot().to_json().unwrap();

    assert!(json.contains("\"title\": \"Aotearoa Names Quiz Results\""));
    assert!(json.contains("\"region_id\": \"Otago\""));
    assert!(json.contains("\"was_correct\": true"));
    assert!(json.contains("\"total_questions\": 3"));
}

#[test]
fn sequencing_errors_are_typed_and_recoverable() {
    let mut session = QuizSession::with_seed(three_regions(), 1);

    assert_eq!(
        session.submit_answer("Ōtākou").unwrap_err(),
        SessionError::NoOpenQuestion
    );
    assert_eq!(session.close_question().unwrap_err(), SessionError::NoOpenQuestion);

    // The session is still usable after both failures.
    session.open_question("Otago").unwrap();
    let outcome = session.submit_answer("Ōtākou").unwrap();
    assert!(outcome.was_correct);
}
