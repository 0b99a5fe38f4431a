//! Tests for article form validation.

use scrivener_core::{ArticleForm, ArticleLength, Audience, Genre};
use scrivener_error::ValidationIssue;

fn form(keyword: &str, genre: &str, audience: &str) -> ArticleForm {
    ArticleForm::builder()
        .keyword(keyword)
        .genre(genre)
        .audience(audience)
        .build()
        .expect("all fields have defaults")
}

#[test]
fn test_complete_form_validates() {
    let form = ArticleForm::builder()
        .keyword("  time management ")
        .genre("business")
        .audience("beginner")
        .sub_keywords("focus, planning")
        .length("long")
        .approach("")
        .build()
        .expect("all fields have defaults");

    let request = form.validate().expect("valid form");
    assert_eq!(request.keyword(), "time management");
    assert_eq!(*request.genre(), Genre::Business);
    assert_eq!(*request.audience(), Audience::Beginner);
    assert_eq!(request.sub_keywords().as_deref(), Some("focus, planning"));
    assert_eq!(*request.length(), ArticleLength::Long);
    assert_eq!(*request.approach(), None);
}

#[test]
fn test_length_defaults_to_standard() {
    let request = form("time management", "business", "beginner")
        .validate()
        .expect("valid form");
    assert_eq!(*request.length(), ArticleLength::Standard);
}

#[test]
fn test_two_character_keyword_passes() {
    assert!(form("AI", "technology", "general").validate().is_ok());
}

#[test]
fn test_one_character_keyword_fails() {
    let err = form("A", "technology", "general").validate().unwrap_err();
    assert_eq!(err.issues(), &[ValidationIssue::KeywordTooShort]);
}

#[test]
fn test_whitespace_keyword_fails() {
    let err = form("   \t ", "technology", "general").validate().unwrap_err();
    assert_eq!(err.issues(), &[ValidationIssue::KeywordTooShort]);
}

#[test]
fn test_all_missing_fields_are_reported_in_order() {
    let err = form("", "", "").validate().unwrap_err();
    assert_eq!(
        err.issues(),
        &[
            ValidationIssue::KeywordTooShort,
            ValidationIssue::MissingGenre,
            ValidationIssue::MissingAudience,
        ]
    );
    assert_eq!(err.messages().len(), 3);
}

#[test]
fn test_unknown_choices_are_reported() {
    let form = ArticleForm::builder()
        .keyword("time management")
        .genre("poetry")
        .audience("toddlers")
        .length("epic")
        .build()
        .expect("all fields have defaults");

    let err = form.validate().unwrap_err();
    assert_eq!(
        err.issues(),
        &[
            ValidationIssue::UnknownGenre("poetry".into()),
            ValidationIssue::UnknownAudience("toddlers".into()),
            ValidationIssue::UnknownLength("epic".into()),
        ]
    );
}

#[test]
fn test_title_request_needs_only_keyword() {
    let request = form("time management", "", "")
        .title_request()
        .expect("keyword alone is enough");
    assert_eq!(request.keyword(), "time management");
    assert_eq!(*request.genre(), None);
    assert_eq!(*request.audience(), None);

    let request = form("time management", "travel", "expert")
        .title_request()
        .expect("valid form");
    assert_eq!(*request.genre(), Some(Genre::Travel));
    assert_eq!(*request.audience(), Some(Audience::Expert));
}

#[test]
fn test_title_request_rejects_short_keyword() {
    let err = form("x", "", "").title_request().unwrap_err();
    assert_eq!(err.issues(), &[ValidationIssue::KeywordTooShort]);
}
