//! Tests for article export.

use scrivener_core::{Article, ExportFormat};
use strum::IntoEnumIterator;

fn article(keyword: &str) -> Article {
    Article::builder()
        .keyword(keyword)
        .text("**Introduction:** Hello\n\n## Summary\n\nBye")
        .section_count(0usize)
        .build()
        .expect("valid article")
}

#[test]
fn test_text_and_markdown_are_identical() {
    let article = article("time management");
    assert_eq!(
        article.render(ExportFormat::Text),
        article.render(ExportFormat::Markdown)
    );
}

#[test]
fn test_every_format_parses_from_its_name() {
    for format in ExportFormat::iter() {
        assert_eq!(format.to_string().parse::<ExportFormat>().ok(), Some(format));
    }
    assert_eq!("MARKDOWN".parse::<ExportFormat>().ok(), Some(ExportFormat::Markdown));
}

#[test]
fn test_file_name_replaces_every_whitespace_character() {
    let article = article("time\u{3000}management tips");
    assert_eq!(
        article.file_name(ExportFormat::Text),
        "article_time_management_tips.txt"
    );
}

#[test]
fn test_file_name_replaces_path_separators() {
    assert_eq!(
        article("c/c++ notes").file_name(ExportFormat::Markdown),
        "article_c_c++_notes.md"
    );
    assert_eq!(
        article(r"..\notes").file_name(ExportFormat::Text),
        "article_.._notes.txt"
    );
}

#[test]
fn test_write_to_stays_inside_output_dir() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = article("../notes")
        .write_to(dir.path(), ExportFormat::Markdown)
        .expect("write succeeds");

    assert_eq!(path.parent(), Some(dir.path()));
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("article_.._notes.md")
    );
    assert!(path.is_file());
}

#[test]
fn test_write_to_creates_both_exports() {
    let dir = tempfile::tempdir().expect("temp dir");
    let article = article("time management");

    let text_path = article
        .write_to(dir.path(), ExportFormat::Text)
        .expect("write text");
    let md_path = article
        .write_to(dir.path(), ExportFormat::Markdown)
        .expect("write markdown");

    assert!(text_path.ends_with("article_time_management.txt"));
    assert!(md_path.ends_with("article_time_management.md"));
    let text = std::fs::read(&text_path).expect("read text");
    let md = std::fs::read(&md_path).expect("read markdown");
    assert_eq!(text, md);
    assert_eq!(text, article.text().as_bytes());
}
