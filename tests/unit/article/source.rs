use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "infographics_{name}_{}_{}",
        std::process::id(),
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

fn write_article(dir: &std::path::Path, file: &str, title: &str, category: &str, published: u64) {
    let value = serde_json::json!({
        "title": title,
        "category": category,
        "published_unix": published,
        "article": { "title": title, "summary": format!("{title} summary") },
    });
    fs::write(dir.join(file), serde_json::to_vec(&value).unwrap()).unwrap();
}

#[test]
fn filters_by_category_and_lookback() {
    let dir = temp_dir("source_filter");
    fs::create_dir_all(&dir).unwrap();
    let now = now_unix();

    write_article(&dir, "a.json", "Fresh general", "general", now - 3_600);
    write_article(&dir, "b.json", "Stale general", "general", now - 10 * 86_400);
    write_article(&dir, "c.json", "Fresh politics", "politics", now - 3_600);

    let mut source = JsonArticleSource::new(&dir);
    let articles = source
        .recent_unique_articles(2, ArticleCategory::General)
        .unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "Fresh general");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn dedup_keeps_newest_per_title_and_sorts_newest_first() {
    let dir = temp_dir("source_dedup");
    fs::create_dir_all(&dir).unwrap();
    let now = now_unix();

    write_article(&dir, "a.json", "Same story", "general", now - 7_200);
    write_article(&dir, "b.json", "Same story", "general", now - 600);
    write_article(&dir, "c.json", "Other story", "general", now - 1_800);

    let mut source = JsonArticleSource::new(&dir);
    let articles = source
        .recent_unique_articles(2, ArticleCategory::General)
        .unwrap();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].title, "Same story");
    assert_eq!(articles[0].published_unix, now - 600);
    assert_eq!(articles[1].title, "Other story");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn non_json_files_are_skipped() {
    let dir = temp_dir("source_skip");
    fs::create_dir_all(&dir).unwrap();
    write_article(&dir, "a.json", "Story", "general", now_unix());
    fs::write(dir.join("notes.txt"), b"not an article").unwrap();

    let mut source = JsonArticleSource::new(&dir);
    let articles = source
        .recent_unique_articles(2, ArticleCategory::General)
        .unwrap();
    assert_eq!(articles.len(), 1);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_directory_is_an_error() {
    let mut source = JsonArticleSource::new(temp_dir("source_missing"));
    assert!(
        source
            .recent_unique_articles(2, ArticleCategory::General)
            .is_err()
    );
}

#[test]
fn payload_probes_fields_in_order() {
    let payload = ArticlePayload::from_value(serde_json::json!({
        "headline": "From headline",
        "summary": "  ",
        "content": "Body text",
    }))
    .unwrap();
    assert_eq!(
        payload.first_str(&["title", "headline"]),
        Some("From headline")
    );
    assert_eq!(
        payload.first_str(&["summary", "content"]),
        Some("Body text")
    );
    assert_eq!(payload.first_str(&["missing"]), None);
}

#[test]
fn payload_rejects_non_objects() {
    assert!(ArticlePayload::from_value(serde_json::json!([1, 2])).is_err());
}
