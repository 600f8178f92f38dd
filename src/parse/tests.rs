// Parse module tests.

use super::*;
use scraper::Html;

fn doc(html: &str) -> Html {
    Html::parse_document(html)
}

#[test]
fn test_extract_title_basic() {
    let html = doc(r#"<html><head><title>Test Page</title></head><body></body></html>"#);
    assert_eq!(extract_title(&html).as_deref(), Some("Test Page"));
}

#[test]
fn test_extract_title_with_whitespace() {
    let html = doc(
        r#"<html><head><title>
        Test Page
    </title></head></html>"#,
    );
    assert_eq!(extract_title(&html).as_deref(), Some("Test Page"));
}

#[test]
fn test_extract_title_missing_is_none() {
    let html = doc(r#"<html><head></head><body><h1>No title here</h1></body></html>"#);
    assert_eq!(extract_title(&html), None);
    assert_eq!(extract_meta_tags(&html).title, None);
}

#[test]
fn test_extract_title_empty_is_none() {
    let html = doc(r#"<html><head><title>   </title></head></html>"#);
    assert_eq!(extract_title(&html), None);
}

#[test]
fn test_meta_name_takes_priority_over_property() {
    let html = doc(
        r#"<html><head>
        <meta property="description" content="from property">
        <meta name="description" content="from name">
        </head></html>"#,
    );
    assert_eq!(
        meta_content(&html, "description").as_deref(),
        Some("from name")
    );
}

#[test]
fn test_meta_falls_back_to_property() {
    let html = doc(r#"<html><head><meta property="og:title" content="OG Title"></head></html>"#);
    assert_eq!(meta_content(&html, "og:title").as_deref(), Some("OG Title"));
}

#[test]
fn test_meta_empty_content_falls_through() {
    let html = doc(
        r#"<html><head>
        <meta name="og:image" content="">
        <meta property="og:image" content="https://example.com/a.png">
        </head></html>"#,
    );
    assert_eq!(
        meta_content(&html, "og:image").as_deref(),
        Some("https://example.com/a.png")
    );
}

#[test]
fn test_meta_selectors_are_built_once_per_field() {
    let cached: Vec<&str> = meta::META_SELECTORS.iter().map(|(name, _)| *name).collect();
    assert_eq!(cached, meta::META_NAMES);

    // Names outside the fixed set still resolve
    let html = doc(r#"<html><head><meta name="author" content="Jane"></head></html>"#);
    assert_eq!(meta_content(&html, "author").as_deref(), Some("Jane"));
}

#[test]
fn test_extract_meta_tags_full_document() {
    let html = doc(
        r#"<!doctype html><html><head>
        <meta charset="utf-8">
        <title>Shop</title>
        <meta name="description" content="Best shop">
        <meta name="keywords" content="shop, buy">
        <meta name="robots" content="index,follow">
        <meta property="og:title" content="Shop OG">
        <meta property="og:description" content="OG desc">
        <meta property="og:image" content="https://shop.example/og.png">
        <meta name="twitter:title" content="Shop TW">
        <meta name="twitter:description" content="TW desc">
        <meta name="twitter:image" content="https://shop.example/tw.png">
        <meta name="viewport" content="width=device-width, initial-scale=1">
        <link rel="canonical" href="https://shop.example/">
        </head><body></body></html>"#,
    );

    let meta = extract_meta_tags(&html);
    assert_eq!(
        meta,
        MetaResult {
            title: Some("Shop".into()),
            description: Some("Best shop".into()),
            keywords: Some("shop, buy".into()),
            robots: Some("index,follow".into()),
            og_title: Some("Shop OG".into()),
            og_description: Some("OG desc".into()),
            og_image: Some("https://shop.example/og.png".into()),
            twitter_title: Some("Shop TW".into()),
            twitter_description: Some("TW desc".into()),
            twitter_image: Some("https://shop.example/tw.png".into()),
            canonical: Some("https://shop.example/".into()),
            viewport: Some("width=device-width, initial-scale=1".into()),
            charset: Some("utf-8".into()),
        }
    );
}

#[test]
fn test_meta_result_serializes_nulls_in_camel_case() {
    let value = serde_json::to_value(MetaResult::default()).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 13);
    assert!(object["ogTitle"].is_null());
    assert!(object["twitterDescription"].is_null());
    assert!(object["charset"].is_null());
}

#[test]
fn test_charset_comes_from_attribute_not_content() {
    let html = doc(
        r#"<html><head><meta http-equiv="Content-Type" content="text/html; charset=latin1"></head></html>"#,
    );
    assert_eq!(extract_meta_tags(&html).charset, None);
}

#[test]
fn test_headings_h1_then_h3_reports_one_issue() {
    let html = doc(r#"<body><h1>Main</h1><h3>Deep</h3></body>"#);
    let report = analyze_headings(&html);

    assert_eq!(report.h1_count, 1);
    assert_eq!(report.heading_count, 2);
    assert_eq!(
        report.order_issues,
        vec![OrderIssue {
            previous: "h1".into(),
            current: "h3".into(),
            text: "Deep".into(),
        }]
    );
    assert_eq!(report.message, MESSAGE_LEVEL_JUMPS);
}

#[test]
fn test_headings_no_h1_wins_over_everything() {
    let html = doc(r#"<body><h2>A</h2><h5>B</h5><h6>C</h6></body>"#);
    let report = analyze_headings(&html);
    assert_eq!(report.h1_count, 0);
    assert!(!report.order_issues.is_empty());
    assert_eq!(report.message, "No <h1> found");
}

#[test]
fn test_headings_empty_document() {
    let report = analyze_headings(&doc("<html><body><p>text</p></body></html>"));
    assert_eq!(report.heading_count, 0);
    assert!(report.headings.is_empty());
    assert_eq!(report.message, MESSAGE_NO_H1);
}

#[test]
fn test_headings_multiple_h1_beats_jumps() {
    let html = doc(r#"<body><h1>One</h1><h1>Two</h1><h4>Jump</h4></body>"#);
    let report = analyze_headings(&html);
    assert_eq!(report.h1_count, 2);
    assert_eq!(report.order_issues.len(), 1);
    assert_eq!(report.message, MESSAGE_MULTIPLE_H1);
}

#[test]
fn test_headings_looks_good() {
    let html = doc(r#"<body><h1>T</h1><h2>A</h2><h3>A.1</h3><h2>B</h2></body>"#);
    let report = analyze_headings(&html);
    assert!(report.order_issues.is_empty());
    assert_eq!(report.message, "Heading structure looks good");
}

#[test]
fn test_headings_are_grouped_by_level() {
    // Markup order is h2, h1, h3; collection order is h1, h2, h3
    let html = doc(r#"<body><h2>Second</h2><h1>First</h1><h3>Third</h3></body>"#);
    let headings = extract_headings(&html);
    let tags: Vec<&str> = headings.iter().map(|h| h.tag.as_str()).collect();
    assert_eq!(tags, vec!["h1", "h2", "h3"]);
    assert_eq!(headings[0].text, "First");
}

#[test]
fn test_headings_grouping_decides_jumps() {
    // In markup h3 follows h2, but grouped collection puts it straight after h1
    let html = doc(r#"<body><h1>T</h1><h3>Deep</h3><h2>Later</h2></body>"#);
    let report = analyze_headings(&html);
    assert!(report.order_issues.is_empty());
}

#[test]
fn test_headings_text_is_trimmed_and_flattened() {
    let html = doc("<body><h1>\n  Hello <span>nested</span> world \n</h1></body>");
    let headings = extract_headings(&html);
    assert_eq!(headings[0].text, "Hello nested world");
    assert_eq!(headings[0].level, 1);
}

#[test]
fn test_find_order_issues_tracks_decreases() {
    let headings = vec![
        HeadingRecord { level: 1, tag: "h1".into(), text: "a".into() },
        HeadingRecord { level: 4, tag: "h4".into(), text: "b".into() },
        HeadingRecord { level: 2, tag: "h2".into(), text: "c".into() },
        HeadingRecord { level: 4, tag: "h4".into(), text: "d".into() },
    ];
    let issues = find_order_issues(&headings);
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].previous, "h1");
    assert_eq!(issues[1].previous, "h2");
    assert_eq!(issues[1].text, "d");
}

#[test]
fn test_heading_report_serializes_camel_case() {
    let report = analyze_headings(&doc("<h1>Only</h1>"));
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["headingCount"], 1);
    assert_eq!(value["h1Count"], 1);
    assert_eq!(value["headings"][0]["tag"], "h1");
    assert!(value["orderIssues"].as_array().unwrap().is_empty());
    assert_eq!(value["message"], MESSAGE_OK);
}
