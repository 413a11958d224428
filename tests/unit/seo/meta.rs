use super::*;

fn config() -> CardConfig {
    CardConfig {
        title: "Ship It".into(),
        description: "Daily releases".into(),
        source_url: "https://blog.example.com/posts/ship-it".into(),
        ..CardConfig::default()
    }
}

#[test]
fn basic_block_has_title_and_description() {
    let tags = MetaTags::for_config(&config(), None);
    assert_eq!(
        tags.basic,
        "<title>Ship It</title>\n<meta name=\"description\" content=\"Daily releases\">"
    );
}

#[test]
fn open_graph_uses_placeholder_until_hosted() {
    let tags = MetaTags::for_config(&config(), None);
    let lines: Vec<&str> = tags.open_graph.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        r#"<meta property="og:url" content="https://blog.example.com/posts/ship-it">"#
    );
    assert_eq!(lines[1], r#"<meta property="og:type" content="website">"#);
    assert_eq!(
        lines[4],
        format!(r#"<meta property="og:image" content="{PLACEHOLDER_IMAGE_URL}">"#)
    );

    let hosted = MetaTags::for_config(&config(), Some("https://i.ibb.co/abc.png"));
    assert!(hosted.open_graph.ends_with(r#"content="https://i.ibb.co/abc.png">"#));
    assert!(hosted.twitter.ends_with(r#"content="https://i.ibb.co/abc.png">"#));
}

#[test]
fn blank_hosted_url_falls_back_to_placeholder() {
    let tags = MetaTags::for_config(&config(), Some("  "));
    assert!(tags.twitter.contains(PLACEHOLDER_IMAGE_URL));
}

#[test]
fn twitter_block_order_and_domain() {
    let tags = MetaTags::for_config(&config(), None);
    let keys: Vec<&str> = tags
        .twitter
        .lines()
        .map(|l| l.split('"').nth(1).unwrap())
        .collect();
    assert_eq!(
        keys,
        [
            "twitter:card",
            "twitter:domain",
            "twitter:url",
            "twitter:title",
            "twitter:description",
            "twitter:image"
        ]
    );
    assert!(
        tags.twitter
            .contains(r#"<meta property="twitter:domain" content="blog.example.com">"#)
    );
}

#[test]
fn domain_extraction() {
    assert_eq!(twitter_domain("https://example.com"), "example.com");
    assert_eq!(twitter_domain("http://example.com/a/b"), "example.com");
    assert_eq!(twitter_domain("HTTPS://Example.com/x"), "Example.com");
    assert_eq!(twitter_domain("example.com/path"), "example.com");
    assert_eq!(twitter_domain(""), "");
}

#[test]
fn content_is_html_escaped() {
    let cfg = CardConfig {
        title: r#"Tom & "Jerry" <3"#.into(),
        ..config()
    };
    let tags = MetaTags::for_config(&cfg, None);
    assert!(
        tags.basic
            .starts_with("<title>Tom &amp; &quot;Jerry&quot; &lt;3</title>")
    );
    assert!(tags.open_graph.contains("content=\"Tom &amp; &quot;Jerry&quot; &lt;3\""));
}

#[test]
fn html_joins_blocks() {
    let tags = MetaTags::for_config(&config(), None);
    let html = tags.to_html();
    assert_eq!(html.matches("\n\n").count(), 2);
    assert!(html.starts_with("<title>"));
    assert!(html.ends_with(">\n"));
}
