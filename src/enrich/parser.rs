//! Turns a downloaded article page into title, body text and top image.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

use crate::http::FetchedResource;

/// Media types accepted as article markup. Anything else is rejected unless the
/// server sent no content type at all.
const MARKUP_TYPES: &[&str] = &["text/html", "application/xhtml+xml", "application/xml", "text/xml"];

/// Containers tried in order when looking for the article body.
const BODY_REGIONS: &[&str] = &["article", "main", "[role=main]", "body"];

/// Meta/link sources for the top image, most authoritative first.
const IMAGE_META: &[(&str, &str)] = &[
    (r#"meta[property="og:image"]"#, "content"),
    (r#"meta[property="og:image:url"]"#, "content"),
    (r#"meta[name="twitter:image"]"#, "content"),
    (r#"meta[property="twitter:image"]"#, "content"),
    (r#"link[rel="image_src"]"#, "href"),
];

const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());
static IMG: Lazy<Selector> = Lazy::new(|| Selector::parse("img[src]").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static OG_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:title"]"#).unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArticle {
    pub title: Option<String>,
    /// Paragraphs separated by newlines, whitespace collapsed within each.
    pub text: String,
    pub top_image: Option<String>,
}

/// Parse a fetched page. The error is a human-readable reason.
pub fn parse_resource(resource: &FetchedResource, page_url: &str) -> Result<ParsedArticle, String> {
    if let Some(media_type) = resource.media_type() {
        if !MARKUP_TYPES.contains(&media_type.as_str()) {
            return Err(format!("unsupported content type {}", media_type));
        }
    }

    let html = String::from_utf8_lossy(&resource.bytes);
    parse_html(&html, Url::parse(page_url).ok().as_ref())
}

pub fn parse_html(html: &str, base_url: Option<&Url>) -> Result<ParsedArticle, String> {
    if html.trim().is_empty() {
        return Err("empty document".to_string());
    }

    let document = Html::parse_document(html);

    // html5ever always synthesizes html/head/body; plain text ends up with nothing else
    let has_markup = document
        .root_element()
        .descendants()
        .filter_map(|node| node.value().as_element())
        .any(|element| !matches!(element.name(), "html" | "head" | "body"));
    if !has_markup {
        return Err("no markup found in document".to_string());
    }

    let region = body_region(&document);

    Ok(ParsedArticle {
        title: extract_title(&document),
        text: region.map(extract_text).unwrap_or_default(),
        top_image: extract_top_image(&document, region, base_url),
    })
}

/// First container that holds at least one non-empty paragraph, else `<body>`.
fn body_region(document: &Html) -> Option<ElementRef<'_>> {
    let mut fallback = None;

    for region in BODY_REGIONS {
        let selector = match Selector::parse(region) {
            Ok(selector) => selector,
            Err(_) => continue,
        };

        if let Some(element) = document.select(&selector).next() {
            let has_paragraphs = element
                .select(&PARAGRAPH)
                .any(|p| !collapse_whitespace(&visible_text(p)).is_empty());
            if has_paragraphs {
                return Some(element);
            }
            fallback.get_or_insert(element);
        }
    }

    fallback
}

fn extract_text(region: ElementRef<'_>) -> String {
    let paragraphs: Vec<String> = region
        .select(&PARAGRAPH)
        .map(|p| collapse_whitespace(&visible_text(p)))
        .filter(|p| !p.is_empty())
        .collect();

    if paragraphs.is_empty() {
        collapse_whitespace(&visible_text(region))
    } else {
        paragraphs.join("\n")
    }
}

fn extract_title(document: &Html) -> Option<String> {
    document
        .select(&OG_TITLE)
        .filter_map(|meta| meta.value().attr("content"))
        .chain(document.select(&TITLE).map(|t| t.text().next().unwrap_or_default()))
        .map(collapse_whitespace)
        .find(|title| !title.is_empty())
}

fn extract_top_image(
    document: &Html,
    region: Option<ElementRef<'_>>,
    base_url: Option<&Url>,
) -> Option<String> {
    let from_meta = IMAGE_META.iter().find_map(|(selector, attr)| {
        let selector = Selector::parse(selector).ok()?;
        document
            .select(&selector)
            .filter_map(|element| element.value().attr(attr))
            .find_map(|candidate| resolve_image_url(candidate, base_url))
    });

    from_meta.or_else(|| {
        region?
            .select(&IMG)
            .filter_map(|img| img.value().attr("src"))
            .find_map(|candidate| resolve_image_url(candidate, base_url))
    })
}

fn resolve_image_url(candidate: &str, base_url: Option<&Url>) -> Option<String> {
    let candidate = candidate.trim();
    if candidate.is_empty() || candidate.starts_with("data:") {
        return None;
    }

    let resolved = match base_url {
        Some(base) => base.join(candidate).ok()?,
        None => Url::parse(candidate).ok()?,
    };

    matches!(resolved.scheme(), "http" | "https").then(|| resolved.to_string())
}

/// Text of an element, leaving out scripts and styles.
///
/// Walks the subtree with an explicit stack; pages nest arbitrarily deep.
fn visible_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();

    // (node, closing): closing entries mark the end of an element's subtree
    let mut stack: Vec<_> = element.children().map(|node| (node, false)).collect();
    stack.reverse();

    while let Some((node, closing)) = stack.pop() {
        match node.value() {
            Node::Text(t) => text.push_str(t),
            Node::Element(inner) if closing => {
                // Keep word boundaries across block elements
                if matches!(inner.name(), "br" | "div" | "li" | "p") {
                    text.push(' ');
                }
            }
            Node::Element(inner) => {
                if SKIPPED_ELEMENTS.contains(&inner.name()) {
                    continue;
                }
                stack.push((node, true));
                let children: Vec<_> = node.children().map(|child| (child, false)).collect();
                stack.extend(children.into_iter().rev());
            }
            _ => {}
        }
    }

    text
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Fallback title | Example</title>
  <meta property="og:title" content="Probe reaches Jupiter">
  <meta property="og:image" content="/media/jupiter.jpg">
  <script>var tracking = "ignore me";</script>
</head>
<body>
  <nav><p>Home</p></nav>
  <article>
    <h1>Probe reaches Jupiter</h1>
    <p>The spacecraft entered orbit   on Monday.</p>
    <p>Scientists <b>celebrated</b> the arrival.<script>alert(1)</script></p>
    <img src="https://cdn.example.com/inline.png">
  </article>
</body>
</html>"#;

    fn base() -> Url {
        Url::parse("https://news.example.com/space/jupiter").unwrap()
    }

    #[test]
    fn test_parse_article_region() {
        let parsed = parse_html(ARTICLE_PAGE, Some(&base())).unwrap();

        assert_eq!(parsed.title.as_deref(), Some("Probe reaches Jupiter"));
        assert_eq!(
            parsed.text,
            "The spacecraft entered orbit on Monday.\nScientists celebrated the arrival."
        );
        assert_eq!(
            parsed.top_image.as_deref(),
            Some("https://news.example.com/media/jupiter.jpg")
        );
    }

    #[test]
    fn test_top_image_falls_back_to_inline_img() {
        let html = r#"<html><head><title>T</title></head><body>
            <main><p>Body text.</p><img src="data:image/png;base64,AAAA"><img src="pics/a.png"></main>
        </body></html>"#;

        let parsed = parse_html(html, Some(&base())).unwrap();
        assert_eq!(
            parsed.top_image.as_deref(),
            Some("https://news.example.com/space/pics/a.png")
        );
        assert_eq!(parsed.text, "Body text.");
    }

    #[test]
    fn test_no_image_is_not_an_error() {
        let html = "<html><body><article><p>Only words here.</p></article></body></html>";
        let parsed = parse_html(html, None).unwrap();
        assert!(parsed.top_image.is_none());
        assert!(parsed.title.is_none());
    }

    #[test]
    fn test_body_text_without_paragraphs() {
        let html = "<html><body><div>Breaking: <span>details</span> soon</div></body></html>";
        let parsed = parse_html(html, None).unwrap();
        assert_eq!(parsed.text, "Breaking: details soon");
    }

    #[test]
    fn test_deeply_nested_markup() {
        let depth = 100_000;
        let html = format!(
            "<html><body>{}deep text{}</body></html>",
            "<span>".repeat(depth),
            "</span>".repeat(depth)
        );

        let parsed = parse_html(&html, None).unwrap();
        assert_eq!(parsed.text, "deep text");
    }

    #[test]
    fn test_plain_text_fails() {
        let err = parse_html("just some words, no tags", None).unwrap_err();
        assert!(err.contains("no markup"));
    }

    #[test]
    fn test_empty_document_fails() {
        assert!(parse_html("   \n", None).is_err());
    }

    #[test]
    fn test_binary_content_type_rejected() {
        let resource = FetchedResource::new(&b"%PDF-1.7"[..], Some("application/pdf"));
        let err = parse_resource(&resource, "https://example.com/doc.pdf").unwrap_err();
        assert!(err.contains("application/pdf"));
    }
}
