use image::DynamicImage;
use serde::Serialize;

use super::EnrichedArticle;

/// An image that was fetched (or loaded from disk) and decoded successfully.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedImage {
    /// URL or filesystem path the image came from.
    pub source: String,
    pub width: u32,
    pub height: u32,
    #[serde(skip)]
    pub image: DynamicImage,
}

impl DecodedImage {
    pub fn new(source: impl Into<String>, image: DynamicImage) -> Self {
        Self {
            source: source.into(),
            width: image.width(),
            height: image.height(),
            image,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Visual {
    Image(DecodedImage),
    Placeholder(DecodedImage),
    NoImage,
}

impl Visual {
    pub fn describe(&self) -> Option<String> {
        match self {
            Visual::Image(image) => Some(format!(
                "[image {}x{}] {}",
                image.width, image.height, image.source
            )),
            Visual::Placeholder(image) => Some(format!(
                "[placeholder image {}x{}]",
                image.width, image.height
            )),
            Visual::NoImage => None,
        }
    }
}

/// One display-ready item of a digest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    /// 1-based position among the records of its batch.
    pub position: usize,
    #[serde(flatten)]
    pub article: EnrichedArticle,
    pub visual: Visual,
}

impl DisplayRecord {
    pub fn new(position: usize, article: EnrichedArticle, visual: Visual) -> Self {
        Self {
            position,
            article,
            visual,
        }
    }

    /// Plain-text rendering used by the terminal front end.
    pub fn format(&self) -> String {
        let mut lines = vec![format!("({}) {}", self.position, self.article.title)];

        if let Some(visual) = self.visual.describe() {
            lines.push(format!("    {}", visual));
        }

        if !self.article.synopsis.is_empty() {
            lines.push(format!("    {}", self.article.synopsis));
        }

        let source = if self.article.source_url.is_empty() {
            self.article.link.as_str()
        } else {
            self.article.source_url.as_str()
        };
        lines.push(format!("    Read more at {}: {}", source, self.article.link));

        if !self.article.pub_date.is_empty() {
            lines.push(format!("    Published Date: {}", self.article.pub_date));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn article() -> EnrichedArticle {
        EnrichedArticle {
            title: "Rust 2024 ships".to_string(),
            link: "https://news.example.com/rust-2024".to_string(),
            pub_date: "Thu, 20 Feb 2025 10:00:00 GMT".to_string(),
            source_url: "https://news.example.com".to_string(),
            synopsis: "The edition is stable.".to_string(),
            top_image_url: None,
        }
    }

    #[test]
    fn test_format_with_all_fields() {
        let image = DecodedImage::new(
            "https://cdn.example.com/a.png",
            DynamicImage::ImageRgb8(RgbImage::new(4, 3)),
        );
        let record = DisplayRecord::new(2, article(), Visual::Image(image));

        assert_eq!(
            record.format(),
            "(2) Rust 2024 ships\n    [image 4x3] https://cdn.example.com/a.png\n    The edition is stable.\n    Read more at https://news.example.com: https://news.example.com/rust-2024\n    Published Date: Thu, 20 Feb 2025 10:00:00 GMT"
        );
    }

    #[test]
    fn test_format_without_image_or_synopsis() {
        let mut article = article();
        article.synopsis = String::new();
        article.pub_date = String::new();
        let record = DisplayRecord::new(1, article, Visual::NoImage);

        assert_eq!(
            record.format(),
            "(1) Rust 2024 ships\n    Read more at https://news.example.com: https://news.example.com/rust-2024"
        );
    }

    #[test]
    fn test_serialize_skips_pixels() {
        let image = DecodedImage::new("./Meta/no_image.jpg", DynamicImage::new_rgb8(2, 2));
        let record = DisplayRecord::new(1, article(), Visual::Placeholder(image));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["visual"]["kind"], "placeholder");
        assert_eq!(json["visual"]["width"], 2);
        assert!(json["visual"].get("image").is_none());
        assert_eq!(json["title"], "Rust 2024 ships");
    }
}
