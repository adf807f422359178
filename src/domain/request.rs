use std::fmt;
use std::ops::RangeInclusive;

use crate::errors::{NewsError, NewsResult};

/// Google News headline sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    World,
    Nation,
    Business,
    Technology,
    Entertainment,
    Sports,
    Science,
    Health,
}

impl Topic {
    pub const ALL: [Topic; 8] = [
        Topic::World,
        Topic::Nation,
        Topic::Business,
        Topic::Technology,
        Topic::Entertainment,
        Topic::Sports,
        Topic::Science,
        Topic::Health,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::World => "WORLD",
            Topic::Nation => "NATION",
            Topic::Business => "BUSINESS",
            Topic::Technology => "TECHNOLOGY",
            Topic::Entertainment => "ENTERTAINMENT",
            Topic::Sports => "SPORTS",
            Topic::Science => "SCIENCE",
            Topic::Health => "HEALTH",
        }
    }
}

impl std::str::FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|topic| topic.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown topic: {}", s))
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Trending,
    Category(Topic),
    Search(String),
}

impl Mode {
    /// Allowed values for the number of displayed items.
    pub fn count_bounds(&self) -> RangeInclusive<usize> {
        match self {
            Mode::Trending | Mode::Category(_) => 5..=25,
            Mode::Search(_) => 5..=15,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Mode::Trending => "Trending".to_string(),
            Mode::Category(topic) => topic.to_string(),
            Mode::Search(keyword) => keyword.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    mode: Mode,
    max_count: usize,
}

impl BatchRequest {
    /// Builds a request, rejecting counts outside the mode's bounds and blank search keywords.
    pub fn new(mode: Mode, max_count: usize) -> NewsResult<Self> {
        if let Mode::Search(keyword) = &mode {
            if keyword.trim().is_empty() {
                return Err(NewsError::InvalidInput(
                    "Please write a topic name to search".to_string(),
                ));
            }
        }

        let bounds = mode.count_bounds();
        if !bounds.contains(&max_count) {
            return Err(NewsError::InvalidInput(format!(
                "Number of news must be between {} and {}, got {}",
                bounds.start(),
                bounds.end(),
                max_count
            )));
        }

        Ok(Self { mode, max_count })
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }
}
