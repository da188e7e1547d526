//! Java language levels as written in Gradle build files.
//!
//! `sourceCompatibility` shows up in several spellings (`1.6`, `'1.6'`,
//! `VERSION_1_6`, `JavaVersion.VERSION_1_6`); parsing accepts all of them and
//! converting writes a level back in the spelling already used by the file.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const JAVA_VERSION_PREFIX: &str = "JavaVersion.";
const VERSION_PREFIX: &str = "VERSION_";

static LEVEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:1[._])?([3-9])$").expect("language level pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum LanguageLevel {
    #[serde(rename = "1.3")]
    Jdk1_3,
    #[serde(rename = "1.4")]
    Jdk1_4,
    #[serde(rename = "1.5")]
    Jdk1_5,
    #[serde(rename = "1.6")]
    Jdk1_6,
    #[serde(rename = "1.7")]
    Jdk1_7,
    #[serde(rename = "1.8")]
    Jdk1_8,
    #[serde(rename = "1.9")]
    Jdk1_9,
}

impl LanguageLevel {
    fn from_minor(minor: u32) -> Option<Self> {
        match minor {
            3 => Some(LanguageLevel::Jdk1_3),
            4 => Some(LanguageLevel::Jdk1_4),
            5 => Some(LanguageLevel::Jdk1_5),
            6 => Some(LanguageLevel::Jdk1_6),
            7 => Some(LanguageLevel::Jdk1_7),
            8 => Some(LanguageLevel::Jdk1_8),
            9 => Some(LanguageLevel::Jdk1_9),
            _ => None,
        }
    }

    pub fn minor(self) -> u32 {
        match self {
            LanguageLevel::Jdk1_3 => 3,
            LanguageLevel::Jdk1_4 => 4,
            LanguageLevel::Jdk1_5 => 5,
            LanguageLevel::Jdk1_6 => 6,
            LanguageLevel::Jdk1_7 => 7,
            LanguageLevel::Jdk1_8 => 8,
            LanguageLevel::Jdk1_9 => 9,
        }
    }
}

impl fmt::Display for LanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1.{}", self.minor())
    }
}

impl FromStr for LanguageLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from_gradle_string(s).ok_or_else(|| format!("unknown language level: {}", s))
    }
}

fn quote_of(s: &str) -> Option<char> {
    let first = s.chars().next()?;
    if (first == '\'' || first == '"') && s.len() >= 2 && s.ends_with(first) {
        Some(first)
    } else {
        None
    }
}

pub fn parse_from_gradle_string(value: &str) -> Option<LanguageLevel> {
    let mut s = value.trim();
    if quote_of(s).is_some() {
        s = &s[1..s.len() - 1];
    }
    let s = s.strip_prefix(JAVA_VERSION_PREFIX).unwrap_or(s);
    let s = s.strip_prefix(VERSION_PREFIX).unwrap_or(s);

    let caps = LEVEL_PATTERN.captures(s)?;
    let minor = caps.get(1)?.as_str().parse().ok()?;
    LanguageLevel::from_minor(minor)
}

/// Render `level` in the same style as `old_value`.
pub fn convert_to_gradle_string(level: LanguageLevel, old_value: &str) -> String {
    let old = old_value.trim();
    if let Some(quote) = quote_of(old) {
        return format!("{quote}{level}{quote}");
    }

    let constant = format!("{}1_{}", VERSION_PREFIX, level.minor());
    if old.starts_with(JAVA_VERSION_PREFIX) {
        format!("{}{}", JAVA_VERSION_PREFIX, constant)
    } else if old.starts_with(VERSION_PREFIX) {
        constant
    } else {
        level.to_string()
    }
}
