mod effects;

pub use effects::{Dots, Effects, Gradient, Grid, Lines, Mask};

use http::Uri;
use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

static SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> =
    LazyLock::new(|| SiteContent::load("site.json"));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content: {0}")]
    ParseError(String),
}

/// Honeypot name of the list the site was first embedded with.
pub const DEFAULT_HONEYPOT: &str = "b_eaeb998e18672051e99b8e629_6e06b2b9c7";

#[derive(Debug, Clone, Deserialize)]
pub struct SiteContent {
    pub person: Person,
    pub home: Home,
    pub newsletter: Newsletter,
    pub mailchimp: Mailchimp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub name: String,
    pub first_name: String,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Home {
    pub title: String,
    pub headline: String,
    pub subline: String,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Newsletter {
    pub display: bool,
    #[serde(default)]
    pub title: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Mailchimp {
    /// Subscribe endpoint the form posts to.
    pub action: String,
    pub effects: Effects,
    /// Overrides the name derived from `action`.
    #[serde(default)]
    pub honeypot: Option<String>,
}

impl Mailchimp {
    /// Name of the anti-spam field that must be posted empty.
    pub fn honeypot_field(&self) -> String {
        self.honeypot
            .clone()
            .or_else(|| honeypot_from_action(&self.action))
            .unwrap_or_else(|| DEFAULT_HONEYPOT.to_string())
    }
}

/// Mailchimp names its honeypot `b_<u>_<id>` after the list identifiers in
/// the action URL.
fn honeypot_from_action(action: &str) -> Option<String> {
    let uri = action.parse::<Uri>().ok()?;
    let mut user = None;
    let mut list = None;
    for pair in uri.query()?.split('&') {
        match pair.split_once('=') {
            Some(("u", v)) if !v.is_empty() => user = Some(v),
            Some(("id", v)) if !v.is_empty() => list = Some(v),
            _ => {}
        }
    }
    Some(format!("b_{}_{}", user?, list?))
}

impl SiteContent {
    pub fn load(name: &str) -> Result<Self, ContentError> {
        let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
        Self::parse(&file.data)
    }

    pub fn parse(data: &[u8]) -> Result<Self, ContentError> {
        serde_json::from_slice(data).map_err(|e| ContentError::ParseError(e.to_string()))
    }

    pub fn newsletter_enabled(&self) -> bool {
        self.newsletter.display
    }

    pub fn newsletter_title(&self) -> String {
        match &self.newsletter.title {
            Some(title) => title.clone(),
            None => format!("Subscribe to {}'s Newsletter", self.person.first_name),
        }
    }
}

/// The embedded site content, parsed once.
pub fn site_content() -> Result<&'static SiteContent, ContentError> {
    SITE_CONTENT.as_ref().map_err(Clone::clone)
}
