/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;
use strum_macros::{Display, EnumIter, EnumString};

pub const TRUSTED_HOSTS: [&str; 2] = [
    "https://images.unsplash.com",
    "https://customer-assets.emergentagent.com",
];

pub const API_PREFIX: &str = "/api/";

static UPLOAD_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/uploads/([a-f0-9-]+\.[a-z]+)$").expect("upload pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ImageKind {
    Service,
    Project,
    #[default]
    Default,
}

impl ImageKind {
    /// Unknown tags fall back to [`ImageKind::Default`].
    pub fn from_tag(tag: &str) -> Self {
        ImageKind::from_str(tag.trim()).unwrap_or_default()
    }
}

pub fn placeholder(kind: ImageKind) -> &'static str {
    match kind {
        ImageKind::Service => {
            "https://images.unsplash.com/photo-1598488035139-bdbb2231ce04?auto=format&fit=crop&q=80"
        }
        ImageKind::Project => {
            "https://images.unsplash.com/photo-1514320291840-2e0a9bf2a9ae?auto=format&fit=crop&q=80"
        }
        ImageKind::Default => {
            "https://images.unsplash.com/photo-1511379938547-c1f69419868d?auto=format&fit=crop&q=80"
        }
    }
}

/// Turns a stored image reference into something directly loadable from
/// `origin`. Never returns an empty string.
pub fn resolve_image_url(url: Option<&str>, kind: ImageKind, origin: &str) -> String {
    let url = match url.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => return placeholder(kind).to_string(),
    };

    let origin = origin.trim_end_matches('/');

    if url.starts_with(API_PREFIX) {
        return format!("{}{}", origin, url);
    }

    if TRUSTED_HOSTS.iter().any(|host| url.starts_with(host)) {
        return url.to_string();
    }

    // uploads referenced through an old host are served by the current origin
    if let Some(file) = UPLOAD_PATH.captures(url).and_then(|c| c.get(1)) {
        return format!("{}/api/uploads/{}", origin, file.as_str());
    }

    url.to_string()
}

/// Swaps a failed image for its placeholder once, then disarms so a failing
/// placeholder cannot loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageFallback {
    kind: ImageKind,
    armed: bool,
}

impl ImageFallback {
    pub fn new(kind: ImageKind) -> Self {
        Self { kind, armed: true }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn on_error(&mut self) -> Option<&'static str> {
        if !self.armed {
            return None;
        }

        self.armed = false;
        Some(placeholder(self.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    const ORIGIN: &str = "https://studio.example.com";

    #[test]
    fn test_missing_url_uses_placeholder() {
        for kind in ImageKind::iter() {
            assert_eq!(resolve_image_url(None, kind, ORIGIN), placeholder(kind));
            assert_eq!(resolve_image_url(Some(""), kind, ORIGIN), placeholder(kind));
            assert!(!resolve_image_url(Some("  "), kind, ORIGIN).is_empty());
        }
    }

    #[test]
    fn test_api_path_gets_origin() {
        assert_eq!(
            resolve_image_url(Some("/api/uploads/cover.png"), ImageKind::Project, "https://studio.example.com/"),
            "https://studio.example.com/api/uploads/cover.png"
        );
    }

    #[test]
    fn test_trusted_hosts_untouched() {
        let url = "https://images.unsplash.com/photo-1?auto=format";
        assert_eq!(resolve_image_url(Some(url), ImageKind::Service, ORIGIN), url);

        let url = "https://customer-assets.emergentagent.com/job/logo.jpg";
        assert_eq!(resolve_image_url(Some(url), ImageKind::Default, ORIGIN), url);
    }

    #[test]
    fn test_old_upload_host_rewritten() {
        assert_eq!(
            resolve_image_url(
                Some("https://old-preview.example.net/uploads/3f2a-bc19.JPG"),
                ImageKind::Project,
                ORIGIN
            ),
            "https://studio.example.com/api/uploads/3f2a-bc19.JPG"
        );

        // not a hex identifier, passed through
        let url = "https://cdn.example.net/uploads/holiday.jpg";
        assert_eq!(resolve_image_url(Some(url), ImageKind::Project, ORIGIN), url);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let inputs = [
            None,
            Some("/api/uploads/ab12.png"),
            Some("https://images.unsplash.com/photo-2"),
            Some("https://old.example.net/uploads/ab12-cd.webp"),
            Some("https://elsewhere.example.org/pic.gif"),
        ];

        for input in inputs {
            let once = resolve_image_url(input, ImageKind::Service, ORIGIN);
            let twice = resolve_image_url(Some(&once), ImageKind::Service, ORIGIN);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_kind_from_tag() {
        assert_eq!(ImageKind::from_tag("Project"), ImageKind::Project);
        assert_eq!(ImageKind::from_tag("avatar"), ImageKind::Default);
    }

    #[test]
    fn test_fallback_fires_once() {
        let mut fallback = ImageFallback::new(ImageKind::Service);

        assert_eq!(fallback.on_error(), Some(placeholder(ImageKind::Service)));
        assert!(!fallback.is_armed());
        assert_eq!(fallback.on_error(), None);
    }
}
