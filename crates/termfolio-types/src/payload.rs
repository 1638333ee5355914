//! Command result payloads.

use serde::Deserialize;

/// The rendered result attached to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Preformatted plain text.
    Text(String),
    /// Structured content; only renderers look inside.
    Rich(RichContent),
}

impl Payload {
    /// Plain-text payload from anything string-like.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// The text body, if this is a text payload.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Rich(_) => None,
        }
    }
}

/// Structured content rendered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RichContent {
    /// A profile card: headline, labelled fields, a motto and an optional picture.
    Profile {
        title: String,
        #[serde(default)]
        fields: Vec<ProfileField>,
        #[serde(default)]
        motto: Option<String>,
        #[serde(default)]
        image: Option<Image>,
    },
    /// A bulleted list of links.
    Links {
        #[serde(default)]
        items: Vec<Link>,
    },
    /// Contact lines: a name followed by its URL.
    Contacts {
        #[serde(default)]
        items: Vec<Link>,
    },
}

/// One `label: value` row of a profile card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileField {
    pub label: String,
    pub value: String,
}

/// A named hyperlink.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

impl Link {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// An image reference with alternative text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_text_on_text() {
        assert_eq!(Payload::text("hi").as_text(), Some("hi"));
    }

    #[test]
    fn as_text_on_rich() {
        let p = Payload::Rich(RichContent::Links { items: vec![] });
        assert_eq!(p.as_text(), None);
    }

    #[test]
    fn rich_links_from_toml() {
        let src = r#"
[links]
items = [{ name = "GitHub", url = "https://github.com" }]
"#;
        let rich: RichContent = toml::from_str(src).unwrap();
        assert_eq!(
            rich,
            RichContent::Links {
                items: vec![Link::new("GitHub", "https://github.com")]
            }
        );
    }

    #[test]
    fn rich_profile_from_toml_defaults() {
        let src = r#"
[profile]
title = "Agent"
"#;
        match toml::from_str::<RichContent>(src).unwrap() {
            RichContent::Profile {
                title,
                fields,
                motto,
                image,
            } => {
                assert_eq!(title, "Agent");
                assert!(fields.is_empty());
                assert!(motto.is_none());
                assert!(image.is_none());
            },
            other => panic!("expected profile, got {other:?}"),
        }
    }
}
