//! Typed content decoded from a payload.

use serde::Serialize;

use crate::constants::AUTO_EXPAND_PADDING;

/// Server-declared content type of an in-app message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentType {
    #[default]
    Html,
    Alert,
    Banner,
    InboxHtml,
}

impl ContentType {
    /// Case-sensitive lookup. Unknown names resolve to [`ContentType::Html`]
    /// so newer server types still render as plain HTML.
    pub fn from_name(name: &str) -> Self {
        match name {
            "html" => ContentType::Html,
            "alert" => ContentType::Alert,
            "banner" => ContentType::Banner,
            "inboxHtml" => ContentType::InboxHtml,
            _ => ContentType::Html,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Html => "html",
            ContentType::Alert => "alert",
            ContentType::Banner => "banner",
            ContentType::InboxHtml => "inboxHtml",
        }
    }
}

/// Side of the message frame a padding applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Left,
    Bottom,
    Right,
}

/// Padding around the rendered message, one value per side.
///
/// A value of `-1` means the side auto-expands; anything else is a
/// percentage of the screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EdgeInsets {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0,
        left: 0,
        bottom: 0,
        right: 0,
    };

    pub fn get(&self, side: Side) -> i32 {
        match side {
            Side::Top => self.top,
            Side::Left => self.left,
            Side::Bottom => self.bottom,
            Side::Right => self.right,
        }
    }

    pub fn set(&mut self, side: Side, value: i32) {
        match side {
            Side::Top => self.top = value,
            Side::Left => self.left = value,
            Side::Bottom => self.bottom = value,
            Side::Right => self.right = value,
        }
    }

    pub fn is_auto_expand(&self, side: Side) -> bool {
        self.get(side) == AUTO_EXPAND_PADDING
    }
}

/// HTML in-app message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InAppHtmlContent {
    pub edge_insets: EdgeInsets,
    pub background_alpha: f64,
    pub html: String,
}

/// HTML message shown in the inbox list, with its list metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxHtmlContent {
    pub edge_insets: EdgeInsets,
    pub background_alpha: f64,
    pub html: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub icon: Option<String>,
}

/// Decoded message content, one variant per renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "html")]
    InAppHtml(InAppHtmlContent),
    #[serde(rename = "inboxHtml")]
    InboxHtml(InboxHtmlContent),
}

impl Content {
    pub fn content_type(&self) -> ContentType {
        match self {
            Content::InAppHtml(_) => ContentType::Html,
            Content::InboxHtml(_) => ContentType::InboxHtml,
        }
    }

    pub fn html(&self) -> &str {
        match self {
            Content::InAppHtml(c) => &c.html,
            Content::InboxHtml(c) => &c.html,
        }
    }

    pub fn edge_insets(&self) -> EdgeInsets {
        match self {
            Content::InAppHtml(c) => c.edge_insets,
            Content::InboxHtml(c) => c.edge_insets,
        }
    }

    pub fn background_alpha(&self) -> f64 {
        match self {
            Content::InAppHtml(c) => c.background_alpha,
            Content::InboxHtml(c) => c.background_alpha,
        }
    }
}
