//! Turns a content payload into typed [`Content`] based on its `contentType`.

use serde_json::{Map, Value};
use tracing::debug;

use crate::constants::{
    AUTO_EXPAND, AUTO_EXPAND_PADDING, BACKGROUND_ALPHA, CONTENT_TYPE, DISPLAY_OPTION,
    DISPLAY_SETTINGS, HREF_MARKER, HTML, INBOX_ICON, INBOX_SUBTITLE, INBOX_TITLE, PADDING_BOTTOM,
    PADDING_LEFT, PADDING_RIGHT, PADDING_TOP, PERCENTAGE,
};
use crate::content::{Content, ContentType, EdgeInsets, InAppHtmlContent, InboxHtmlContent, Side};
use crate::error::{ParseError, ParseResult};
use crate::payload::PayloadExt;

/// Decoder for one content type.
pub type ContentCreator = fn(&Value) -> ParseResult;

/// Parse a content payload.
///
/// A missing, non-string or unknown `contentType` is decoded as plain HTML.
pub fn parse(payload: &Value) -> ParseResult {
    let content_type = payload
        .string_value(CONTENT_TYPE)
        .map(ContentType::from_name)
        .unwrap_or_default();
    debug!(content_type = content_type.as_str(), "Parsing in-app content");

    let result = content_creator(content_type)(payload);
    if let Err(e) = &result {
        debug!(content_type = content_type.as_str(), reason = %e, "Rejected in-app content");
    }
    result
}

pub fn content_creator(content_type: ContentType) -> ContentCreator {
    match content_type {
        ContentType::InboxHtml => create_inbox_html_content,
        ContentType::Html | ContentType::Alert | ContentType::Banner => create_in_app_html_content,
    }
}

/// Fields common to every HTML content variant.
#[derive(Debug, Clone, PartialEq)]
struct HtmlContent {
    edge_insets: EdgeInsets,
    background_alpha: f64,
    html: String,
}

fn decode_html(payload: &Value) -> Result<HtmlContent, ParseError> {
    let html = payload.string_value(HTML).ok_or(ParseError::MissingHtml)?;
    if !html.to_lowercase().contains(HREF_MARKER) {
        return Err(ParseError::MissingHref {
            html: html.to_string(),
        });
    }

    let settings = payload.dict_value(DISPLAY_SETTINGS);
    Ok(HtmlContent {
        edge_insets: padding(settings),
        background_alpha: background_alpha(settings),
        html: html.to_string(),
    })
}

/// Padding for all four sides; sides that are absent stay at zero.
pub fn padding(settings: Option<&Map<String, Value>>) -> EdgeInsets {
    let Some(settings) = settings else {
        return EdgeInsets::ZERO;
    };

    let mut insets = EdgeInsets::ZERO;
    for (key, side) in [
        (PADDING_TOP, Side::Top),
        (PADDING_LEFT, Side::Left),
        (PADDING_RIGHT, Side::Right),
        (PADDING_BOTTOM, Side::Bottom),
    ] {
        if let Some(value) = settings.field(key) {
            insets.set(side, decode_padding(value));
        }
    }
    insets
}

/// Padding for one side: `-1` for auto-expand, otherwise the truncated
/// percentage, or `0` when the descriptor is malformed.
pub fn decode_padding(value: &Value) -> i32 {
    let Some(descriptor) = value.as_object() else {
        return 0;
    };

    if descriptor.string_value(DISPLAY_OPTION) == Some(AUTO_EXPAND) {
        return AUTO_EXPAND_PADDING;
    }
    // `as` truncates toward zero and saturates at the i32 bounds
    descriptor
        .number_value(PERCENTAGE)
        .map(|percentage| percentage as i32)
        .unwrap_or(0)
}

pub fn background_alpha(settings: Option<&Map<String, Value>>) -> f64 {
    settings
        .and_then(|s| s.number_value(BACKGROUND_ALPHA))
        .unwrap_or(0.0)
}

fn create_in_app_html_content(payload: &Value) -> ParseResult {
    let content = decode_html(payload)?;
    Ok(Content::InAppHtml(InAppHtmlContent {
        edge_insets: content.edge_insets,
        background_alpha: content.background_alpha,
        html: content.html,
    }))
}

fn create_inbox_html_content(payload: &Value) -> ParseResult {
    let content = decode_html(payload)?;
    let optional_string = |key: &str| payload.string_value(key).map(str::to_string);
    Ok(Content::InboxHtml(InboxHtmlContent {
        edge_insets: content.edge_insets,
        background_alpha: content.background_alpha,
        html: content.html,
        title: optional_string(INBOX_TITLE),
        subtitle: optional_string(INBOX_SUBTITLE),
        icon: optional_string(INBOX_ICON),
    }))
}
