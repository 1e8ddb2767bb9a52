//! Payload keys and literal markers shared by the dispatcher and decoders.

pub const CONTENT_TYPE: &str = "contentType";
pub const HTML: &str = "html";
pub const DISPLAY_SETTINGS: &str = "inAppDisplaySettings";
pub const BACKGROUND_ALPHA: &str = "backGroundAlpha";

pub const PADDING_TOP: &str = "top";
pub const PADDING_LEFT: &str = "left";
pub const PADDING_BOTTOM: &str = "bottom";
pub const PADDING_RIGHT: &str = "right";

pub const DISPLAY_OPTION: &str = "displayOption";
pub const AUTO_EXPAND: &str = "AutoExpand";
pub const PERCENTAGE: &str = "percentage";

pub const INBOX_TITLE: &str = "inboxTitle";
pub const INBOX_SUBTITLE: &str = "inboxSubtitle";
pub const INBOX_ICON: &str = "inboxIcon";

/// Substring every in-app HTML body must contain (case-insensitive).
pub const HREF_MARKER: &str = "href";

/// Padding value meaning "let the renderer size this side".
pub const AUTO_EXPAND_PADDING: i32 = -1;
