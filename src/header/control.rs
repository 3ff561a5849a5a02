// SPDX-License-Identifier: MPL-2.0
//! Header controls and their construction from configuration.
//!
//! A control is built once, when the header is created. Its content is
//! either a text label or an SVG icon; its size is either the explicit size
//! from the configuration or the measured size of that content.

use crate::config::{ControlConfig, IconSpec, TextStyle, DEFAULT_ICON_SIZE};
use iced::{Color, Point, Rectangle, Size};
use std::fmt;

/// The four controls a header can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlRole {
    Close,
    Delete,
    Share,
    PageIndicator,
}

impl ControlRole {
    pub const ALL: [ControlRole; 4] = [
        ControlRole::Close,
        ControlRole::Delete,
        ControlRole::Share,
        ControlRole::PageIndicator,
    ];

    /// Whether the control reacts to taps. The page indicator is display-only.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        !matches!(self, ControlRole::PageIndicator)
    }
}

impl fmt::Display for ControlRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControlRole::Close => "close",
            ControlRole::Delete => "delete",
            ControlRole::Share => "share",
            ControlRole::PageIndicator => "page-indicator",
        };
        f.write_str(name)
    }
}

/// Text attributes with the color already parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTextStyle {
    pub size: f32,
    pub color: Color,
    pub bold: bool,
}

impl ResolvedTextStyle {
    /// Resolves a configured style. An unparsable color becomes white.
    #[must_use]
    pub fn resolve(style: &TextStyle) -> Self {
        let color = parse_hex_color(&style.color).unwrap_or_else(|| {
            tracing::warn!("Invalid text color {:?}, using white", style.color);
            Color::WHITE
        });
        Self {
            size: style.size,
            color,
            bold: style.bold,
        }
    }
}

impl Default for ResolvedTextStyle {
    fn default() -> Self {
        Self::resolve(&TextStyle::default())
    }
}

/// Parses `#rrggbb` or `#rrggbbaa`.
fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.trim().strip_prefix('#')?;
    if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let alpha = if hex.len() == 8 {
        f32::from(channel(6)?) / 255.0
    } else {
        1.0
    };
    Some(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
}

/// What a control shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlContent {
    Text {
        text: String,
        style: ResolvedTextStyle,
    },
    Icon {
        icon: IconSpec,
        /// Label used by hosts that cannot draw the icon.
        fallback_text: String,
        style: ResolvedTextStyle,
    },
}

impl ControlContent {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            ControlContent::Text { text, .. } => text,
            ControlContent::Icon { fallback_text, .. } => fallback_text,
        }
    }

    #[must_use]
    pub fn style(&self) -> &ResolvedTextStyle {
        match self {
            ControlContent::Text { style, .. } | ControlContent::Icon { style, .. } => style,
        }
    }

    #[must_use]
    pub fn is_icon(&self) -> bool {
        matches!(self, ControlContent::Icon { .. })
    }
}

/// Measures the intrinsic size of control content.
///
/// Hosts with a real text shaper supply their own implementation.
pub trait ContentMeasure: fmt::Debug {
    fn measure_text(&self, text: &str, style: &ResolvedTextStyle) -> Size;

    fn measure_icon(&self, icon: &IconSpec) -> Size {
        Size::new(
            icon.width.unwrap_or(DEFAULT_ICON_SIZE),
            icon.height.unwrap_or(DEFAULT_ICON_SIZE),
        )
    }

    fn measure(&self, content: &ControlContent) -> Size {
        match content {
            ControlContent::Text { text, style } => self.measure_text(text, style),
            ControlContent::Icon { icon, .. } => self.measure_icon(icon),
        }
    }
}

/// Average glyph metrics, expressed as fractions of the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    pub advance: f32,
    pub bold_advance: f32,
    pub line_height: f32,
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self {
            advance: 0.5,
            bold_advance: 0.5625,
            line_height: 1.25,
        }
    }
}

impl ContentMeasure for GlyphMetrics {
    fn measure_text(&self, text: &str, style: &ResolvedTextStyle) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let advance = if style.bold {
            self.bold_advance
        } else {
            self.advance
        };
        let glyphs = text.chars().count() as f32;
        Size::new(
            (glyphs * style.size * advance).ceil(),
            (style.size * self.line_height).ceil(),
        )
    }
}

/// One element of the header.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    role: ControlRole,
    enabled: bool,
    explicit_size: Option<Size>,
    content: ControlContent,
    size: Size,
    frame: Rectangle,
}

impl Control {
    #[must_use]
    pub fn role(&self) -> ControlRole {
        self.role
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn content(&self) -> &ControlContent {
        &self.content
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn explicit_size(&self) -> Option<Size> {
        self.explicit_size
    }

    /// Frame in header coordinates, as of the last layout pass.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn set_frame(&mut self, frame: Rectangle) {
        self.frame = frame;
    }

    /// Replaces the label and resizes to fit, unless the size is explicit.
    pub(crate) fn set_text(&mut self, text: String, measure: &dyn ContentMeasure) {
        match &mut self.content {
            ControlContent::Text { text: current, .. }
            | ControlContent::Icon {
                fallback_text: current,
                ..
            } => *current = text,
        }
        if self.explicit_size.is_none() {
            self.size = measure.measure(&self.content);
            self.frame = Rectangle::new(self.frame.position(), self.size);
        }
    }
}

/// Builds the control for `role` from its configuration section.
///
/// Never fails. Unset fields take the role's defaults even when the section
/// is only partially written, and a missing icon file falls back to the text
/// label.
pub fn create_control(
    role: ControlRole,
    config: &ControlConfig,
    measure: &dyn ContentMeasure,
) -> Control {
    let config = config.or_role_defaults(role);
    let text = config.text.clone().unwrap_or_default();
    let style = ResolvedTextStyle::resolve(&config.text_style.clone().unwrap_or_default());

    let content = match &config.icon {
        Some(icon) if icon.path.is_file() => ControlContent::Icon {
            icon: icon.clone(),
            fallback_text: text,
            style,
        },
        Some(icon) => {
            tracing::warn!(
                "Icon {} for {} control not found, showing text",
                icon.path.display(),
                role
            );
            ControlContent::Text { text, style }
        }
        None => ControlContent::Text { text, style },
    };

    let explicit_size = config
        .size
        .map(|size| Size::new(size.width.max(0.0), size.height.max(0.0)));
    let size = explicit_size.unwrap_or_else(|| measure.measure(&content));
    let enabled = config.enabled.unwrap_or_default();

    tracing::debug!(
        "Created {} control: enabled={}, icon={}, size={}x{}",
        role,
        enabled,
        content.is_icon(),
        size.width,
        size.height
    );

    Control {
        role,
        enabled,
        explicit_size,
        content,
        size,
        frame: Rectangle::new(Point::ORIGIN, size),
    }
}
