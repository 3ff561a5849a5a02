// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens of the header overlay.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Placement offsets
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use lens_header::ui::design_tokens::{opacity, palette};
use iced::Color;

let header_bg = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Viewer surface behind the header in the demo application.
    pub const VIEWER_SURFACE: Color = Color::from_rgb(0.05, 0.05, 0.07);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_PRESSED: f32 = 0.6;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const NONE: f32 = 0.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::OVERLAY_PRESSED > opacity::OVERLAY_MEDIUM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_background_default_matches_medium_overlay() {
        assert_eq!(
            crate::config::DEFAULT_BACKGROUND_ALPHA,
            opacity::OVERLAY_MEDIUM
        );
    }
}
