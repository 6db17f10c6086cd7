//! Style engine: pure transformations from an old style record to a new one.
//!
//! Nothing here touches a document. The store and the editor call these
//! functions and decide where the result goes.

use crate::model::*;
use serde::{Deserialize, Serialize};

/// A toolbar toggle applied to the selected box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleOp {
    Bold,
    Italic,
    Underline,
    /// Advance alignment one step in the cycle.
    Align,
}

impl StyleOp {
    pub const ALL: [StyleOp; 4] = [
        StyleOp::Bold,
        StyleOp::Italic,
        StyleOp::Underline,
        StyleOp::Align,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StyleOp::Bold => "bold",
            StyleOp::Italic => "italic",
            StyleOp::Underline => "underline",
            StyleOp::Align => "align",
        }
    }

    /// Parse a toolbar op name. Unrecognized names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

/// Apply one toggle, returning the new style.
pub fn toggle(style: &Style, op: StyleOp) -> Style {
    let mut next = style.clone();
    match op {
        StyleOp::Bold => {
            next.font_weight = match style.font_weight {
                FontWeight::Bold => FontWeight::Normal,
                FontWeight::Normal => FontWeight::Bold,
            };
        }
        StyleOp::Italic => {
            next.font_style = match style.font_style {
                FontStyle::Italic => FontStyle::Normal,
                FontStyle::Normal => FontStyle::Italic,
            };
        }
        StyleOp::Underline => {
            next.text_decoration = match style.text_decoration {
                TextDecoration::Underline => TextDecoration::None,
                TextDecoration::None => TextDecoration::Underline,
            };
        }
        StyleOp::Align => next.text_align = style.text_align.next(),
    }
    next
}

/// Apply a toggle given by name. Unknown names leave the style unchanged.
pub fn toggle_named(style: &Style, op: &str) -> Style {
    match StyleOp::from_name(op) {
        Some(op) => toggle(style, op),
        None => style.clone(),
    }
}

pub fn with_font_family(style: &Style, family: FontFamily) -> Style {
    Style {
        font_family: family,
        ..style.clone()
    }
}

pub fn with_font_size(style: &Style, size: u32) -> Style {
    Style {
        font_size: size.max(MIN_FONT_SIZE),
        ..style.clone()
    }
}

/// `max(1, current + delta)`. Saturates instead of overflowing upward.
pub fn clamp_font_size(current: u32, delta: i32) -> u32 {
    let next = i64::from(current) + i64::from(delta);
    next.clamp(i64::from(MIN_FONT_SIZE), i64::from(u32::MAX)) as u32
}

/// Editor-wide font settings used for every new box.
///
/// Not part of the document, so undo/redo never changes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditDefaults {
    pub font_size: u32,
    pub font_family: FontFamily,
}

impl Default for EditDefaults {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            font_family: FontFamily::default(),
        }
    }
}

impl EditDefaults {
    pub fn new(font_size: u32, font_family: FontFamily) -> Self {
        Self {
            font_size: font_size.max(MIN_FONT_SIZE),
            font_family,
        }
    }

    /// Style snapshot for a freshly created box.
    pub fn style(&self) -> Style {
        Style::with_font(self.font_size, self.font_family)
    }

    /// Shift the default size by `delta`, clamping at the floor.
    /// Returns the new size.
    pub fn adjust_font_size(&mut self, delta: i32) -> u32 {
        self.font_size = clamp_font_size(self.font_size, delta);
        self.font_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bold_flips_both_ways() {
        let s = Style::default();
        let bold = toggle(&s, StyleOp::Bold);
        assert_eq!(bold.font_weight, FontWeight::Bold);
        assert_eq!(toggle(&bold, StyleOp::Bold), s);
    }

    #[test]
    fn italic_and_underline_touch_only_their_field() {
        let s = Style::default();
        let italic = toggle(&s, StyleOp::Italic);
        assert_eq!(
            italic,
            Style {
                font_style: FontStyle::Italic,
                ..s.clone()
            }
        );
        let underlined = toggle(&s, StyleOp::Underline);
        assert_eq!(
            underlined,
            Style {
                text_decoration: TextDecoration::Underline,
                ..s
            }
        );
    }

    #[test]
    fn four_aligns_return_to_start() {
        let start = Style::default();
        let mut s = start.clone();
        let mut seen = vec![s.text_align];
        for _ in 0..4 {
            s = toggle(&s, StyleOp::Align);
            seen.push(s.text_align);
        }
        assert_eq!(
            seen,
            vec![
                TextAlign::Left,
                TextAlign::Center,
                TextAlign::Right,
                TextAlign::Justify,
                TextAlign::Left,
            ]
        );
        assert_eq!(s, start);
    }

    #[test]
    fn unknown_named_op_is_identity() {
        let s = toggle(&Style::default(), StyleOp::Bold);
        assert_eq!(toggle_named(&s, "strikethrough"), s);
        assert_eq!(toggle_named(&s, "bold").font_weight, FontWeight::Normal);
    }

    #[test]
    fn clamp_floors_at_one() {
        assert_eq!(clamp_font_size(1, -1), 1);
        assert_eq!(clamp_font_size(3, -10), 1);
        assert_eq!(clamp_font_size(16, 1), 17);
        assert_eq!(clamp_font_size(u32::MAX, 1), u32::MAX);
    }

    #[test]
    fn defaults_adjust_and_style() {
        let mut d = EditDefaults::default();
        assert_eq!(d.adjust_font_size(2), 18);
        d.font_family = FontFamily::Georgia;
        let s = d.style();
        assert_eq!(s.font_size, 18);
        assert_eq!(s.font_family, FontFamily::Georgia);
        assert_eq!(s.font_weight, FontWeight::Normal);
    }

    #[test]
    fn font_setters_keep_other_fields() {
        let s = toggle(&Style::default(), StyleOp::Underline);
        let f = with_font_family(&s, FontFamily::Verdana);
        assert_eq!(f.font_family, FontFamily::Verdana);
        assert_eq!(f.text_decoration, TextDecoration::Underline);
        assert_eq!(with_font_size(&s, 0).font_size, 1);
    }
}
