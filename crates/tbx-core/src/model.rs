//! Core data model for TBX documents.
//!
//! A document is a flat, ordered list of text boxes. Order is z-order:
//! later boxes paint on top of earlier ones, and new boxes are always
//! appended. There is no reordering operation.
//!
//! The style record mirrors the CSS-like properties a browser front end
//! applies to each box, and serializes with the same camelCase names.

use crate::id::BoxId;
use serde::{Deserialize, Serialize};

// ─── Geometry ────────────────────────────────────────────────────────────

/// Canvas-relative position of a box's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Box dimensions. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Where new boxes land on the canvas.
pub const DEFAULT_POSITION: Position = Position::new(0.0, 50.0);

/// Size of every new box.
pub const DEFAULT_SIZE: Size = Size::new(150.0, 50.0);

// ─── Style ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
}

/// Horizontal text alignment. Cycles `Left → Center → Right → Justify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    /// The next alignment in the cycle, wrapping `Justify → Left`.
    pub fn next(self) -> Self {
        match self {
            TextAlign::Left => TextAlign::Center,
            TextAlign::Center => TextAlign::Right,
            TextAlign::Right => TextAlign::Justify,
            TextAlign::Justify => TextAlign::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

/// The fixed set of font families a box may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Arial,
    Verdana,
    #[serde(rename = "Courier New")]
    CourierNew,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    Georgia,
}

impl FontFamily {
    /// All families, in picker order.
    pub const ALL: [FontFamily; 5] = [
        FontFamily::Arial,
        FontFamily::Verdana,
        FontFamily::CourierNew,
        FontFamily::TimesNewRoman,
        FontFamily::Georgia,
    ];

    /// CSS family name.
    pub fn name(self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::Verdana => "Verdana",
            FontFamily::CourierNew => "Courier New",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::Georgia => "Georgia",
        }
    }

    /// Look up a family by its CSS name. Exact match only.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Smallest font size a box or the editing defaults may hold.
pub const MIN_FONT_SIZE: u32 = 1;

/// Font size of the initial editing defaults.
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Background of a fresh box.
pub const TRANSPARENT: &str = "transparent";

/// The visual attributes attached to a text box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub text_decoration: TextDecoration,
    pub text_align: TextAlign,
    pub font_size: u32,
    pub font_family: FontFamily,
    /// Opaque CSS color string.
    pub background_color: String,
}

impl Style {
    /// A plain style (no bold/italic/underline, left-aligned, transparent)
    /// carrying the given font.
    pub fn with_font(font_size: u32, font_family: FontFamily) -> Self {
        Self {
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Normal,
            text_decoration: TextDecoration::None,
            text_align: TextAlign::Left,
            font_size: font_size.max(MIN_FONT_SIZE),
            font_family,
            background_color: TRANSPARENT.to_string(),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::with_font(DEFAULT_FONT_SIZE, FontFamily::default())
    }
}

// ─── Text box ────────────────────────────────────────────────────────────

/// One positioned, styled, editable text element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    pub id: BoxId,
    pub position: Position,
    pub size: Size,
    pub text: String,
    pub style: Style,
}

impl TextBox {
    /// A new, empty box at the default position.
    pub fn new(id: BoxId, style: Style) -> Self {
        Self {
            id,
            position: DEFAULT_POSITION,
            size: DEFAULT_SIZE,
            text: String::new(),
            style,
        }
    }
}

// ─── Document ────────────────────────────────────────────────────────────

/// The ordered collection of text boxes at one point in time.
///
/// Cloning a document yields a fully independent snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    boxes: Vec<TextBox>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// All boxes in z-order.
    pub fn boxes(&self) -> &[TextBox] {
        &self.boxes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextBox> {
        self.boxes.iter()
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn get(&self, id: BoxId) -> Option<&TextBox> {
        self.boxes.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BoxId) -> Option<&mut TextBox> {
        self.boxes.iter_mut().find(|b| b.id == id)
    }

    pub fn contains(&self, id: BoxId) -> bool {
        self.get(id).is_some()
    }

    /// Append a box on top of all others.
    pub fn push(&mut self, text_box: TextBox) {
        self.boxes.push(text_box);
    }

    /// Remove a box by id, returning it if it was present.
    pub fn remove(&mut self, id: BoxId) -> Option<TextBox> {
        let pos = self.boxes.iter().position(|b| b.id == id)?;
        Some(self.boxes.remove(pos))
    }

    /// Serialize to the JSON shape the front end renders from.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }

    /// Parse a document previously produced by [`Document::to_json`].
    ///
    /// Rejects documents that repeat an id or carry a font size below
    /// [`MIN_FONT_SIZE`].
    pub fn from_json(json: &str) -> Result<Self, String> {
        let doc: Document = serde_json::from_str(json).map_err(|e| e.to_string())?;
        for (i, b) in doc.boxes.iter().enumerate() {
            if doc.boxes[..i].iter().any(|other| other.id == b.id) {
                return Err(format!("duplicate box id `{}`", b.id));
            }
            if b.style.font_size < MIN_FONT_SIZE {
                return Err(format!("box `{}` has font size {}", b.id, b.style.font_size));
            }
        }
        Ok(doc)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a TextBox;
    type IntoIter = std::slice::Iter<'a, TextBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.iter()
    }
}
