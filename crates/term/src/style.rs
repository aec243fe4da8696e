//! Board styles - the swappable look of the board.
//!
//! A style bundles every color and glyph choice the board view makes, so
//! switching the look at runtime is a single trait-object swap. Two styles
//! ship: a warm wooden board and a blue-green one.

use crate::canvas::{Rgb, TextStyle};

/// Presentation choices for drawing the board
pub trait BoardStyle {
    fn name(&self) -> &'static str;

    /// The area outside and between slots
    fn background(&self) -> TextStyle;

    /// The border around the board
    fn frame(&self) -> TextStyle;

    /// Pit brackets
    fn pit(&self) -> TextStyle;

    /// Store brackets
    fn store(&self) -> TextStyle;

    /// Stone-count digits
    fn stones(&self) -> TextStyle;

    /// Pit and store labels
    fn label(&self) -> TextStyle;

    /// Active-player marker and last-landing highlight
    fn accent(&self) -> TextStyle;

    /// Opening and closing glyphs around a pit count
    fn pit_brackets(&self) -> (char, char);

    /// Opening and closing glyphs around a store count
    fn store_brackets(&self) -> (char, char);
}

/// Warm wooden board with amber highlights
pub struct ClassicStyle;

impl ClassicStyle {
    const WOOD: Rgb = Rgb(45, 30, 15);
}

impl BoardStyle for ClassicStyle {
    fn name(&self) -> &'static str {
        "classic"
    }

    fn background(&self) -> TextStyle {
        TextStyle::new(Rgb(120, 90, 50), Self::WOOD)
    }

    fn frame(&self) -> TextStyle {
        TextStyle::new(Rgb(190, 150, 90), Self::WOOD)
    }

    fn pit(&self) -> TextStyle {
        TextStyle::new(Rgb(170, 130, 70), Self::WOOD)
    }

    fn store(&self) -> TextStyle {
        TextStyle::new(Rgb(220, 180, 100), Self::WOOD).bold()
    }

    fn stones(&self) -> TextStyle {
        TextStyle::new(Rgb(240, 230, 210), Self::WOOD)
    }

    fn label(&self) -> TextStyle {
        TextStyle::new(Rgb(150, 120, 80), Self::WOOD).dim()
    }

    fn accent(&self) -> TextStyle {
        TextStyle::new(Rgb(255, 200, 80), Self::WOOD).bold()
    }

    fn pit_brackets(&self) -> (char, char) {
        ('(', ')')
    }

    fn store_brackets(&self) -> (char, char) {
        ('[', ']')
    }
}

/// Cool blue-green board with cyan highlights
pub struct OceanStyle;

impl OceanStyle {
    const DEEP: Rgb = Rgb(10, 35, 55);
}

impl BoardStyle for OceanStyle {
    fn name(&self) -> &'static str {
        "ocean"
    }

    fn background(&self) -> TextStyle {
        TextStyle::new(Rgb(60, 110, 140), Self::DEEP)
    }

    fn frame(&self) -> TextStyle {
        TextStyle::new(Rgb(110, 180, 200), Self::DEEP)
    }

    fn pit(&self) -> TextStyle {
        TextStyle::new(Rgb(90, 170, 160), Self::DEEP)
    }

    fn store(&self) -> TextStyle {
        TextStyle::new(Rgb(120, 210, 220), Self::DEEP).bold()
    }

    fn stones(&self) -> TextStyle {
        TextStyle::new(Rgb(225, 240, 245), Self::DEEP)
    }

    fn label(&self) -> TextStyle {
        TextStyle::new(Rgb(100, 150, 170), Self::DEEP).dim()
    }

    fn accent(&self) -> TextStyle {
        TextStyle::new(Rgb(120, 255, 230), Self::DEEP).bold()
    }

    fn pit_brackets(&self) -> (char, char) {
        ('<', '>')
    }

    fn store_brackets(&self) -> (char, char) {
        ('{', '}')
    }
}

/// The styles offered by the style-cycling key, in cycle order
pub fn default_styles() -> Vec<Box<dyn BoardStyle>> {
    vec![Box::new(ClassicStyle), Box::new(OceanStyle)]
}
