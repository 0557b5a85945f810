use std::collections::HashMap;

use fltk::enums::{Color, Font};
use fltk::text::StyleTableEntry;

/// Style character assigned to unformatted text.
pub const PLAIN_STYLE: char = 'A';

/// Upper bound on distinct style combinations in one session. FLTK style
/// characters are a finite alphabet; past the cap the last entry is reused.
const MAX_ENTRIES: usize = 56;

/// A formatting action from the Format menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Bold,
    Italic,
    Color(u8, u8, u8),
}

/// The full style of one character: bold/italic flags plus an optional
/// explicit text color. The default key is plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleKey {
    pub bold: bool,
    pub italic: bool,
    pub color: Option<(u8, u8, u8)>,
}

/// Maps style combinations to FLTK style characters ('A', 'B', 'C', ...),
/// building the `StyleTableEntry` table lazily as new combinations appear.
/// A combination keeps its character for the lifetime of the registry, so
/// style buffers written earlier stay valid.
pub struct StyleRegistry {
    keys: Vec<StyleKey>,
    by_key: HashMap<StyleKey, char>,
    font_size: i32,
}

impl StyleRegistry {
    pub fn new(font_size: i32) -> Self {
        let mut registry = Self {
            keys: Vec::new(),
            by_key: HashMap::new(),
            font_size,
        };
        // 'A' is always the plain entry
        registry.keys.push(StyleKey::default());
        registry.by_key.insert(StyleKey::default(), PLAIN_STYLE);
        registry
    }

    /// Get the style character for a combination, inserting a new table
    /// entry the first time it appears.
    pub fn style_char(&mut self, key: StyleKey) -> char {
        if let Some(&ch) = self.by_key.get(&key) {
            return ch;
        }
        let idx = self.keys.len();
        if idx >= MAX_ENTRIES {
            return (b'A' + (MAX_ENTRIES - 1) as u8) as char;
        }
        let ch = (b'A' + idx as u8) as char;
        self.keys.push(key);
        self.by_key.insert(key, ch);
        ch
    }

    /// Decode a style character back into the combination it stands for.
    /// Unknown characters decode to plain.
    pub fn key_of(&self, ch: char) -> StyleKey {
        let idx = (ch as usize).wrapping_sub(PLAIN_STYLE as usize);
        self.keys.get(idx).copied().unwrap_or_default()
    }

    /// Build the style table for `TextEditor::set_highlight_data`. The
    /// default foreground follows the active theme; explicit colors win.
    pub fn entries(&self, dark_mode: bool) -> Vec<StyleTableEntry> {
        let theme_fg = if dark_mode {
            Color::from_rgb(220, 220, 220)
        } else {
            Color::Black
        };
        self.keys
            .iter()
            .map(|key| {
                let font = match (key.bold, key.italic) {
                    (false, false) => Font::Helvetica,
                    (true, false) => Font::HelveticaBold,
                    (false, true) => Font::HelveticaItalic,
                    (true, true) => Font::HelveticaBoldItalic,
                };
                let color = key
                    .color
                    .map(|(r, g, b)| Color::from_rgb(r, g, b))
                    .unwrap_or(theme_fg);
                StyleTableEntry {
                    color,
                    font,
                    size: self.font_size,
                }
            })
            .collect()
    }
}

/// Apply a formatting action to a run of style characters, returning the
/// rewritten run.
///
/// Bold and italic toggle: if every character in the run already carries
/// the attribute it is removed everywhere, otherwise it is added
/// everywhere. Two applications over the same run therefore cancel out.
/// Colors only overwrite - a previously applied color is replaced by the
/// next one, never removed.
pub fn apply_format(run: &str, kind: FormatKind, registry: &mut StyleRegistry) -> String {
    match kind {
        FormatKind::Bold => {
            let on = !(!run.is_empty() && run.chars().all(|ch| registry.key_of(ch).bold));
            run.chars()
                .map(|ch| {
                    let mut key = registry.key_of(ch);
                    key.bold = on;
                    registry.style_char(key)
                })
                .collect()
        }
        FormatKind::Italic => {
            let on = !(!run.is_empty() && run.chars().all(|ch| registry.key_of(ch).italic));
            run.chars()
                .map(|ch| {
                    let mut key = registry.key_of(ch);
                    key.italic = on;
                    registry.style_char(key)
                })
                .collect()
        }
        FormatKind::Color(r, g, b) => run
            .chars()
            .map(|ch| {
                let mut key = registry.key_of(ch);
                key.color = Some((r, g, b));
                registry.style_char(key)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_run(len: usize) -> String {
        std::iter::repeat(PLAIN_STYLE).take(len).collect()
    }

    #[test]
    fn test_double_bold_toggle_is_identity() {
        let mut reg = StyleRegistry::new(14);
        let original = plain_run(5);
        let once = apply_format(&original, FormatKind::Bold, &mut reg);
        assert_ne!(once, original);
        let twice = apply_format(&once, FormatKind::Bold, &mut reg);
        assert_eq!(twice, original);
    }

    #[test]
    fn test_mixed_run_becomes_uniformly_bold() {
        let mut reg = StyleRegistry::new(14);
        let bold = reg.style_char(StyleKey {
            bold: true,
            ..StyleKey::default()
        });
        // Half the run is bold already; toggling must bold the rest, not unbold
        let mixed = format!("{}{}{}", PLAIN_STYLE, bold, PLAIN_STYLE);
        let toggled = apply_format(&mixed, FormatKind::Bold, &mut reg);
        assert!(toggled.chars().all(|ch| reg.key_of(ch).bold));
    }

    #[test]
    fn test_bold_and_italic_combine() {
        let mut reg = StyleRegistry::new(14);
        let run = apply_format(&plain_run(3), FormatKind::Bold, &mut reg);
        let run = apply_format(&run, FormatKind::Italic, &mut reg);
        for ch in run.chars() {
            let key = reg.key_of(ch);
            assert!(key.bold && key.italic);
        }
        // Removing italic keeps bold
        let run = apply_format(&run, FormatKind::Italic, &mut reg);
        for ch in run.chars() {
            let key = reg.key_of(ch);
            assert!(key.bold && !key.italic);
        }
    }

    #[test]
    fn test_color_overwrites_previous_color() {
        let mut reg = StyleRegistry::new(14);
        let run = apply_format(&plain_run(4), FormatKind::Color(255, 0, 0), &mut reg);
        let run = apply_format(&run, FormatKind::Color(0, 0, 255), &mut reg);
        for ch in run.chars() {
            assert_eq!(reg.key_of(ch).color, Some((0, 0, 255)));
        }
    }

    #[test]
    fn test_color_survives_bold_toggle() {
        let mut reg = StyleRegistry::new(14);
        let run = apply_format(&plain_run(2), FormatKind::Color(10, 20, 30), &mut reg);
        let run = apply_format(&run, FormatKind::Bold, &mut reg);
        for ch in run.chars() {
            let key = reg.key_of(ch);
            assert!(key.bold);
            assert_eq!(key.color, Some((10, 20, 30)));
        }
    }

    #[test]
    fn test_distinct_colors_get_distinct_characters() {
        let mut reg = StyleRegistry::new(14);
        let red = reg.style_char(StyleKey {
            color: Some((255, 0, 0)),
            ..StyleKey::default()
        });
        let blue = reg.style_char(StyleKey {
            color: Some((0, 0, 255)),
            ..StyleKey::default()
        });
        assert_ne!(red, blue);
        // Asking again returns the same character
        assert_eq!(
            reg.style_char(StyleKey {
                color: Some((255, 0, 0)),
                ..StyleKey::default()
            }),
            red
        );
    }

    #[test]
    fn test_key_round_trip() {
        let mut reg = StyleRegistry::new(14);
        let key = StyleKey {
            bold: true,
            italic: true,
            color: Some((1, 2, 3)),
        };
        let ch = reg.style_char(key);
        assert_eq!(reg.key_of(ch), key);
    }

    #[test]
    fn test_registry_caps_at_alphabet_end() {
        let mut reg = StyleRegistry::new(14);
        let mut last = PLAIN_STYLE;
        for r in 0..=255u8 {
            last = reg.style_char(StyleKey {
                color: Some((r, 0, 0)),
                ..StyleKey::default()
            });
        }
        assert_eq!(last, (b'A' + (super::MAX_ENTRIES - 1) as u8) as char);
        assert_eq!(reg.entries(false).len(), super::MAX_ENTRIES);
    }

    #[test]
    fn test_entries_follow_theme_foreground() {
        let reg = StyleRegistry::new(14);
        let light = reg.entries(false);
        let dark = reg.entries(true);
        assert_eq!(light[0].color, Color::Black);
        assert_eq!(dark[0].color, Color::from_rgb(220, 220, 220));
        assert_eq!(light[0].font, Font::Helvetica);
    }
}
