//! Grid theme system
//!
//! YAML-based theming with compile-time embedded light/dark builtins and
//! optional user overrides from the config directory. A raw [`ThemeData`]
//! (strings from YAML) resolves into a [`StyleTable`] of parsed colors that
//! answers every per-cell style question during a paint pass.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/tabgrid/themes/{mode}.yaml`
//! 2. Embedded: built-in light/dark themes compiled into the binary

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const LIGHT_YAML: &str = include_str!("../themes/light.yaml");
pub const DARK_YAML: &str = include_str!("../themes/dark.yaml");

/// Abstract color mode requested by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Parse a host-supplied mode string; anything unrecognized is light
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    /// Stable identifier ("light" / "dark")
    pub fn id(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Embedded YAML for this mode
    pub fn builtin_yaml(self) -> &'static str {
        match self {
            ThemeMode::Light => LIGHT_YAML,
            ThemeMode::Dark => DARK_YAML,
        }
    }
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to ARGB u32 for raster hosts
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        match s.len() {
            6 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: 255,
            }),
            8 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: u8::from_str_radix(&s[6..8], 16).map_err(|e| e.to_string())?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    pub grid: GridThemeData,
}

/// Grid color sections (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct GridThemeData {
    pub default: DefaultThemeData,
    pub header: HeaderThemeData,
    pub body: BodyThemeData,
    pub frame: FrameThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DefaultThemeData {
    pub foreground: String,
    pub background: String,
    pub border: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeaderThemeData {
    pub foreground: String,
    pub background: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BodyThemeData {
    pub background_even: String,
    pub background_odd: String,
    pub hover: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrameThemeData {
    pub border: String,
}

/// Which region of the grid a cell belongs to (drives border rules)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    Header,
    Body,
}

/// Border widths in pixels: `[top, right, bottom, left]`
pub type BorderWidths = [u8; 4];

/// Resolved visual style table for one grid instance
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    pub name: String,
    pub mode: ThemeMode,
    pub font_family: String,
    pub font_size: u8,
    pub foreground: Color,
    pub background: Color,
    pub border: Color,
    pub header_foreground: Color,
    pub header_background: Color,
    pub body_background_even: Color,
    pub body_background_odd: Color,
    pub hover_background: Color,
    pub frame_border: Color,
}

impl StyleTable {
    /// Resolve a color mode plus font preference into a concrete style table
    ///
    /// A user theme file `{mode}.yaml` in the config themes directory takes
    /// priority over the embedded builtin; a file that fails to parse is
    /// logged and ignored. This never fails: if even the builtin YAML is
    /// unusable the hardcoded fallback palette is returned.
    pub fn resolve(mode: ThemeMode, font_family: &str) -> StyleTable {
        if let Some(table) = load_user_theme(mode, font_family) {
            return table;
        }
        match from_yaml(mode.builtin_yaml())
            .and_then(|data| StyleTable::from_data(&data, mode, font_family))
        {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(mode = mode.id(), "builtin theme failed to resolve: {}", e);
                StyleTable::fallback(mode, font_family)
            }
        }
    }

    /// Resolve raw theme data, parsing every color
    pub fn from_data(data: &ThemeData, mode: ThemeMode, font_family: &str) -> Result<Self, String> {
        let grid = &data.grid;
        Ok(StyleTable {
            name: data.name.clone(),
            mode,
            font_family: font_family.to_string(),
            font_size: 12,
            foreground: Color::from_hex(&grid.default.foreground)?,
            background: Color::from_hex(&grid.default.background)?,
            border: Color::from_hex(&grid.default.border)?,
            header_foreground: Color::from_hex(&grid.header.foreground)?,
            header_background: Color::from_hex(&grid.header.background)?,
            body_background_even: Color::from_hex(&grid.body.background_even)?,
            body_background_odd: Color::from_hex(&grid.body.background_odd)?,
            hover_background: Color::from_hex(&grid.body.hover)?,
            frame_border: Color::from_hex(&grid.frame.border)?,
        })
    }

    /// Hardcoded light/dark palette used when no YAML theme is usable
    pub fn fallback(mode: ThemeMode, font_family: &str) -> Self {
        let (fg, bg) = match mode {
            ThemeMode::Light => (Color::rgb(0x1F, 0x23, 0x28), Color::rgb(0xFF, 0xFF, 0xFF)),
            ThemeMode::Dark => (Color::rgb(0xD3, 0xD5, 0xDA), Color::rgb(0x37, 0x3B, 0x45)),
        };
        StyleTable {
            name: format!("{} (fallback)", mode.id()),
            mode,
            font_family: font_family.to_string(),
            font_size: 12,
            foreground: fg,
            background: bg,
            border: bg,
            header_foreground: fg,
            header_background: bg,
            body_background_even: bg,
            body_background_odd: bg,
            hover_background: bg,
            frame_border: bg,
        }
    }

    /// Background for a body row
    ///
    /// Alternation is anchored at the first non-frozen row, so the first
    /// scrollable row always gets the even shade regardless of how many
    /// header rows are frozen above it.
    pub fn row_bg(&self, row: usize, frozen_row_count: usize) -> Color {
        let index = row.saturating_sub(frozen_row_count);
        if index & 1 == 0 {
            self.body_background_even
        } else {
            self.body_background_odd
        }
    }

    /// Border widths for a cell: `[top, right, bottom, left]`
    ///
    /// Header cells drop the border on the edge facing away from the data
    /// region. In transpose mode the header runs down the left side, so the
    /// suppressed edges swap from top/bottom to left/right.
    pub fn border_widths(&self, role: CellRole, row: usize, transpose: bool) -> BorderWidths {
        match role {
            CellRole::Body => {
                if row == 0 {
                    [0, 1, 1, 1]
                } else {
                    [1, 1, 1, 1]
                }
            }
            CellRole::Header => {
                if transpose && row == 0 {
                    [0, 0, 0, 1]
                } else if transpose {
                    [1, 0, 1, 1]
                } else {
                    [0, 1, 1, 1]
                }
            }
        }
    }
}

/// Parse raw theme data from a YAML document
pub fn from_yaml(content: &str) -> Result<ThemeData, String> {
    serde_yaml::from_str(content).map_err(|e| format!("Failed to parse theme YAML: {}", e))
}

fn load_user_theme(mode: ThemeMode, font_family: &str) -> Option<StyleTable> {
    let path = crate::config_paths::themes_dir()?.join(format!("{}.yaml", mode.id()));
    if !path.exists() {
        return None;
    }
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read theme file {}: {}", path.display(), e);
            return None;
        }
    };
    match from_yaml(&content).and_then(|data| StyleTable::from_data(&data, mode, font_family)) {
        Ok(table) => {
            tracing::info!("Loaded user theme from {}", path.display());
            Some(table)
        }
        Err(e) => {
            tracing::warn!("Ignoring user theme {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_yaml_parses() {
        let light = from_yaml(LIGHT_YAML).unwrap();
        assert_eq!(light.name, "Light");
        let dark = from_yaml(DARK_YAML).unwrap();
        assert_eq!(dark.name, "Dark");
    }

    #[test]
    fn test_row_bg_anchored_at_first_scrollable_row() {
        let data = from_yaml(DARK_YAML).unwrap();
        let table = StyleTable::from_data(&data, ThemeMode::Dark, "Consolas").unwrap();
        // First non-frozen row gets the even shade no matter the header height
        assert_eq!(table.row_bg(1, 1), table.body_background_even);
        assert_eq!(table.row_bg(2, 1), table.body_background_odd);
        assert_eq!(table.row_bg(3, 3), table.body_background_even);
    }

    #[test]
    fn test_border_widths_transpose_inversion() {
        let table = StyleTable::fallback(ThemeMode::Light, "Consolas");
        assert_eq!(table.border_widths(CellRole::Header, 0, false), [0, 1, 1, 1]);
        assert_eq!(table.border_widths(CellRole::Header, 0, true), [0, 0, 0, 1]);
        assert_eq!(table.border_widths(CellRole::Header, 2, true), [1, 0, 1, 1]);
        assert_eq!(table.border_widths(CellRole::Body, 0, false), [0, 1, 1, 1]);
        assert_eq!(table.border_widths(CellRole::Body, 5, false), [1, 1, 1, 1]);
    }
}
