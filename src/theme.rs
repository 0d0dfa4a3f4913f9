//! Color themes and the process-wide active theme.
//!
//! Themes are a fixed set of immutable `'static` records addressed by
//! [`ThemeName`]. The active theme is stored as a single atomic tag, so a
//! reader always resolves one complete record and never a mix of two.

use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::Color;
use tracing::info;

use crate::fmt::Usage;
use crate::panels::PanelId;

/// Error type for theme lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// No theme is registered under this name.
    Unknown(String),
}

impl std::fmt::Display for ThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::Unknown(name) => write!(
                f,
                "unknown theme '{}' (available: {})",
                name,
                list().collect::<Vec<_>>().join(", ")
            ),
        }
    }
}

impl std::error::Error for ThemeError {}

/// Registered theme names, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ThemeName {
    #[default]
    Default = 0,
    Nord = 1,
    Gruvbox = 2,
    Dracula = 3,
}

impl ThemeName {
    /// All themes in registry order.
    pub const ALL: [ThemeName; 4] = [
        ThemeName::Default,
        ThemeName::Nord,
        ThemeName::Gruvbox,
        ThemeName::Dracula,
    ];

    /// Returns the registry name.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Default => "default",
            ThemeName::Nord => "nord",
            ThemeName::Gruvbox => "gruvbox",
            ThemeName::Dracula => "dracula",
        }
    }

    /// Resolves the name to its theme record.
    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeName::Default => &DEFAULT,
            ThemeName::Nord => &NORD,
            ThemeName::Gruvbox => &GRUVBOX,
            ThemeName::Dracula => &DRACULA,
        }
    }

    /// Position of this theme in [`ThemeName::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    fn from_tag(tag: u8) -> Self {
        Self::ALL.get(tag as usize).copied().unwrap_or_default()
    }
}

impl FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ThemeError::Unknown(s.to_string()))
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colors of one panel's chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStyle {
    pub border: Color,
    pub title: Color,
    pub text: Color,
    pub background: Color,
}

/// Glyph pair used to draw usage bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarGlyphs {
    pub filled: char,
    pub empty: char,
}

/// Styling of the theme selection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerStyle {
    pub text: Color,
    pub background: Color,
    pub selected_text: Color,
    pub selected_background: Color,
}

/// A complete visual theme.
#[derive(Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: ThemeName,
    pub info: PanelStyle,
    pub cpu: PanelStyle,
    pub memory: PanelStyle,
    pub disk: PanelStyle,
    pub temperature: PanelStyle,
    /// Usage below 50%.
    pub low: Color,
    /// Usage from 50% up to 80%.
    pub medium: Color,
    /// Usage at 80% and above.
    pub high: Color,
    pub background: Color,
    pub bar: BarGlyphs,
    pub picker: PickerStyle,
}

impl Theme {
    /// Chrome of the given panel.
    pub fn panel(&self, id: PanelId) -> &PanelStyle {
        match id {
            PanelId::Info => &self.info,
            PanelId::Cpu => &self.cpu,
            PanelId::Memory => &self.memory,
            PanelId::Disk => &self.disk,
            PanelId::Temperature => &self.temperature,
        }
    }

    /// Threshold color for a usage bracket.
    pub fn usage_color(&self, usage: Usage) -> Color {
        match usage {
            Usage::Low => self.low,
            Usage::Medium => self.medium,
            Usage::High => self.high,
        }
    }
}

/// Theme names in registry order.
pub fn list() -> impl Iterator<Item = &'static str> {
    ThemeName::ALL.into_iter().map(ThemeName::as_str)
}

/// Looks up a theme by name (case-insensitive).
pub fn get(name: &str) -> Result<&'static Theme, ThemeError> {
    name.parse::<ThemeName>().map(ThemeName::theme)
}

/// The theme currently used for rendering.
///
/// Shared between the UI thread (which switches it) and the sampler thread
/// (which reads it once per tick).
#[derive(Debug)]
pub struct ActiveTheme {
    current: AtomicU8,
}

impl ActiveTheme {
    /// Creates the active theme cell.
    pub fn new(name: ThemeName) -> Self {
        Self {
            current: AtomicU8::new(name as u8),
        }
    }

    /// Creates the active theme cell from a registry name.
    pub fn from_name(name: &str) -> Result<Self, ThemeError> {
        name.parse().map(Self::new)
    }

    /// Name of the active theme.
    pub fn name(&self) -> ThemeName {
        ThemeName::from_tag(self.current.load(Ordering::Acquire))
    }

    /// The active theme record.
    pub fn current(&self) -> &'static Theme {
        self.name().theme()
    }

    /// Makes `name` the active theme.
    ///
    /// On error the active theme is left unchanged.
    pub fn activate(&self, name: &str) -> Result<&'static Theme, ThemeError> {
        let theme = get(name)?;
        let previous = self.current.swap(theme.name as u8, Ordering::AcqRel);
        if previous != theme.name as u8 {
            info!(
                "Theme switched: {} -> {}",
                ThemeName::from_tag(previous),
                theme.name
            );
        }
        Ok(theme)
    }
}

impl Default for ActiveTheme {
    fn default() -> Self {
        Self::new(ThemeName::Default)
    }
}

const fn panel(border: Color, title: Color, text: Color, background: Color) -> PanelStyle {
    PanelStyle {
        border,
        title,
        text,
        background,
    }
}

const ORANGE: Color = Color::Rgb(0xff, 0xa5, 0x00);
const STEEL_BLUE: Color = Color::Rgb(0x46, 0x82, 0xb4);
const PURPLE: Color = Color::Rgb(0x80, 0x00, 0x80);

static DEFAULT: Theme = Theme {
    name: ThemeName::Default,
    info: panel(ORANGE, ORANGE, Color::White, Color::Black),
    cpu: panel(Color::Green, Color::Green, Color::White, Color::Black),
    memory: panel(Color::Blue, Color::Blue, Color::White, Color::Black),
    disk: panel(PURPLE, PURPLE, Color::White, Color::Black),
    temperature: panel(STEEL_BLUE, STEEL_BLUE, Color::White, Color::Black),
    low: Color::Green,
    medium: Color::Yellow,
    high: Color::Red,
    background: Color::Black,
    bar: BarGlyphs {
        filled: '█',
        empty: '-',
    },
    picker: PickerStyle {
        text: Color::White,
        background: Color::Black,
        selected_text: Color::Black,
        selected_background: Color::White,
    },
};

const NORD_BG: Color = Color::Rgb(0x2e, 0x34, 0x40);
const NORD_BORDER: Color = Color::Rgb(0x3b, 0x42, 0x52);
const NORD_SNOW: Color = Color::Rgb(0xec, 0xef, 0xf4);

static NORD: Theme = Theme {
    name: ThemeName::Nord,
    info: panel(
        NORD_BORDER,
        Color::Rgb(0xb4, 0x8e, 0xad),
        Color::Rgb(0xd8, 0xde, 0xe9),
        NORD_BG,
    ),
    cpu: panel(
        NORD_BORDER,
        Color::Rgb(0x88, 0xc0, 0xd0),
        NORD_SNOW,
        NORD_BG,
    ),
    memory: panel(
        NORD_BORDER,
        Color::Rgb(0x81, 0xa1, 0xc1),
        NORD_SNOW,
        NORD_BG,
    ),
    disk: panel(
        NORD_BORDER,
        Color::Rgb(0x8f, 0xbc, 0xbb),
        NORD_SNOW,
        NORD_BG,
    ),
    temperature: panel(
        NORD_BORDER,
        Color::Rgb(0x5e, 0x81, 0xac),
        NORD_SNOW,
        NORD_BG,
    ),
    low: Color::Rgb(0xa3, 0xbe, 0x8c),
    medium: Color::Rgb(0xeb, 0xcb, 0x8b),
    high: Color::Rgb(0xbf, 0x61, 0x6a),
    background: NORD_BG,
    bar: BarGlyphs {
        filled: '■',
        empty: '·',
    },
    picker: PickerStyle {
        text: NORD_SNOW,
        background: NORD_BG,
        selected_text: NORD_BG,
        selected_background: Color::Rgb(0x88, 0xc0, 0xd0),
    },
};

const GRUVBOX_BG: Color = Color::Rgb(0x28, 0x28, 0x28);
const GRUVBOX_BORDER: Color = Color::Rgb(0x50, 0x49, 0x45);
const GRUVBOX_FG: Color = Color::Rgb(0xeb, 0xdb, 0xb2);

static GRUVBOX: Theme = Theme {
    name: ThemeName::Gruvbox,
    info: panel(
        GRUVBOX_BORDER,
        Color::Rgb(0xfe, 0x80, 0x19),
        GRUVBOX_FG,
        GRUVBOX_BG,
    ),
    cpu: panel(
        GRUVBOX_BORDER,
        Color::Rgb(0xb8, 0xbb, 0x26),
        GRUVBOX_FG,
        GRUVBOX_BG,
    ),
    memory: panel(
        GRUVBOX_BORDER,
        Color::Rgb(0x83, 0xa5, 0x98),
        GRUVBOX_FG,
        GRUVBOX_BG,
    ),
    disk: panel(
        GRUVBOX_BORDER,
        Color::Rgb(0xd3, 0x86, 0x9b),
        GRUVBOX_FG,
        GRUVBOX_BG,
    ),
    temperature: panel(
        GRUVBOX_BORDER,
        Color::Rgb(0x8e, 0xc0, 0x7c),
        GRUVBOX_FG,
        GRUVBOX_BG,
    ),
    low: Color::Rgb(0xb8, 0xbb, 0x26),
    medium: Color::Rgb(0xfa, 0xbd, 0x2f),
    high: Color::Rgb(0xfb, 0x49, 0x34),
    background: GRUVBOX_BG,
    bar: BarGlyphs {
        filled: '█',
        empty: '░',
    },
    picker: PickerStyle {
        text: GRUVBOX_FG,
        background: GRUVBOX_BG,
        selected_text: GRUVBOX_BG,
        selected_background: Color::Rgb(0xfa, 0xbd, 0x2f),
    },
};

const DRACULA_BG: Color = Color::Rgb(0x28, 0x2a, 0x36);
const DRACULA_BORDER: Color = Color::Rgb(0x44, 0x47, 0x5a);
const DRACULA_FG: Color = Color::Rgb(0xf8, 0xf8, 0xf2);

static DRACULA: Theme = Theme {
    name: ThemeName::Dracula,
    info: panel(
        DRACULA_BORDER,
        Color::Rgb(0xff, 0x79, 0xc6),
        DRACULA_FG,
        DRACULA_BG,
    ),
    cpu: panel(
        DRACULA_BORDER,
        Color::Rgb(0x8b, 0xe9, 0xfd),
        DRACULA_FG,
        DRACULA_BG,
    ),
    memory: panel(
        DRACULA_BORDER,
        Color::Rgb(0xbd, 0x93, 0xf9),
        DRACULA_FG,
        DRACULA_BG,
    ),
    disk: panel(
        DRACULA_BORDER,
        Color::Rgb(0xff, 0xb8, 0x6c),
        DRACULA_FG,
        DRACULA_BG,
    ),
    temperature: panel(
        DRACULA_BORDER,
        Color::Rgb(0x50, 0xfa, 0x7b),
        DRACULA_FG,
        DRACULA_BG,
    ),
    low: Color::Rgb(0x50, 0xfa, 0x7b),
    medium: Color::Rgb(0xf1, 0xfa, 0x8c),
    high: Color::Rgb(0xff, 0x55, 0x55),
    background: DRACULA_BG,
    bar: BarGlyphs {
        filled: '▰',
        empty: '▱',
    },
    picker: PickerStyle {
        text: DRACULA_FG,
        background: DRACULA_BG,
        selected_text: DRACULA_BG,
        selected_background: Color::Rgb(0xbd, 0x93, 0xf9),
    },
};
