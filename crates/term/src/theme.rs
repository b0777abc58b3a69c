//! Time-of-day palettes.
//!
//! The board itself stays the classic green-on-black; the frame, labels and
//! overlays pick up an accent color that follows the local clock.

use std::fmt;
use std::str::FromStr;

use chrono::Timelike;
use thiserror::Error;

use crate::fb::{Rgb, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// Bands: 5-11 morning, 12-17 afternoon, 18-22 evening, otherwise night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            18..=22 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn now() -> Self {
        Self::from_hour(chrono::Local::now().hour())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }

    pub fn palette(self) -> Palette {
        let accent = match self {
            TimeOfDay::Morning => Rgb::new(255, 165, 0),
            TimeOfDay::Afternoon => Rgb::new(59, 130, 246),
            TimeOfDay::Evening => Rgb::new(168, 85, 247),
            TimeOfDay::Night => Rgb::new(0, 255, 65),
        };
        Palette::with_accent(accent)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `--theme` value: follow the clock, or pin one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    #[default]
    Auto,
    Fixed(TimeOfDay),
}

impl ThemeChoice {
    pub fn resolve(self) -> TimeOfDay {
        match self {
            ThemeChoice::Auto => TimeOfDay::now(),
            ThemeChoice::Fixed(t) => t,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme {0:?} (expected auto, morning, afternoon, evening or night)")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeChoice {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "auto" {
            return Ok(ThemeChoice::Auto);
        }
        TimeOfDay::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .map(ThemeChoice::Fixed)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeChoice::Auto => f.write_str("auto"),
            ThemeChoice::Fixed(t) => t.fmt(f),
        }
    }
}

/// Every style the game view uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub screen: Style,
    pub board: Style,
    pub grid_dot: Style,
    pub border: Style,
    pub head: Style,
    pub body: Style,
    pub food: Style,
    pub label: Style,
    pub value: Style,
    pub button: Style,
    pub overlay: Style,
}

impl Palette {
    pub fn with_accent(accent: Rgb) -> Self {
        let black = Rgb::new(0, 0, 0);
        let board_bg = Rgb::new(26, 26, 46);
        Self {
            screen: Style::new(Rgb::new(220, 220, 220), black),
            board: Style::new(Rgb::new(80, 80, 90), board_bg),
            grid_dot: Style::new(Rgb::new(70, 70, 95), board_bg).dim(),
            border: Style::new(accent, black),
            head: Style::new(Rgb::new(0, 255, 136), board_bg).bold(),
            body: Style::new(Rgb::new(0, 255, 65), board_bg),
            food: Style::new(Rgb::new(255, 65, 65), board_bg).bold(),
            label: Style::new(accent, black).bold(),
            value: Style::new(Rgb::new(200, 200, 200), black),
            button: Style::new(accent, black),
            overlay: Style::new(Rgb::new(255, 255, 255), black).bold(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        TimeOfDay::Night.palette()
    }
}
