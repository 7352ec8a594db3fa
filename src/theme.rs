//! Colors, size presets and the override → ambient theme → default resolution.

use crate::error::LayoutError;
use crate::geometry::Axis;
use crate::variant::StepperVariant;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use tracing::warn;

/// Duration of the crossfade shown when a step's content appears.
pub const CROSSFADE_DURATION: Duration = Duration::from_millis(300);

/// An sRGB color with alpha.
///
/// Serialized as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
///
/// # Examples
///
/// ```
/// use ayumi::Color;
///
/// let blue = Color::from_hex("#2196F3")?;
/// assert_eq!(blue, Color::from_rgb(0x21, 0x96, 0xF3));
/// assert_eq!(blue.with_opacity(0.1).a, 26);
/// assert_eq!(blue.with_opacity(0.1).to_hex(), "#2196F31A");
/// # Ok::<(), ayumi::LayoutError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(0xFF, 0xFF, 0xFF);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 0xFF)
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidColor`] for any other form.
    pub fn from_hex(literal: &str) -> Result<Self, LayoutError> {
        let invalid = || LayoutError::InvalidColor(literal.to_string());
        let digits = literal.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() || !(digits.len() == 6 || digits.len() == 8) {
            return Err(invalid());
        }
        let channel =
            |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| invalid());
        let a = if digits.len() == 8 { channel(6)? } else { 0xFF };
        Ok(Self::from_rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    pub fn to_hex(&self) -> String {
        if self.a == 0xFF {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Same color with its alpha replaced by `opacity` (clamped to `[0, 1]`).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = LayoutError;

    fn try_from(literal: String) -> Result<Self, Self::Error> {
        Self::from_hex(&literal)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// The active / inactive / error triple every stepper is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepperColors {
    pub active: Color,
    pub inactive: Color,
    pub error: Color,
}

impl Default for StepperColors {
    fn default() -> Self {
        Self {
            active: Color::from_rgb(0x21, 0x96, 0xF3),
            inactive: Color::from_rgb(0x9E, 0x9E, 0x9E),
            error: Color::from_rgb(0xF4, 0x43, 0x36),
        }
    }
}

/// Size presets. Each fixes the indicator diameter; text and icon sizes
/// inside the indicator derive from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepperSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Pixel sizes derived from a [`StepperSize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    pub indicator_diameter: f32,
    pub text_size: f32,
    pub icon_size: f32,
}

impl StepperSize {
    pub fn indicator_diameter(self) -> f32 {
        match self {
            StepperSize::Small => 24.0,
            StepperSize::Medium => 32.0,
            StepperSize::Large => 40.0,
        }
    }

    pub fn metrics(self) -> SizeMetrics {
        let diameter = self.indicator_diameter();
        SizeMetrics {
            indicator_diameter: diameter,
            text_size: diameter / 2.0,
            icon_size: diameter * 0.75,
        }
    }
}

/// Well-known ambient theme keys read by the stepper.
pub mod keys {
    pub const ACTIVE_COLOR: &str = "stepper.active_color";
    pub const INACTIVE_COLOR: &str = "stepper.inactive_color";
    pub const ERROR_COLOR: &str = "stepper.error_color";
    pub const ORIENTATION: &str = "stepper.orientation";
    pub const VARIANT: &str = "stepper.variant";
    pub const SIZE: &str = "stepper.size";
}

/// Type-safe theme key wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeKey(String);

impl ThemeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ThemeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ThemeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ThemeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for ThemeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A value stored in an ambient theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeValue {
    Color(Color),
    Axis(Axis),
    Variant(StepperVariant),
    Size(StepperSize),
}

impl From<Color> for ThemeValue {
    fn from(value: Color) -> Self {
        ThemeValue::Color(value)
    }
}

impl From<Axis> for ThemeValue {
    fn from(value: Axis) -> Self {
        ThemeValue::Axis(value)
    }
}

impl From<StepperVariant> for ThemeValue {
    fn from(value: StepperVariant) -> Self {
        ThemeValue::Variant(value)
    }
}

impl From<StepperSize> for ThemeValue {
    fn from(value: StepperSize) -> Self {
        ThemeValue::Size(value)
    }
}

/// Read-only key-value access to whatever theme the host has in scope.
pub trait ThemeLookup {
    fn lookup(&self, key: &str) -> Option<ThemeValue>;
}

/// No ambient theme: every lookup misses.
impl ThemeLookup for () {
    fn lookup(&self, _key: &str) -> Option<ThemeValue> {
        None
    }
}

/// A key-value theme the host fills in (or deserializes) and hands to the
/// renderer.
///
/// # Examples
///
/// ```
/// use ayumi::{keys, Axis, Color, ThemeData, ThemeLookup, ThemeValue};
///
/// let mut theme = ThemeData::new();
/// theme.insert(keys::ACTIVE_COLOR, Color::from_rgb(0, 150, 136));
/// theme.insert(keys::ORIENTATION, Axis::Vertical);
///
/// assert_eq!(theme.lookup(keys::ORIENTATION), Some(ThemeValue::Axis(Axis::Vertical)));
/// assert_eq!(theme.lookup(keys::SIZE), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeData {
    values: HashMap<ThemeKey, ThemeValue>,
}

impl ThemeData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<ThemeKey>, value: impl Into<ThemeValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ThemeValue> {
        self.values.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ThemeValue> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ThemeKey> {
        self.values.keys()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ThemeLookup for ThemeData {
    fn lookup(&self, key: &str) -> Option<ThemeValue> {
        self.get(key).copied()
    }
}

fn read<T>(
    theme: &dyn ThemeLookup,
    key: &str,
    pick: fn(ThemeValue) -> Option<T>,
) -> Option<T> {
    let value = theme.lookup(key)?;
    let picked = pick(value);
    if picked.is_none() {
        warn!(key, ?value, "Ignoring theme entry with unexpected value type");
    }
    picked
}

fn pick_color(value: ThemeValue) -> Option<Color> {
    match value {
        ThemeValue::Color(color) => Some(color),
        _ => None,
    }
}

fn pick_axis(value: ThemeValue) -> Option<Axis> {
    match value {
        ThemeValue::Axis(axis) => Some(axis),
        _ => None,
    }
}

fn pick_variant(value: ThemeValue) -> Option<StepperVariant> {
    match value {
        ThemeValue::Variant(variant) => Some(variant),
        _ => None,
    }
}

fn pick_size(value: ThemeValue) -> Option<StepperSize> {
    match value {
        ThemeValue::Size(size) => Some(size),
        _ => None,
    }
}

/// Per-stepper settings that take precedence over the ambient theme.
///
/// Unset fields fall back to the ambient theme, then to toolkit defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepperOverrides {
    pub active_color: Option<Color>,
    pub inactive_color: Option<Color>,
    pub error_color: Option<Color>,
    pub orientation: Option<Axis>,
    pub variant: Option<StepperVariant>,
    pub size: Option<StepperSize>,
}

/// Fully resolved stepper settings. Renderers only ever see this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepperConfig {
    pub colors: StepperColors,
    pub axis: Axis,
    pub variant: StepperVariant,
    pub size: StepperSize,
    pub crossfade: Duration,
}

impl StepperConfig {
    /// Resolves every setting once: explicit override, then the ambient
    /// theme, then the built-in default.
    ///
    /// # Examples
    ///
    /// ```
    /// use ayumi::{keys, Axis, StepperConfig, StepperOverrides, StepperSize, ThemeData};
    ///
    /// let mut ambient = ThemeData::new();
    /// ambient.insert(keys::ORIENTATION, Axis::Vertical);
    /// ambient.insert(keys::SIZE, StepperSize::Large);
    ///
    /// let overrides = StepperOverrides {
    ///     size: Some(StepperSize::Small),
    ///     ..Default::default()
    /// };
    ///
    /// let config = StepperConfig::resolve(&overrides, &ambient);
    /// assert_eq!(config.axis, Axis::Vertical);
    /// assert_eq!(config.size, StepperSize::Small);
    /// ```
    pub fn resolve(overrides: &StepperOverrides, ambient: &dyn ThemeLookup) -> Self {
        let defaults = StepperColors::default();
        let colors = StepperColors {
            active: overrides
                .active_color
                .or_else(|| read(ambient, keys::ACTIVE_COLOR, pick_color))
                .unwrap_or(defaults.active),
            inactive: overrides
                .inactive_color
                .or_else(|| read(ambient, keys::INACTIVE_COLOR, pick_color))
                .unwrap_or(defaults.inactive),
            error: overrides
                .error_color
                .or_else(|| read(ambient, keys::ERROR_COLOR, pick_color))
                .unwrap_or(defaults.error),
        };
        Self {
            colors,
            axis: overrides
                .orientation
                .or_else(|| read(ambient, keys::ORIENTATION, pick_axis))
                .unwrap_or_default(),
            variant: overrides
                .variant
                .or_else(|| read(ambient, keys::VARIANT, pick_variant))
                .unwrap_or_default(),
            size: overrides
                .size
                .or_else(|| read(ambient, keys::SIZE, pick_size))
                .unwrap_or_default(),
            crossfade: CROSSFADE_DURATION,
        }
    }

    pub fn metrics(&self) -> SizeMetrics {
        self.size.metrics()
    }
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self::resolve(&StepperOverrides::default(), &())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex_parsing() {
        assert_eq!(
            Color::from_hex("#F44336"),
            Ok(Color::from_rgb(0xF4, 0x43, 0x36))
        );
        assert_eq!(
            Color::from_hex("#00000080"),
            Ok(Color::from_rgba(0, 0, 0, 0x80))
        );
        for bad in ["F44336", "#F4433", "#GG0000", "#ÿÿÿ", ""] {
            assert_eq!(
                Color::from_hex(bad),
                Err(LayoutError::InvalidColor(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_color_opacity() {
        let active = StepperColors::default().active;
        assert_eq!(active.with_opacity(0.1).a, 26);
        assert_eq!(active.with_opacity(2.0).a, 255);
        assert_eq!(active.with_opacity(-1.0).a, 0);
        assert_eq!(active.with_opacity(0.5).r, active.r);
    }

    #[test]
    fn test_size_metrics() {
        assert_eq!(
            StepperSize::Small.metrics(),
            SizeMetrics {
                indicator_diameter: 24.0,
                text_size: 12.0,
                icon_size: 18.0,
            }
        );
        assert_eq!(StepperSize::default(), StepperSize::Medium);
        assert_eq!(StepperSize::Large.indicator_diameter(), 40.0);
    }

    #[test]
    fn test_resolve_defaults() {
        let config = StepperConfig::default();
        assert_eq!(config.colors, StepperColors::default());
        assert_eq!(config.axis, Axis::Horizontal);
        assert_eq!(config.variant, StepperVariant::Circle);
        assert_eq!(config.size, StepperSize::Medium);
        assert_eq!(config.crossfade, CROSSFADE_DURATION);
    }

    #[test]
    fn test_resolve_prefers_override_then_ambient() {
        let teal = Color::from_rgb(0, 150, 136);
        let pink = Color::from_rgb(233, 30, 99);

        let mut ambient = ThemeData::new();
        ambient.insert(keys::ACTIVE_COLOR, teal);
        ambient.insert(keys::ERROR_COLOR, pink);
        ambient.insert(keys::VARIANT, StepperVariant::Line);

        let overrides = StepperOverrides {
            active_color: Some(Color::BLACK),
            ..Default::default()
        };
        let config = StepperConfig::resolve(&overrides, &ambient);

        assert_eq!(config.colors.active, Color::BLACK);
        assert_eq!(config.colors.error, pink);
        assert_eq!(config.colors.inactive, StepperColors::default().inactive);
        assert_eq!(config.variant, StepperVariant::Line);
    }

    #[test]
    fn test_resolve_ignores_mismatched_ambient_values() {
        let mut ambient = ThemeData::new();
        ambient.insert(keys::ORIENTATION, Color::WHITE);
        ambient.insert(keys::ACTIVE_COLOR, StepperSize::Large);

        let config = StepperConfig::resolve(&StepperOverrides::default(), &ambient);
        assert_eq!(config.axis, Axis::Horizontal);
        assert_eq!(config.colors.active, StepperColors::default().active);
    }

    #[test]
    fn test_theme_data_operations() {
        let mut theme = ThemeData::new();
        assert!(theme.is_empty());

        theme.insert("stepper.size", StepperSize::Small);
        assert!(theme.contains_key(keys::SIZE));
        assert_eq!(theme.len(), 1);
        assert_eq!(theme.remove(keys::SIZE), Some(ThemeValue::Size(StepperSize::Small)));
        assert!(theme.is_empty());
    }

    #[test]
    fn test_theme_key() {
        let key1 = ThemeKey::new(keys::VARIANT);
        let key2: ThemeKey = "stepper.variant".into();
        assert_eq!(key1, key2);
        assert_eq!(key1.to_string(), "stepper.variant");
    }

    #[test]
    fn test_theme_data_from_json() {
        let theme: ThemeData = serde_json::from_str(
            r##"{
                "stepper.active_color": { "color": "#009688" },
                "stepper.orientation": { "axis": "vertical" },
                "stepper.variant": { "variant": "circle_alt" },
                "stepper.size": { "size": "large" }
            }"##,
        )
        .unwrap();

        let config = StepperConfig::resolve(&StepperOverrides::default(), &theme);
        assert_eq!(config.colors.active, Color::from_rgb(0, 0x96, 0x88));
        assert_eq!(config.axis, Axis::Vertical);
        assert_eq!(config.variant, StepperVariant::CircleAlt);
        assert_eq!(config.size, StepperSize::Large);
    }

    #[test]
    fn test_overrides_from_json() {
        let overrides: StepperOverrides =
            serde_json::from_str(r##"{ "error_color": "#B00020", "variant": "line" }"##).unwrap();
        assert_eq!(overrides.error_color, Some(Color::from_rgb(0xB0, 0x00, 0x20)));
        assert_eq!(overrides.variant, Some(StepperVariant::Line));
        assert_eq!(overrides.size, None);

        let bad: Result<StepperOverrides, _> =
            serde_json::from_str(r##"{ "active_color": "blue" }"##);
        assert!(bad.is_err());
    }
}
