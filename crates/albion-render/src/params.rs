//! Range-checked render parameters.

use albion_types::{QueryParams, ToQuery};
use derive_more::{Display, Into};
use thiserror::Error;

/// Errors from constructing render parameters.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderParamError {
    /// Enchantment level above 4.
    #[error("Enchantment level {0} out of range 0-4")]
    Enchantment(u8),

    /// Quality outside 1-5.
    #[error("Quality {0} out of range 1-5")]
    Quality(u8),

    /// Icon size outside 1-217.
    #[error("Icon size {0} out of range 1-217")]
    Size(u16),
}

/// Item enchantment level, 0 to 4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
pub struct Enchantment(u8);

impl Enchantment {
    /// Highest enchantment level.
    pub const MAX: u8 = 4;

    /// Creates an enchantment level, or `None` if above [`Self::MAX`].
    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        if level <= Self::MAX {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Returns the level.
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Enchantment {
    type Error = RenderParamError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or(RenderParamError::Enchantment(level))
    }
}

/// Item quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Quality {
    /// Normal (1).
    Normal = 1,
    /// Good (2).
    Good = 2,
    /// Outstanding (3).
    Outstanding = 3,
    /// Excellent (4).
    Excellent = 4,
    /// Masterpiece (5).
    Masterpiece = 5,
}

impl Quality {
    /// Returns the numeric tier.
    #[must_use]
    pub const fn tier(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tier())
    }
}

impl TryFrom<u8> for Quality {
    type Error = RenderParamError;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        match tier {
            1 => Ok(Self::Normal),
            2 => Ok(Self::Good),
            3 => Ok(Self::Outstanding),
            4 => Ok(Self::Excellent),
            5 => Ok(Self::Masterpiece),
            _ => Err(RenderParamError::Quality(tier)),
        }
    }
}

/// Icon edge length in pixels, 1 to 217.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
pub struct IconSize(u16);

impl IconSize {
    /// Largest size the render service produces.
    pub const MAX: u16 = 217;

    /// Creates a size, or `None` if outside 1 to [`Self::MAX`].
    #[must_use]
    pub const fn new(pixels: u16) -> Option<Self> {
        if pixels >= 1 && pixels <= Self::MAX {
            Some(Self(pixels))
        } else {
            None
        }
    }

    /// Returns the size in pixels.
    #[must_use]
    pub const fn pixels(&self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for IconSize {
    type Error = RenderParamError;

    fn try_from(pixels: u16) -> Result<Self, Self::Error> {
        Self::new(pixels).ok_or(RenderParamError::Size(pixels))
    }
}

/// Parameters for item icons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemIconParams {
    /// Enchantment level, rendered into the path; defaults to 0.
    pub enchantment: Option<Enchantment>,
    /// Quality tier.
    pub quality: Option<Quality>,
    /// Icon size.
    pub size: Option<IconSize>,
    /// Locale for localized item names, e.g. `en`.
    pub locale: Option<String>,
}

impl ToQuery for ItemIconParams {
    fn append_to(&self, query: &mut QueryParams) {
        query
            .append_opt("quality", self.quality)
            .append_opt("size", self.size)
            .append_opt("locale", self.locale.as_deref());
    }
}

/// Parameters for spell and destiny board icons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconParams {
    /// Icon size.
    pub size: Option<IconSize>,
    /// Locale for localized names.
    pub locale: Option<String>,
}

impl ToQuery for IconParams {
    fn append_to(&self, query: &mut QueryParams) {
        query
            .append_opt("size", self.size)
            .append_opt("locale", self.locale.as_deref());
    }
}

/// Parameters for guild logos.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildLogoParams {
    /// Symbol code, e.g. `TREE`.
    pub symbol: String,
    /// Icon size.
    pub size: Option<IconSize>,
    /// Logo scheme code.
    pub logo_type: Option<u8>,
    /// Background motif color code.
    pub motif_color: Option<String>,
    /// Symbol color code.
    pub symbol_color: Option<String>,
    /// Symbol scale factor.
    pub symbol_scale: Option<f32>,
}

impl GuildLogoParams {
    /// Creates logo parameters with only the symbol set.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            size: None,
            logo_type: None,
            motif_color: None,
            symbol_color: None,
            symbol_scale: None,
        }
    }
}

impl ToQuery for GuildLogoParams {
    fn append_to(&self, query: &mut QueryParams) {
        query
            .append("symbol", &self.symbol)
            .append_opt("size", self.size)
            .append_opt("type", self.logo_type)
            .append_opt("motif_color", self.motif_color.as_deref())
            .append_opt("symbol_color", self.symbol_color.as_deref())
            .append_opt("symbol_scale", self.symbol_scale);
    }
}
