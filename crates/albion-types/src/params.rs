//! Optional endpoint parameters.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::query::{QueryParams, ToQuery};

/// Paging window for list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Maximum number of entries to return.
    pub limit: Option<u32>,
    /// Number of entries to skip.
    pub offset: Option<u32>,
}

impl PaginationParams {
    /// Creates a paging window with both bounds set.
    #[must_use]
    pub const fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}

impl ToQuery for PaginationParams {
    fn append_to(&self, query: &mut QueryParams) {
        query
            .append_opt("limit", self.limit)
            .append_opt("offset", self.offset);
    }
}

/// Sort order for battle listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleSort {
    /// Most recent first.
    Recent,
    /// Highest total fame first.
    TopFame,
}

impl BattleSort {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::TopFame => "topfame",
        }
    }
}

impl std::fmt::Display for BattleSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BattleSort {
    type Err = ParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recent" => Ok(Self::Recent),
            "topfame" | "top-fame" | "fame" => Ok(Self::TopFame),
            _ => Err(ParamParseError::new("battle sort", s, "recent, topfame")),
        }
    }
}

/// Parameters for battle listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleParams {
    /// Maximum number of battles to return.
    pub limit: Option<u32>,
    /// Number of battles to skip.
    pub offset: Option<u32>,
    /// Sort order.
    pub sort: Option<BattleSort>,
}

impl ToQuery for BattleParams {
    fn append_to(&self, query: &mut QueryParams) {
        query
            .append_opt("limit", self.limit)
            .append_opt("offset", self.offset)
            .append_opt("sort", self.sort);
    }
}

/// Time window for kill-fame rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KillRange {
    /// Last 24 hours.
    Day,
    /// Current week.
    Week,
    /// Current month.
    Month,
    /// Previous week.
    LastWeek,
    /// Previous month.
    LastMonth,
}

impl KillRange {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::LastWeek => "lastWeek",
            Self::LastMonth => "lastMonth",
        }
    }
}

impl std::fmt::Display for KillRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KillRange {
    type Err = ParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "lastweek" => Ok(Self::LastWeek),
            "lastmonth" => Ok(Self::LastMonth),
            _ => Err(ParamParseError::new(
                "kill range",
                s,
                "day, week, month, lastWeek, lastMonth",
            )),
        }
    }
}

/// Parameters for top-kill and solo-kill rankings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopKillsParams {
    /// Ranking window.
    pub range: Option<KillRange>,
    /// Maximum number of events to return.
    pub limit: Option<u32>,
    /// Number of events to skip.
    pub offset: Option<u32>,
}

impl ToQuery for TopKillsParams {
    fn append_to(&self, query: &mut QueryParams) {
        query
            .append_opt("range", self.range)
            .append_opt("limit", self.limit)
            .append_opt("offset", self.offset);
    }
}

/// Error returned when parsing an invalid parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamParseError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl ParamParseError {
    fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

impl std::fmt::Display for ParamParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid {} '{}', expected one of: {}",
            self.kind, self.value, self.expected
        )
    }
}

impl std::error::Error for ParamParseError {}
