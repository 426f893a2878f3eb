use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrendPoint {
    pub month: String,
    pub total_income: f64,
    pub transport_income: f64,
    pub warehouse_income: f64,
    pub target_rate: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeeklyModePoint {
    pub week: String,
    pub land: f64,
    pub sea: f64,
    pub air: f64,
    pub rail: f64,
    pub delay_rate: f64,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RegionMetadata {
    pub name: String,
    pub tier: u8,
}

impl RegionMetadata {
    pub fn new(name: impl Into<String>, tier: u8) -> Self {
        Self {
            name: name.into(),
            tier,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RegionGroup {
    A,
    B,
    C,
    D,
    E,
}

impl RegionGroup {
    pub const fn from_tier(tier: u8) -> Self {
        match tier {
            1 => Self::A,
            2 => Self::B,
            3 => Self::C,
            4 => Self::D,
            _ => Self::E,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Transport,
    Warehouse,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Transport, Category::Warehouse];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Warehouse => "warehouse",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DashError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "transport" => Ok(Self::Transport),
            "warehouse" => Ok(Self::Warehouse),
            other => Err(DashError::InvalidArgument(format!(
                "unknown category '{other}' (expected one of: transport, warehouse)"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionalPerformanceRecord {
    pub id: String,
    pub group: RegionGroup,
    pub region: String,
    pub ytd_achievement: f64,
    pub mtd_achievement: f64,
    pub customer_change: f64,
    pub mom_growth: f64,
    pub yoy_growth: f64,
    pub manager_rate: f64,
    pub rank: u32,
}

impl RegionalPerformanceRecord {
    pub const LOW_MTD_ALERT: f64 = 20.0;
    pub const PODIUM_RANKS: u32 = 3;

    pub fn is_low_mtd_alert(&self) -> bool {
        self.mtd_achievement < Self::LOW_MTD_ALERT
    }

    pub fn is_losing_customers(&self) -> bool {
        self.customer_change < 0.0
    }

    pub fn is_podium(&self) -> bool {
        (1..=Self::PODIUM_RANKS).contains(&self.rank)
    }
}
