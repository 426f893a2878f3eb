use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

use crate::data::datasets::{
    Category, MonthlyTrendPoint, RegionMetadata, RegionalPerformanceRecord, WeeklyModePoint,
};
use crate::data::generator::{generate_monthly_trend, generate_weekly_trend};
use crate::error::{DashError, DashResult};
use crate::narrative::context::{overview_context, region_context};
use crate::narrative::NarrativeSummarizer;
use crate::random::UnitSource;
use crate::ranking::generate_regional_performance_from;

pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

pub const ORGANIZATIONS: [&str; 4] = ["全国总部", "华南组织", "华东组织", "海外事业部"];
pub const DEFAULT_ORGANIZATION: &str = "全国总部";
pub const DEFAULT_WEEK: &str = "2024-W12";

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DashboardFilter {
    pub organization: String,
    pub week: String,
}

impl Default for DashboardFilter {
    fn default() -> Self {
        Self {
            organization: DEFAULT_ORGANIZATION.to_string(),
            week: DEFAULT_WEEK.to_string(),
        }
    }
}

impl DashboardFilter {
    pub fn new(organization: &str, week: &str) -> DashResult<Self> {
        validate_organization(organization)?;
        validate_week(week)?;
        Ok(Self {
            organization: organization.to_string(),
            week: week.to_string(),
        })
    }
}

pub fn validate_organization(organization: &str) -> DashResult<()> {
    if ORGANIZATIONS.contains(&organization) {
        return Ok(());
    }
    Err(DashError::InvalidArgument(format!(
        "unknown organization '{organization}' (expected one of: {})",
        ORGANIZATIONS.join(", ")
    )))
}

/// Accepts ISO-style week labels such as `2024-W12`.
pub fn validate_week(week: &str) -> DashResult<()> {
    let Some((year, number)) = week.split_once("-W") else {
        return Err(invalid_week(week));
    };
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_week(week));
    }
    if number.len() != 2 || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_week(week));
    }
    match number.parse::<u32>() {
        Ok(1..=53) => Ok(()),
        _ => Err(invalid_week(week)),
    }
}

fn invalid_week(week: &str) -> DashError {
    DashError::InvalidArgument(format!(
        "invalid week '{week}'; expected YYYY-Www with week 01..53"
    ))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeadlineIndicator {
    pub title: String,
    pub value: f64,
    pub unit: String,
    pub change: f64,
    pub achievement: f64,
}

pub fn headline_indicators(latest: &MonthlyTrendPoint) -> Vec<HeadlineIndicator> {
    let indicator = |title: &str, value: f64, change: f64, achievement: f64| HeadlineIndicator {
        title: title.to_string(),
        value,
        unit: "万".to_string(),
        change,
        achievement,
    };
    vec![
        indicator(
            "跨境供应链总体收入",
            latest.total_income,
            14.2,
            latest.target_rate,
        ),
        indicator(
            "跨境运输收入",
            latest.transport_income,
            8.7,
            latest.target_rate - 2.0,
        ),
        indicator(
            "亚洲仓收入",
            latest.warehouse_income,
            21.5,
            latest.target_rate + 4.0,
        ),
    ]
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionalTable {
    pub category: Category,
    pub records: Vec<RegionalPerformanceRecord>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotSummaries {
    pub overview: String,
    pub region: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub filter: DashboardFilter,
    pub indicators: Vec<HeadlineIndicator>,
    pub monthly: Vec<MonthlyTrendPoint>,
    pub weekly: Vec<WeeklyModePoint>,
    pub regional: Vec<RegionalTable>,
    pub overview_context: String,
    pub region_context: String,
    pub fingerprint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summaries: Option<SnapshotSummaries>,
}

impl DashboardSnapshot {
    pub fn table(&self, category: Category) -> Option<&RegionalTable> {
        self.regional
            .iter()
            .find(|table| table.category == category)
    }
}

/// Generates one full render cycle: both series, then one ranked table per
/// category, in that draw order.
pub fn build_snapshot<S: UnitSource + ?Sized>(
    filter: DashboardFilter,
    regions: &[RegionMetadata],
    seed: Option<u64>,
    rng: &mut S,
) -> DashResult<DashboardSnapshot> {
    let monthly = generate_monthly_trend(rng);
    let weekly = generate_weekly_trend(rng);
    let regional: Vec<RegionalTable> = Category::ALL
        .iter()
        .map(|category| RegionalTable {
            category: *category,
            records: generate_regional_performance_from(regions, *category, rng),
        })
        .collect();

    let indicators = monthly.last().map(headline_indicators).unwrap_or_default();
    let overview = monthly.last().map(overview_context).unwrap_or_default();
    let region = regional
        .iter()
        .find(|table| table.category == Category::Transport)
        .map(|table| region_context(&table.records))
        .unwrap_or_default();
    let fingerprint = fingerprint(&monthly, &weekly, &regional)?;

    info!(
        organization = %filter.organization,
        week = %filter.week,
        fingerprint = %fingerprint,
        "built dashboard snapshot"
    );

    Ok(DashboardSnapshot {
        schema_version: SNAPSHOT_SCHEMA_VERSION,
        generated_at: Utc::now(),
        seed,
        filter,
        indicators,
        monthly,
        weekly,
        regional,
        overview_context: overview,
        region_context: region,
        fingerprint,
        summaries: None,
    })
}

pub async fn attach_summaries(snapshot: &mut DashboardSnapshot, summarizer: &NarrativeSummarizer) {
    let (overview, region) = futures::join!(
        summarizer.summarize(&snapshot.overview_context),
        summarizer.summarize(&snapshot.region_context)
    );
    snapshot.summaries = Some(SnapshotSummaries { overview, region });
}

fn fingerprint(
    monthly: &[MonthlyTrendPoint],
    weekly: &[WeeklyModePoint],
    regional: &[RegionalTable],
) -> DashResult<String> {
    let bytes = serde_json::to_vec(&(monthly, weekly, regional))?;
    let digest = Sha256::digest(bytes);
    Ok(format!("sha256:{digest:x}"))
}
