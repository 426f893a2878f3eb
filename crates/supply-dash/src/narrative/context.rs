use itertools::Itertools;

use crate::data::datasets::{MonthlyTrendPoint, RegionalPerformanceRecord};

pub const RISK_MTD_THRESHOLD: f64 = 40.0;
pub const MAX_RISK_REGIONS: usize = 3;
pub const NO_RISK_REGIONS: &str = "暂无重大异常";

pub fn overview_context(latest: &MonthlyTrendPoint) -> String {
    format!(
        "总体收入{:.2}万(达成{:.2}%)，跨境运输占65%，亚洲仓占35%。近期录单延迟率处于合理区间。",
        latest.total_income, latest.target_rate
    )
}

/// Regions in ranked order whose month-to-date achievement is below the risk
/// threshold or that lost customers, capped at [`MAX_RISK_REGIONS`].
pub fn risk_regions(records: &[RegionalPerformanceRecord]) -> Vec<&str> {
    records
        .iter()
        .filter(|record| {
            record.mtd_achievement < RISK_MTD_THRESHOLD || record.is_losing_customers()
        })
        .map(|record| record.region.as_str())
        .take(MAX_RISK_REGIONS)
        .collect()
}

pub fn region_context(records: &[RegionalPerformanceRecord]) -> String {
    let risk = risk_regions(records);
    let risk = if risk.is_empty() {
        NO_RISK_REGIONS.to_string()
    } else {
        risk.iter().join("、")
    };
    format!("本月区域表现分化。风险点：{risk} 出现达成率预警或客户流失。")
}
