use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::info;

use super::datasets::RegionMetadata;
use crate::error::{DashError, DashResult};

const DEFAULT_REGIONS: [(&str, u8); 14] = [
    ("深莞区", 1),
    ("沪苏区", 1),
    ("京津区", 2),
    ("浙闽区", 1),
    ("粤东区", 2),
    ("西南区", 2),
    ("华中区", 2),
    ("西北区", 3),
    ("香港区", 1),
    ("东南亚区", 2),
    ("欧美区", 1),
    ("中东区", 2),
    ("拉美区", 3),
    ("非南区", 3),
];

static REGION_TABLE: OnceLock<Vec<RegionMetadata>> = OnceLock::new();

pub fn default_regions() -> &'static [RegionMetadata] {
    REGION_TABLE.get_or_init(|| {
        DEFAULT_REGIONS
            .iter()
            .map(|(name, tier)| RegionMetadata::new(*name, *tier))
            .collect()
    })
}

#[derive(Clone, Debug, Deserialize)]
pub struct RegionTableFile {
    #[serde(default)]
    pub regions: Vec<RegionMetadata>,
}

pub fn load_region_table(path: impl AsRef<Path>) -> DashResult<Vec<RegionMetadata>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let file = serde_yaml::from_slice::<RegionTableFile>(&bytes).map_err(|error| {
        DashError::InvalidArgument(format!(
            "invalid region table '{}': {error}",
            path.display()
        ))
    })?;
    validate_region_table(&file.regions)?;
    info!(
        path = %path.display(),
        regions = file.regions.len(),
        "loaded region table"
    );
    Ok(file.regions)
}

pub fn validate_region_table(regions: &[RegionMetadata]) -> DashResult<()> {
    if regions.is_empty() {
        return Err(DashError::InvalidArgument(
            "region table must contain at least one region".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    for region in regions {
        let name = region.name.trim();
        if name.is_empty() {
            return Err(DashError::InvalidArgument(
                "region table contains a region with an empty name".to_string(),
            ));
        }
        if !seen.insert(name) {
            return Err(DashError::InvalidArgument(format!(
                "region table contains duplicate region '{name}'"
            )));
        }
    }
    Ok(())
}
