//! Constituency demographics and 2019 general election results.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One constituency row. Percentages are 0-100; vote columns are counts.
/// Any numeric column may be missing in the source dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UkData {
    pub id: i64,
    pub constituency_name: String,
    pub region: String,
    pub c11_female: Option<f64>,
    pub c11_fulltime_student: Option<f64>,
    pub c11_retired: Option<f64>,
    pub c11_house_owned: Option<f64>,
    pub total_vote19: Option<f64>,
    pub lab_vote19: Option<f64>,
    pub con_vote19: Option<f64>,
    pub ld_vote19: Option<f64>,
}

/// A dataset row as it appears in the import CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct UkDataRecord {
    pub constituency_name: String,
    pub region: String,
    #[serde(rename = "c11Female")]
    pub c11_female: Option<f64>,
    #[serde(rename = "c11FulltimeStudent")]
    pub c11_fulltime_student: Option<f64>,
    #[serde(rename = "c11Retired")]
    pub c11_retired: Option<f64>,
    #[serde(rename = "c11HouseOwned")]
    pub c11_house_owned: Option<f64>,
    #[serde(rename = "TotalVote19")]
    pub total_vote19: Option<f64>,
    #[serde(rename = "LabVote19")]
    pub lab_vote19: Option<f64>,
    #[serde(rename = "ConVote19")]
    pub con_vote19: Option<f64>,
    #[serde(rename = "LDVote19")]
    pub ld_vote19: Option<f64>,
}
