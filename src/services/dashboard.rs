//! Dashboard aggregation: page-view counters and the constituency dataset
//! turned into three independent chart specifications.
//!
//! The pipeline itself is pure ([`build`]); [`load`] only adds the two reads
//! and the final encoding. Any failure aborts the whole dashboard.

use sqlx::PgPool;

use crate::db::{uk_data, visits};
use crate::models::chart::{ChartSpec, Datum, Layout, Legend, Marker, Trace, TraceKind};
use crate::models::uk_data::UkData;
use crate::models::visit::Day;

/// Vulnerable-group categories, in display order.
pub const GROUPS: [&str; 3] = ["Female Non-Homeowners", "Female Students", "Female Retired"];

/// Parties plotted in the vulnerable-groups chart with their colours.
pub const PARTIES: [(&str, &str); 3] = [
    ("Labour", "#E4003B"),
    ("Conservative", "#0087DC"),
    ("Liberal Democrats", "#FAA61A"),
];

/// Rows strictly above this quantile form a group's "high" subset.
const HIGH_QUANTILE: f64 = 0.75;

/// Largest rendered marker diameter, in pixels.
const MAX_MARKER_SIZE: f64 = 20.0;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("failed to load dashboard data: {0}")]
    Data(#[from] sqlx::Error),

    #[error("failed to encode chart: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The three dashboard charts.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCharts {
    pub views: ChartSpec,
    pub gender: ChartSpec,
    pub vulnerable: ChartSpec,
}

/// Charts encoded as JSON, ready to embed in a `<script>` block.
#[derive(Debug, Clone)]
pub struct DashboardGraphs {
    pub views: String,
    pub gender: String,
    pub vulnerable: String,
}

/// Read both sources and produce the encoded charts.
pub async fn load(pool: &PgPool) -> Result<DashboardGraphs, DashboardError> {
    let (days, rows) = tokio::try_join!(visits::list_days(pool), uk_data::list_all(pool))?;
    encode(&build(&days, &rows))
}

pub fn build(days: &[Day], rows: &[UkData]) -> DashboardCharts {
    DashboardCharts {
        views: views_chart(days),
        gender: gender_chart(rows),
        vulnerable: vulnerable_chart(rows),
    }
}

pub fn encode(charts: &DashboardCharts) -> Result<DashboardGraphs, DashboardError> {
    Ok(DashboardGraphs {
        views: to_script_json(&charts.views)?,
        gender: to_script_json(&charts.gender)?,
        vulnerable: to_script_json(&charts.vulnerable)?,
    })
}

fn to_script_json(spec: &ChartSpec) -> Result<String, serde_json::Error> {
    // A "</script>" inside a constituency name must not close the block.
    Ok(serde_json::to_string(spec)?.replace("</", "<\\/"))
}

// ---------------------------------------------------------------------------
// Daily views
// ---------------------------------------------------------------------------

/// Bar chart of views per day, or a single "No Data" bar when nothing has
/// been counted yet.
pub fn views_chart(days: &[Day]) -> ChartSpec {
    if days.is_empty() {
        return ChartSpec {
            data: vec![Trace::new(
                TraceKind::Bar,
                vec![Datum::from("No Data")],
                vec![Datum::from(0.0)],
            )],
            layout: Layout::new("No Page View Data Available", "x", "y"),
        };
    }

    let mut days = days.to_vec();
    days.sort_by_key(|d| d.id);

    let x = days
        .iter()
        .map(|d| Datum::Label(d.id.format("%Y-%m-%d").to_string()))
        .collect();
    let y = days.iter().map(|d| Datum::Number(d.views as f64)).collect();

    ChartSpec {
        data: vec![Trace::new(TraceKind::Bar, x, y)],
        layout: Layout::new("Daily Page Views", "Date", "Page views"),
    }
}

// ---------------------------------------------------------------------------
// Per-row derivations
// ---------------------------------------------------------------------------

/// Missing or non-finite figures count as zero.
fn or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// `votes / total * 100`, or 0 when the total is missing or not positive.
pub fn vote_share(votes: Option<f64>, total: Option<f64>) -> f64 {
    match (votes, total) {
        (Some(votes), Some(total)) if total > 0.0 => or_zero(Some(votes / total * 100.0)),
        _ => 0.0,
    }
}

/// Marker weight for the scatter plot; never zero.
pub fn marker_weight(total: Option<f64>) -> f64 {
    total.filter(|t| t.is_finite() && *t > 0.0).unwrap_or(1.0)
}

/// Vote shares and vulnerable-group indicators derived from one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedRow {
    pub labour: f64,
    pub conservative: f64,
    pub lib_dem: f64,
    pub female_non_homeowner: f64,
    pub female_student: f64,
    pub female_retired: f64,
}

impl DerivedRow {
    pub fn from_row(row: &UkData) -> Self {
        let female = or_zero(row.c11_female);
        let student = or_zero(row.c11_fulltime_student);
        let retired = or_zero(row.c11_retired);
        let homeowner = or_zero(row.c11_house_owned);

        Self {
            labour: vote_share(row.lab_vote19, row.total_vote19),
            conservative: vote_share(row.con_vote19, row.total_vote19),
            lib_dem: vote_share(row.ld_vote19, row.total_vote19),
            female_non_homeowner: female * (100.0 - homeowner) / 100.0,
            female_student: female * student / 100.0,
            female_retired: female * retired / 100.0,
        }
    }

    fn indicator(&self, group: usize) -> f64 {
        match group {
            0 => self.female_non_homeowner,
            1 => self.female_student,
            _ => self.female_retired,
        }
    }

    fn share(&self, party: usize) -> f64 {
        match party {
            0 => self.labour,
            1 => self.conservative,
            _ => self.lib_dem,
        }
    }
}

// ---------------------------------------------------------------------------
// Gender vs. Labour scatter
// ---------------------------------------------------------------------------

/// Scatter of female population share against Labour vote share, one trace
/// per region in order of first appearance.
pub fn gender_chart(rows: &[UkData]) -> ChartSpec {
    let mut regions: Vec<(&str, Vec<&UkData>)> = Vec::new();
    for row in rows {
        match regions.iter_mut().find(|(region, _)| *region == row.region) {
            Some((_, members)) => members.push(row),
            None => regions.push((row.region.as_str(), vec![row])),
        }
    }

    let max_weight = rows
        .iter()
        .map(|r| marker_weight(r.total_vote19))
        .fold(1.0_f64, f64::max);
    // Area sizing: the heaviest marker renders at MAX_MARKER_SIZE.
    let sizeref = 2.0 * max_weight / (MAX_MARKER_SIZE * MAX_MARKER_SIZE);

    let data = regions
        .into_iter()
        .map(|(region, members)| {
            let x = members.iter().map(|r| Datum::Number(or_zero(r.c11_female))).collect();
            let y = members
                .iter()
                .map(|r| Datum::Number(vote_share(r.lab_vote19, r.total_vote19)))
                .collect();
            let mut trace = Trace::new(TraceKind::Scatter, x, y).named(region);
            trace.mode = Some("markers");
            trace.hovertext = Some(members.iter().map(|r| r.constituency_name.clone()).collect());
            trace.marker = Some(Marker {
                size: Some(members.iter().map(|r| marker_weight(r.total_vote19)).collect()),
                sizemode: Some("area"),
                sizeref: Some(sizeref),
                ..Marker::default()
            });
            trace
        })
        .collect();

    let mut layout = Layout::new(
        "Female Population vs. Labour Party Support",
        "Female Population Percentage",
        "Labour Vote Share (%)",
    );
    layout.legend = Some(Legend {
        title: "UK Region".into(),
    });
    layout.height = Some(600);

    ChartSpec { data, layout }
}

// ---------------------------------------------------------------------------
// Vulnerable groups
// ---------------------------------------------------------------------------

/// Quantile with linear interpolation between closest ranks.
/// `None` for an empty input.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64))
}

/// Indices of values strictly above the `q` quantile of the whole slice.
pub fn above_quantile(values: &[f64], q: f64) -> Vec<usize> {
    let Some(threshold) = quantile(values, q) else {
        return Vec::new();
    };
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v > threshold)
        .map(|(i, _)| i)
        .collect()
}

/// Arithmetic mean; 0 for an empty or non-finite result.
fn mean_or_zero(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        return 0.0;
    }
    or_zero(Some(sum / count as f64))
}

/// Mean vote share per `[group][party]` within each group's high subset.
pub fn group_support(rows: &[UkData]) -> [[f64; 3]; 3] {
    let derived: Vec<DerivedRow> = rows.iter().map(DerivedRow::from_row).collect();
    let mut support = [[0.0; 3]; 3];

    for (group, by_party) in support.iter_mut().enumerate() {
        let indicator: Vec<f64> = derived.iter().map(|d| d.indicator(group)).collect();
        let high = above_quantile(&indicator, HIGH_QUANTILE);
        for (party, value) in by_party.iter_mut().enumerate() {
            *value = mean_or_zero(high.iter().map(|&i| derived[i].share(party)));
        }
    }
    support
}

/// Grouped bar chart: three groups by three parties.
pub fn vulnerable_chart(rows: &[UkData]) -> ChartSpec {
    let support = group_support(rows);

    let data = PARTIES
        .iter()
        .enumerate()
        .map(|(party, (name, color))| {
            let x = GROUPS.iter().map(|g| Datum::from(*g)).collect();
            let y = support.iter().map(|by_party| Datum::Number(by_party[party])).collect();
            let mut trace = Trace::new(TraceKind::Bar, x, y).named(*name);
            trace.marker = Some(Marker {
                color: Some((*color).to_string()),
                ..Marker::default()
            });
            trace
        })
        .collect();

    let mut layout = Layout::new(
        "Party Support Among Vulnerable Female Groups",
        "Vulnerable Female Groups",
        "Average Party Support (%)",
    );
    layout.legend = Some(Legend {
        title: "Political Party".into(),
    });
    layout.barmode = Some("group");
    layout.height = Some(500);

    ChartSpec { data, layout }
}
