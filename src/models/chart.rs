//! Declarative chart specifications, serialized in the Plotly figure format
//! (`{"data": [...traces], "layout": {...}}`) for the client-side renderer.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Bar,
    Scatter,
}

/// A categorical or numeric axis value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Datum {
    Label(String),
    Number(f64),
}

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Datum::Label(value.to_string())
    }
}

impl From<f64> for Datum {
    fn from(value: f64) -> Self {
        Datum::Number(value)
    }
}

/// One data series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    pub x: Vec<Datum>,
    pub y: Vec<Datum>,
    /// Per-point hover labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertext: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl Trace {
    pub fn new(kind: TraceKind, x: Vec<Datum>, y: Vec<Datum>) -> Self {
        Self {
            kind,
            name: None,
            mode: None,
            x,
            y,
            hovertext: None,
            marker: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizemode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizeref: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub text: String,
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text {
            text: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Text,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Layout {
    pub fn new(title: &str, x_title: &str, y_title: &str) -> Self {
        Self {
            title: title.into(),
            xaxis: Axis {
                title: x_title.into(),
            },
            yaxis: Axis {
                title: y_title.into(),
            },
            legend: None,
            barmode: None,
            height: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_serializes_in_plotly_shape() {
        let trace = Trace::new(
            TraceKind::Bar,
            vec![Datum::from("2024-01-01")],
            vec![Datum::from(3.0)],
        )
        .named("Page views");
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["type"], "bar");
        assert_eq!(json["name"], "Page views");
        assert_eq!(json["x"][0], "2024-01-01");
        assert_eq!(json["y"][0], 3.0);
        assert!(json.get("marker").is_none());
    }

    #[test]
    fn layout_nests_titles() {
        let layout = Layout::new("Daily Page Views", "Date", "Page views");
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["title"]["text"], "Daily Page Views");
        assert_eq!(json["xaxis"]["title"]["text"], "Date");
        assert!(json.get("barmode").is_none());
    }
}
