use serde::Serialize;
use serde_json::Value;

/// Declarative chart configuration handed to the host page's charting
/// library as plain JSON. Field names follow the library's wire format,
/// so everything serializes camelCase.
#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
}

impl Dataset {
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn labeled(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: Some(label.into()),
            data,
            ..Self::default()
        }
    }
}

/// Either one color for the whole dataset or one per slice/bar.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(String),
    PerSlice(Vec<String>),
}

/// Display options. The dashboard charts fill their card, so the aspect
/// ratio is never maintained. Legend/tooltip/scale tweaks stay loose JSON;
/// they are opaque pass-through for the library.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Value>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            cutout: None,
            plugins: None,
            scales: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_library_wire_names() {
        let config = ChartConfig {
            kind: ChartKind::Line,
            data: ChartData {
                labels: vec!["Jan".into()],
                datasets: vec![Dataset {
                    label: Some("Sales".into()),
                    data: vec![1.0],
                    border_color: Some("#2ec4b6".into()),
                    fill: Some(true),
                    ..Dataset::default()
                }],
            },
            options: ChartOptions::default(),
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["type"], "line");
        assert_eq!(value["data"]["datasets"][0]["borderColor"], "#2ec4b6");
        assert_eq!(value["options"]["maintainAspectRatio"], false);
        // Unset options stay off the wire entirely.
        assert!(value["options"].get("cutout").is_none());
    }

    #[test]
    fn paint_serializes_untagged() {
        let solid = serde_json::to_value(Paint::Solid("#fff".into())).unwrap();
        assert_eq!(solid, serde_json::json!("#fff"));
        let per_slice = serde_json::to_value(Paint::PerSlice(vec!["#000".into()])).unwrap();
        assert_eq!(per_slice, serde_json::json!(["#000"]));
    }
}
