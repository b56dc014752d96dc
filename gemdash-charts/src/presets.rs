//! Stock configurations for the three dashboard charts, with the
//! dashboard's palette and demo figures.

use gemdash_core::{DatasetCatalog, Period, Series};
use serde_json::json;

use crate::config::{ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, Paint};

pub const ACCENT_BLUE: &str = "#4361ee";
pub const ACCENT_TEAL: &str = "#2ec4b6";
pub const ACCENT_AMBER: &str = "#ff9f1c";
pub const ACCENT_RED: &str = "#e63946";
pub const ACCENT_SKY: &str = "#4cc9f0";

/// Purchases/sales figures per reporting period. The quarterly and yearly
/// rows are aggregates of the monthly ones.
pub fn performance_catalog() -> DatasetCatalog {
    let entries = [
        (
            Period::Monthly,
            Series::new(
                [
                    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                    "Dec",
                ],
                vec![
                    12000.0, 19000.0, 15000.0, 25000.0, 22000.0, 30000.0, 28000.0, 25000.0,
                    30000.0, 35000.0, 28000.0, 32000.0,
                ],
                vec![
                    15000.0, 22000.0, 18000.0, 28000.0, 25000.0, 35000.0, 32000.0, 30000.0,
                    35000.0, 40000.0, 35000.0, 38000.0,
                ],
            ),
        ),
        (
            Period::Quarterly,
            Series::new(
                ["Q1", "Q2", "Q3", "Q4"],
                vec![46000.0, 77000.0, 83000.0, 95000.0],
                vec![55000.0, 88000.0, 97000.0, 113000.0],
            ),
        ),
        (
            Period::Yearly,
            Series::new(
                ["2020", "2021", "2022", "2023", "2024"],
                vec![180000.0, 220000.0, 260000.0, 300000.0, 350000.0],
                vec![210000.0, 250000.0, 290000.0, 340000.0, 400000.0],
            ),
        ),
    ];
    DatasetCatalog::try_new(entries).expect("builtin catalog is aligned")
}

/// Business performance: filled line chart over the given series.
pub fn performance_config(series: &Series) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: series.labels.clone(),
            datasets: vec![
                Dataset {
                    label: Some("Purchases".into()),
                    data: series.purchases.clone(),
                    border_color: Some(ACCENT_BLUE.into()),
                    background_color: Some(Paint::Solid("rgba(67, 97, 238, 0.1)".into())),
                    fill: Some(true),
                    ..Dataset::default()
                },
                Dataset {
                    label: Some("Sales".into()),
                    data: series.sales.clone(),
                    border_color: Some(ACCENT_TEAL.into()),
                    background_color: Some(Paint::Solid("rgba(46, 196, 182, 0.1)".into())),
                    fill: Some(true),
                    ..Dataset::default()
                },
            ],
        },
        options: ChartOptions {
            plugins: Some(json!({
                "tooltip": { "mode": "index", "intersect": false }
            })),
            scales: Some(json!({
                "x": { "grid": { "display": false } },
                "y": { "beginAtZero": true }
            })),
            ..ChartOptions::default()
        },
    }
}

/// Profit distribution by cut: doughnut with a 70% cutout.
pub fn profit_config() -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: vec![
                "Round Cut".into(),
                "Princess Cut".into(),
                "Emerald Cut".into(),
                "Cushion Cut".into(),
                "Other".into(),
            ],
            datasets: vec![Dataset {
                data: vec![35.0, 25.0, 20.0, 15.0, 5.0],
                background_color: Some(Paint::PerSlice(vec![
                    ACCENT_BLUE.into(),
                    ACCENT_TEAL.into(),
                    ACCENT_AMBER.into(),
                    ACCENT_RED.into(),
                    ACCENT_SKY.into(),
                ])),
                border_width: Some(0.0),
                ..Dataset::default()
            }],
        },
        options: ChartOptions {
            cutout: Some("70%".into()),
            plugins: Some(json!({
                "legend": { "position": "right" }
            })),
            ..ChartOptions::default()
        },
    }
}

/// Transaction history: monthly purchase/sale counts as rounded bars.
pub fn transactions_config() -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: vec![
                "Jan".into(),
                "Feb".into(),
                "Mar".into(),
                "Apr".into(),
                "May".into(),
                "Jun".into(),
            ],
            datasets: vec![
                Dataset {
                    label: Some("Purchases".into()),
                    data: vec![12.0, 19.0, 15.0, 25.0, 22.0, 30.0],
                    background_color: Some(Paint::Solid("rgba(67, 97, 238, 0.7)".into())),
                    border_radius: Some(4.0),
                    ..Dataset::default()
                },
                Dataset {
                    label: Some("Sales".into()),
                    data: vec![10.0, 15.0, 12.0, 20.0, 18.0, 25.0],
                    background_color: Some(Paint::Solid("rgba(46, 196, 182, 0.7)".into())),
                    border_radius: Some(4.0),
                    ..Dataset::default()
                },
            ],
        },
        options: ChartOptions {
            scales: Some(json!({
                "x": { "grid": { "display": false } },
                "y": { "beginAtZero": true, "ticks": { "precision": 0 } }
            })),
            ..ChartOptions::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_period() {
        let catalog = performance_catalog();
        for period in Period::ALL {
            let series = catalog.series(period).unwrap();
            assert_eq!(series.labels.len(), series.purchases.len());
            assert_eq!(series.labels.len(), series.sales.len());
        }
        assert_eq!(catalog.series(Period::Monthly).unwrap().len(), 12);
    }

    #[test]
    fn quarterly_figures_aggregate_monthly() {
        let catalog = performance_catalog();
        let monthly = catalog.series(Period::Monthly).unwrap();
        let quarterly = catalog.series(Period::Quarterly).unwrap();
        for q in 0..4 {
            let purchases: f64 = monthly.purchases[q * 3..(q + 1) * 3].iter().sum();
            let sales: f64 = monthly.sales[q * 3..(q + 1) * 3].iter().sum();
            assert_eq!(quarterly.purchases[q], purchases);
            assert_eq!(quarterly.sales[q], sales);
        }
    }

    #[test]
    fn performance_config_tracks_given_series() {
        let catalog = performance_catalog();
        let series = catalog.series(Period::Yearly).unwrap();
        let config = performance_config(series);
        assert_eq!(config.kind, ChartKind::Line);
        assert_eq!(config.data.labels, series.labels);
        assert_eq!(config.data.datasets[0].data, series.purchases);
        assert_eq!(config.data.datasets[1].data, series.sales);
    }

    #[test]
    fn profit_config_shape() {
        let value = serde_json::to_value(profit_config()).unwrap();
        assert_eq!(value["type"], "doughnut");
        assert_eq!(value["options"]["cutout"], "70%");
        assert_eq!(value["data"]["datasets"][0]["data"].as_array().unwrap().len(), 5);
    }
}
