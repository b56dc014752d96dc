use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Reporting granularities offered by the dashboard period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Monthly,
    Quarterly,
    Yearly,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Monthly, Period::Quarterly, Period::Yearly];

    /// Key as it appears in `data-chart-period` attributes. Unknown keys
    /// map to `None` rather than an error: the UI only ever offers valid
    /// ones, so a miss is silently ignored upstream.
    pub fn from_key(key: &str) -> Option<Period> {
        match key {
            "monthly" => Some(Period::Monthly),
            "quarterly" => Some(Period::Quarterly),
            "yearly" => Some(Period::Yearly),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Period::Monthly => "monthly",
            Period::Quarterly => "quarterly",
            Period::Yearly => "yearly",
        }
    }
}

/// One labelled pair of purchase/sales series, positionally aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub labels: Vec<String>,
    pub purchases: Vec<f64>,
    pub sales: Vec<f64>,
}

impl Series {
    pub fn new(
        labels: impl IntoIterator<Item = impl Into<String>>,
        purchases: Vec<f64>,
        sales: Vec<f64>,
    ) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            purchases,
            sales,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn is_aligned(&self) -> bool {
        self.labels.len() == self.purchases.len() && self.labels.len() == self.sales.len()
    }
}

/// Fixed table of period-keyed series. Validated at construction and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetCatalog {
    entries: HashMap<Period, Series>,
}

impl DatasetCatalog {
    pub fn try_new(
        entries: impl IntoIterator<Item = (Period, Series)>,
    ) -> Result<Self, CatalogError> {
        let entries: HashMap<Period, Series> = entries.into_iter().collect();
        for (period, series) in &entries {
            if !series.is_aligned() {
                return Err(CatalogError::SeriesLengthMismatch {
                    period: period.key(),
                    labels: series.labels.len(),
                    purchases: series.purchases.len(),
                    sales: series.sales.len(),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn series(&self, period: Period) -> Option<&Series> {
        self.entries.get(&period)
    }

    pub fn contains(&self, period: Period) -> bool {
        self.entries.contains_key(&period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aligned(n: usize) -> Series {
        Series::new(
            (0..n).map(|i| format!("L{i}")),
            vec![1.0; n],
            vec![2.0; n],
        )
    }

    #[test]
    fn rejects_mismatched_series() {
        let bad = Series::new(["Q1", "Q2"], vec![1.0, 2.0, 3.0], vec![4.0, 5.0]);
        let err = DatasetCatalog::try_new([(Period::Quarterly, bad)]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::SeriesLengthMismatch {
                period: "quarterly",
                labels: 2,
                purchases: 3,
                sales: 2,
            }
        );
    }

    #[test]
    fn lookup_by_period() {
        let catalog = DatasetCatalog::try_new([
            (Period::Monthly, aligned(12)),
            (Period::Yearly, aligned(5)),
        ])
        .unwrap();
        assert_eq!(catalog.series(Period::Monthly).unwrap().len(), 12);
        assert!(catalog.series(Period::Quarterly).is_none());
    }

    #[test]
    fn period_keys_round_trip() {
        for period in Period::ALL {
            assert_eq!(Period::from_key(period.key()), Some(period));
        }
        assert_eq!(Period::from_key("weekly"), None);
    }
}
