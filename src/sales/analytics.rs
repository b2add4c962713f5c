use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::data::{Sale, SalesDataset, Stage};
use crate::parse_leading_int;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub amount: u64,
    pub count: usize,
}

impl<'a> FromIterator<&'a Sale> for Totals {
    fn from_iter<I: IntoIterator<Item = &'a Sale>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |acc, sale| Self {
            amount: acc.amount + sale.amount,
            count: acc.count + 1,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    pub current_month: Totals,
    pub current_quarter: Totals,
    pub year_to_date: Totals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopMetrics {
    pub total_opportunities: usize,
    /// `None` when nothing has closed yet
    pub average_deal_size: Option<u64>,
    pub win_rate: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_sales: PeriodTotals,
    pub top_metrics: TopMetrics,
}

/// Closed Won totals for one value of a grouping key.
///
/// Serializes with the key under the dimension's own name, e.g.
/// `{ "region": "Europe", "totalAmount": 70000, "count": 2 }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTotal {
    pub dimension: &'static str,
    pub key: String,
    pub total_amount: u64,
    pub count: usize,
}

impl Serialize for GroupTotal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(self.dimension, &self.key)?;
        map.serialize_entry("totalAmount", &self.total_amount)?;
        map.serialize_entry("count", &self.count)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelStage {
    pub stage: Stage,
    pub count: usize,
    pub total_amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub period: String,
    pub total_amount: u64,
    pub count: usize,
}

/// Query filters for raw sales records. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_rep: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
}

impl SalesFilter {
    pub fn matches(&self, sale: &Sale) -> bool {
        let date = sale.date.to_string();
        self.region.as_deref().is_none_or(|r| r == sale.region)
            && self.product.as_deref().is_none_or(|p| p == sale.product)
            && self.sales_rep.as_deref().is_none_or(|r| r == sale.sales_rep)
            && self.stage.as_deref().is_none_or(|s| s == sale.stage.to_string())
            && self.start_date.as_deref().is_none_or(|s| date.as_str() >= s)
            && self.end_date.as_deref().is_none_or(|e| date.as_str() <= e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub regions: Vec<&'static str>,
    pub products: Vec<&'static str>,
    pub sales_reps: Vec<&'static str>,
    pub stages: Vec<Stage>,
}

fn quarter_of(date: NaiveDate) -> u32 {
    date.month().div_ceil(3)
}

fn rounded_ratio(numerator: u64, denominator: u64) -> Option<u64> {
    if denominator == 0 {
        return None;
    }
    Some((numerator * 2 + denominator) / (denominator * 2))
}

/// Headline numbers relative to `today`.
pub fn overview(data: &SalesDataset, today: NaiveDate) -> Overview {
    let year = today.year();
    let month = today.month();
    let quarter = quarter_of(today);

    let current_month = data
        .closed_won()
        .filter(|s| s.year == year && s.month == month)
        .collect();
    let current_quarter = data
        .closed_won()
        .filter(|s| s.year == year && s.quarter == quarter)
        .collect();
    let year_to_date = data.closed_won().filter(|s| s.year == year).collect();

    let won: Totals = data.closed_won().collect();
    let total = data.len() as u64;

    Overview {
        total_sales: PeriodTotals {
            current_month,
            current_quarter,
            year_to_date,
        },
        top_metrics: TopMetrics {
            total_opportunities: data.len(),
            average_deal_size: rounded_ratio(won.amount, won.count as u64),
            win_rate: rounded_ratio(won.count as u64 * 100, total),
        },
    }
}

fn group_closed_won<F>(data: &SalesDataset, dimension: &'static str, key: F) -> Vec<GroupTotal>
where
    F: Fn(&Sale) -> &str,
{
    // First-seen order (newest sale first) breaks ties in the stable sort
    let mut groups: Vec<GroupTotal> = Vec::new();
    for sale in data.closed_won() {
        let name = key(sale);
        let index = groups.iter().position(|g| g.key == name).unwrap_or_else(|| {
            groups.push(GroupTotal {
                dimension,
                key: name.to_owned(),
                total_amount: 0,
                count: 0,
            });
            groups.len() - 1
        });
        groups[index].total_amount += sale.amount;
        groups[index].count += 1;
    }

    groups.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));
    groups
}

/// Closed Won totals per region, largest first.
pub fn by_region(data: &SalesDataset) -> Vec<GroupTotal> {
    group_closed_won(data, "region", |s| s.region)
}

/// Closed Won totals per product, largest first.
pub fn by_product(data: &SalesDataset) -> Vec<GroupTotal> {
    group_closed_won(data, "product", |s| s.product)
}

/// Closed Won totals per sales rep, largest first.
pub fn by_rep(data: &SalesDataset) -> Vec<GroupTotal> {
    group_closed_won(data, "salesRep", |s| s.sales_rep)
}

/// Every stage with at least one record, in pipeline order.
pub fn funnel(data: &SalesDataset) -> Vec<FunnelStage> {
    Stage::ALL
        .into_iter()
        .filter_map(|stage| {
            let totals: Totals = data.sales().iter().filter(|s| s.stage == stage).collect();
            (totals.count > 0).then_some(FunnelStage {
                stage,
                count: totals.count,
                total_amount: totals.amount,
            })
        })
        .collect()
}

/// Monthly Closed Won totals, oldest first.
///
/// `months` is read leniently. A positive count keeps that many trailing
/// periods; a negative count drops that many leading ones. Anything else
/// keeps them all.
pub fn trends(data: &SalesDataset, months: Option<&str>) -> Vec<TrendPoint> {
    let mut periods: BTreeMap<String, TrendPoint> = BTreeMap::new();
    for sale in data.closed_won() {
        let period = format!("{}-{:02}", sale.year, sale.month);
        let entry = periods
            .entry(period.clone())
            .or_insert_with(|| TrendPoint {
                period,
                total_amount: 0,
                count: 0,
            });
        entry.total_amount += sale.amount;
        entry.count += 1;
    }

    let points: Vec<_> = periods.into_values().collect();
    let len = points.len();
    let skip = match months.map_or(Some(12), parse_leading_int) {
        Some(n) if n > 0 => len.saturating_sub(usize::try_from(n).unwrap_or(usize::MAX)),
        Some(n) if n < 0 => usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX).min(len),
        _ => 0,
    };
    points.into_iter().skip(skip).collect()
}

/// Records matching `filter`, newest first.
pub fn filter_sales<'a>(data: &'a SalesDataset, filter: &SalesFilter) -> Vec<&'a Sale> {
    data.sales().iter().filter(|s| filter.matches(s)).collect()
}

/// Distinct values available for filtering.
pub fn filter_options(data: &SalesDataset) -> FilterOptions {
    fn sorted_unique(values: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
        let mut values: Vec<_> = values.collect();
        values.sort_unstable();
        values.dedup();
        values
    }

    let mut stages = Vec::new();
    for sale in data.sales() {
        if !stages.contains(&sale.stage) {
            stages.push(sale.stage);
        }
    }

    FilterOptions {
        regions: sorted_unique(data.sales().iter().map(|s| s.region)),
        products: sorted_unique(data.sales().iter().map(|s| s.product)),
        sales_reps: sorted_unique(data.sales().iter().map(|s| s.sales_rep)),
        stages,
    }
}
