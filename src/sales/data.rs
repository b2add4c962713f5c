use chrono::{Datelike, Months, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

pub const REGIONS: [&str; 5] = [
    "North America",
    "Europe",
    "Asia Pacific",
    "Latin America",
    "Middle East & Africa",
];

pub const PRODUCTS: [&str; 5] = [
    "Enterprise Software",
    "Cloud Services",
    "Mobile Solutions",
    "Analytics Platform",
    "Security Suite",
];

pub const SALES_REPS: [&str; 10] = [
    "John Smith",
    "Sarah Johnson",
    "Michael Brown",
    "Emily Davis",
    "David Wilson",
    "Lisa Anderson",
    "Robert Taylor",
    "Jennifer Martinez",
    "William Garcia",
    "Amanda Thompson",
];

/// Months of history generated, counting the current month
pub const HISTORY_MONTHS: u32 = 12;

/// Pipeline stage of a sale, in funnel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Stage {
    Prospecting,
    Qualified,
    Proposal,
    Negotiation,
    #[display(fmt = "Closed Won")]
    #[serde(rename = "Closed Won")]
    ClosedWon,
    #[display(fmt = "Closed Lost")]
    #[serde(rename = "Closed Lost")]
    ClosedLost,
}

impl Stage {
    /// All stages in funnel order
    pub const ALL: [Self; 6] = [
        Self::Prospecting,
        Self::Qualified,
        Self::Proposal,
        Self::Negotiation,
        Self::ClosedWon,
        Self::ClosedLost,
    ];
}

/// One mock sales opportunity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub date: NaiveDate,
    pub region: &'static str,
    pub product: &'static str,
    pub sales_rep: &'static str,
    pub amount: u64,
    pub stage: Stage,
    pub quarter: u32,
    pub month: u32,
    pub year: i32,
}

impl Sale {
    pub const fn is_closed_won(&self) -> bool {
        matches!(self.stage, Stage::ClosedWon)
    }
}

/// Immutable snapshot of generated sales, newest first.
#[derive(Debug, Clone, Default)]
pub struct SalesDataset {
    sales: Vec<Sale>,
}

impl SalesDataset {
    /// Wraps existing records, sorting them newest first.
    pub fn from_sales(mut sales: Vec<Sale>) -> Self {
        sales.sort_by(|a, b| b.date.cmp(&a.date));
        Self { sales }
    }

    /// Generates a year of mock history ending in the month of `today`.
    pub fn generate<R: Rng>(rng: &mut R, today: NaiveDate) -> Self {
        let first_of_month = today.with_day(1).unwrap_or(today);
        let mut sales = Vec::new();

        for back in 0..HISTORY_MONTHS {
            let Some(month_start) = first_of_month.checked_sub_months(Months::new(back)) else {
                continue;
            };

            for (region_index, &region) in REGIONS.iter().enumerate() {
                for (product_index, &product) in PRODUCTS.iter().enumerate() {
                    let transactions = rng.random_range(5..25);
                    for i in 0..transactions {
                        let day = rng.random_range(1..=28);
                        let date = month_start.with_day(day).unwrap_or(month_start);
                        sales.push(Sale {
                            id: format!(
                                "{}{}{region_index}{product_index}{i}",
                                month_start.year(),
                                month_start.month0()
                            ),
                            date,
                            region,
                            product,
                            sales_rep: SALES_REPS[rng.random_range(0..SALES_REPS.len())],
                            amount: rng.random_range(10_000..110_000),
                            stage: Stage::ALL[rng.random_range(0..Stage::ALL.len())],
                            quarter: date.month().div_ceil(3),
                            month: date.month(),
                            year: date.year(),
                        });
                    }
                }
            }
        }

        Self::from_sales(sales)
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }

    pub fn closed_won(&self) -> impl Iterator<Item = &Sale> {
        self.sales.iter().filter(|sale| sale.is_closed_won())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 17).unwrap()
    }

    fn dataset(seed: u64) -> SalesDataset {
        SalesDataset::generate(&mut StdRng::seed_from_u64(seed), today())
    }

    #[test]
    fn test_generated_volume_is_bounded() {
        let data = dataset(7);
        let cells = (HISTORY_MONTHS as usize) * REGIONS.len() * PRODUCTS.len();
        assert!(data.len() >= cells * 5);
        assert!(data.len() <= cells * 24);
    }

    #[test]
    fn test_sorted_newest_first() {
        let data = dataset(1);
        assert!(data.sales().windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_records_are_consistent() {
        let earliest = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let latest = NaiveDate::from_ymd_opt(2025, 3, 28).unwrap();

        for sale in dataset(3).sales() {
            assert!(sale.date >= earliest && sale.date <= latest, "{}", sale.date);
            assert!(sale.date.day() <= 28);
            assert!((10_000..110_000).contains(&sale.amount));
            assert_eq!(sale.month, sale.date.month());
            assert_eq!(sale.year, sale.date.year());
            assert_eq!(sale.quarter, (sale.month + 2) / 3);
            assert!(SALES_REPS.contains(&sale.sales_rep));
        }
    }

    #[test]
    fn test_same_seed_same_data() {
        assert_eq!(dataset(42).sales(), dataset(42).sales());
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::ClosedWon.to_string(), "Closed Won");
        assert_eq!(Stage::Prospecting.to_string(), "Prospecting");
        assert_eq!(
            serde_json::to_string(&Stage::ClosedWon).unwrap(),
            "\"Closed Won\""
        );
    }

    #[test]
    fn test_sale_serialization() {
        let data = dataset(5);
        let json = serde_json::to_value(&data.sales()[0]).unwrap();
        for key in [
            "id", "date", "region", "product", "salesRep", "amount", "stage", "quarter", "month",
            "year",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["date"].as_str().unwrap().len(), 10);
    }
}
