//! Mock sales analytics.
//!
//! A randomly generated year of opportunities, held as an immutable
//! snapshot, with read-only aggregations over it. Nothing here touches the
//! Canada Day calculator.

pub mod analytics;
pub mod data;

pub use analytics::{
    FilterOptions, FunnelStage, GroupTotal, Overview, SalesFilter, Totals, TrendPoint, by_product,
    by_region, by_rep, filter_options, filter_sales, funnel, overview, trends,
};
pub use data::{Sale, SalesDataset, Stage};
