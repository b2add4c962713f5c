mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::Value;

use common::get;

fn amounts(rows: &Value) -> Vec<u64> {
    rows.as_array()
        .into_iter()
        .flatten()
        .filter_map(|row| row["totalAmount"].as_u64())
        .collect()
}

#[tokio::test]
async fn test_overview() -> Result<()> {
    let (status, body) = get("/api/sales/overview").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    let metrics = &body["data"]["topMetrics"];
    assert!(metrics["totalOpportunities"].as_u64().unwrap_or_default() >= 1500);
    assert!(metrics["winRate"].as_u64().unwrap_or(101) <= 100);
    assert!(body["data"]["totalSales"]["yearToDate"]["count"].is_u64());
    Ok(())
}

#[tokio::test]
async fn test_groupings_sorted_descending() -> Result<()> {
    for (uri, key, expected_len) in [
        ("/api/sales/regions", "region", 5),
        ("/api/sales/products", "product", 5),
        ("/api/sales/reps", "salesRep", 10),
    ] {
        let (status, body) = get(uri).await?;
        assert_eq!(status, StatusCode::OK, "{uri}");

        let rows = body["data"].as_array().cloned().unwrap_or_default();
        assert_eq!(rows.len(), expected_len, "{uri}");
        assert!(rows.iter().all(|row| row[key].is_string()), "{uri}");

        let totals = amounts(&body["data"]);
        assert!(totals.windows(2).all(|w| w[0] >= w[1]), "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn test_funnel_in_pipeline_order() -> Result<()> {
    let (_, body) = get("/api/sales/funnel").await?;

    let stages: Vec<_> = body["data"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|row| row["stage"].as_str())
        .collect();
    assert_eq!(
        stages,
        [
            "Prospecting",
            "Qualified",
            "Proposal",
            "Negotiation",
            "Closed Won",
            "Closed Lost"
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_trends_window() -> Result<()> {
    let (_, all) = get("/api/sales/trends").await?;
    let (_, three) = get("/api/sales/trends?months=3").await?;

    let all = all["data"].as_array().cloned().unwrap_or_default();
    let three = three["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(all.len(), 12);
    assert_eq!(three.len(), 3);
    assert_eq!(three[..], all[9..]);
    Ok(())
}

#[tokio::test]
async fn test_filtered_data() -> Result<()> {
    let (status, body) = get("/api/sales/data?region=Europe&stage=Closed%20Won").await?;

    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(body["totalRecords"].as_u64(), Some(rows.len() as u64));
    assert!(!rows.is_empty());
    assert!(
        rows.iter()
            .all(|row| row["region"] == "Europe" && row["stage"] == "Closed Won")
    );
    assert_eq!(body["filters"]["region"], "Europe");
    assert!(body["filters"].get("product").is_none());
    Ok(())
}

#[tokio::test]
async fn test_filter_options() -> Result<()> {
    let (_, body) = get("/api/sales/filters").await?;

    let regions: Vec<_> = body["data"]["regions"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(
        regions,
        [
            "Asia Pacific",
            "Europe",
            "Latin America",
            "Middle East & Africa",
            "North America"
        ]
    );
    assert_eq!(body["data"]["stages"].as_array().map(Vec::len), Some(6));
    Ok(())
}
