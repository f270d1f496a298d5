use serde::Serialize;

use crate::models::{BudgetBreakdown, StockSeries};

/// Plotly's qualitative "Pastel" palette.
pub const PASTEL: [&str; 11] = [
    "rgb(102, 197, 204)",
    "rgb(246, 207, 113)",
    "rgb(248, 156, 116)",
    "rgb(220, 176, 242)",
    "rgb(135, 197, 95)",
    "rgb(158, 185, 243)",
    "rgb(254, 136, 177)",
    "rgb(201, 219, 116)",
    "rgb(139, 224, 164)",
    "rgb(180, 151, 231)",
    "rgb(179, 179, 179)",
];

/// A chart ready for `Plotly.newPlot(el, spec.data, spec.layout)`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie {
        labels: Vec<String>,
        values: Vec<f64>,
        marker: PieMarker,
    },
    Scatter {
        x: Vec<String>,
        y: Vec<f64>,
        mode: String,
        name: String,
    },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PieMarker {
    pub colors: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Title {
    pub text: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Axis {
    pub title: Title,
}

fn title(text: impl Into<String>) -> Title {
    Title { text: text.into() }
}

pub fn budget_pie(budget: &BudgetBreakdown) -> ChartSpec {
    let categories = budget.categories();
    let colors = PASTEL
        .iter()
        .cycle()
        .take(categories.len())
        .map(|c| c.to_string())
        .collect();

    ChartSpec {
        data: vec![Trace::Pie {
            labels: categories.iter().map(|c| c.category.clone()).collect(),
            values: categories.iter().map(|c| c.amount).collect(),
            marker: PieMarker { colors },
        }],
        layout: Layout {
            title: title("💰 Budget Distribution"),
            xaxis: None,
            yaxis: None,
        },
    }
}

pub fn price_line(series: &StockSeries) -> ChartSpec {
    ChartSpec {
        data: vec![Trace::Scatter {
            x: series
                .points
                .iter()
                .map(|p| p.date.format("%Y-%m-%d").to_string())
                .collect(),
            y: series.points.iter().map(|p| p.close).collect(),
            mode: "lines+markers".to_string(),
            name: "Close".to_string(),
        }],
        layout: Layout {
            title: title(format!("📉 {} Stock Price Trend", series.symbol)),
            xaxis: Some(Axis {
                title: title("Date"),
            }),
            yaxis: Some(Axis {
                title: title("Close"),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::compute_budget;
    use crate::models::{BudgetInputs, PricePoint};
    use chrono::NaiveDate;

    #[test]
    fn pie_carries_breakdown() {
        let chart = budget_pie(&compute_budget(&BudgetInputs::default()));
        let json = serde_json::to_value(&chart).unwrap();

        assert_eq!(json["data"][0]["type"], "pie");
        assert_eq!(
            json["data"][0]["values"],
            serde_json::json!([5000.0, 3000.0, 1000.0, 2000.0])
        );
        assert_eq!(json["data"][0]["marker"]["colors"][0], PASTEL[0]);
        assert_eq!(json["layout"]["title"]["text"], "💰 Budget Distribution");
        assert!(json["layout"].get("xaxis").is_none());
    }

    #[test]
    fn line_uses_dates_and_closes() {
        let series = StockSeries {
            symbol: "MSFT".to_string(),
            points: vec![
                PricePoint {
                    date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                    close: 410.5,
                },
                PricePoint {
                    date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
                    close: 412.25,
                },
            ],
        };
        let json = serde_json::to_value(price_line(&series)).unwrap();

        assert_eq!(json["data"][0]["type"], "scatter");
        assert_eq!(json["data"][0]["mode"], "lines+markers");
        assert_eq!(
            json["data"][0]["x"],
            serde_json::json!(["2024-03-01", "2024-03-04"])
        );
        assert_eq!(json["data"][0]["y"], serde_json::json!([410.5, 412.25]));
        assert_eq!(json["layout"]["title"]["text"], "📉 MSFT Stock Price Trend");
    }
}
