use crate::budget::compute_budget;
use crate::charts::budget_pie;
use crate::goals::compute_progress;
use crate::market::{load_stock_panel, PriceHistorySource, StockPanel};
use crate::models::{Dashboard, DashboardParams};
use crate::quotes::random_quote;

pub const HEADER_IMAGE: &str = "https://i.gifer.com/J4o.gif";
pub const FOOTER_IMAGE: &str =
    "https://i2.wp.com/frugaling.org/wp-content/uploads/2013/11/giphy-3.gif?resize=500%2C274";

/// Runs one full render pass: budget, stock, goal, tip.
pub async fn render_dashboard(
    source: &dyn PriceHistorySource,
    params: &DashboardParams,
) -> Dashboard {
    let budget_inputs = params.budget();
    let budget = compute_budget(&budget_inputs);
    let budget_chart = budget_pie(&budget);

    let symbol = params.stock().symbol;
    let stock = load_stock_panel(source, &symbol).await;

    let goal_inputs = params.goal();
    let goal = compute_progress(&goal_inputs);

    Dashboard {
        budget_inputs,
        budget,
        budget_chart,
        goal_inputs,
        symbol,
        stock,
        goal_bar: goal.bar_fraction(),
        goal_status: goal.status_line(),
        goal,
        tip: random_quote().to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON embedded in a <script> block must not be able to close it.
fn script_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

/// Renders the dashboard as a standalone HTML page. Charts are drawn by Plotly.js.
pub fn render_html(dashboard: &Dashboard) -> String {
    let goal_inputs = &dashboard.goal_inputs;
    let inputs = &dashboard.budget_inputs;

    let stock_section = match &dashboard.stock {
        StockPanel::Chart { chart, .. } => format!(
            r#"<div id="stock-chart" class="chart"></div>
<script>Plotly.newPlot("stock-chart", {chart}.data, {chart}.layout, {{responsive: true}});</script>"#,
            chart = script_json(chart)
        ),
        StockPanel::Unavailable { message } => {
            format!(r#"<div class="error">{}</div>"#, escape(message))
        }
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>💰 Ultimate Financial Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
body {{ font-family: sans-serif; margin: 0; display: flex; }}
aside {{ width: 280px; padding: 1rem; background: #f0f2f6; min-height: 100vh; }}
main {{ flex: 1; padding: 1rem 2rem; }}
label {{ display: block; margin-top: 0.75rem; }}
input {{ width: 100%; }}
img {{ width: 100%; }}
.chart {{ width: 100%; height: 450px; }}
.error {{ background: #ffe6e6; color: #a00; padding: 0.75rem; border-radius: 4px; }}
progress {{ width: 100%; height: 1.2rem; }}
</style>
</head>
<body>
<aside>
<form method="get" action="/">
<h2>💡 Financial Overview</h2>
<label>Monthly Income 💵 <input type="number" name="income" min="0" step="any" value="{income}"></label>
<label>Monthly Expenses 🛍️ <input type="number" name="expenses" min="0" step="any" value="{expenses}"></label>
<label>💰 Savings Goal (%) <input type="range" name="savings_percent" min="0" max="100" value="{savings_percent}"></label>
<h2>📈 Investment Portfolio</h2>
<label>Enter Stock Symbol (e.g. AAPL) 📊 <input type="text" name="symbol" value="{symbol}"></label>
<h2>🎯 Financial Goals</h2>
<label>Set Your Financial Goal (e.g., Buy a Car, Save $10,000) 🚗 <input type="text" name="goal" value="{goal_label}"></label>
<label>Goal Amount ($) 🎯 <input type="number" name="goal_amount" min="0" step="any" value="{goal_amount}"></label>
<label>Current Savings ($) 💰 <input type="number" name="current_savings" min="0" step="any" value="{current_savings}"></label>
<p><button type="submit">Update</button></p>
</form>
</aside>
<main>
<h1>💰 Ultimate Financial Dashboard 📊</h1>
<p>🔥 Track your money, investments, and goals all in one place! 🚀</p>
<img src="{header_image}" alt="">
<h2>📊 Budget Summary</h2>
<div id="budget-chart" class="chart"></div>
<script>Plotly.newPlot("budget-chart", {budget_chart}.data, {budget_chart}.layout, {{responsive: true}});</script>
<h2>📈 Live Stock Market Data</h2>
{stock_section}
<h2>🎯 Financial Goals</h2>
<progress max="1" value="{goal_bar}"></progress>
<h3>{goal_status}</h3>
<h2>💡 Finance Tip of the Day 🎭</h2>
<p>{tip}</p>
<img src="{footer_image}" alt="">
<p>🔥 <em>Stay financially fit and reach your money goals!</em> 🚀💰</p>
</main>
</body>
</html>
"#,
        income = inputs.income,
        expenses = inputs.expenses,
        savings_percent = inputs.savings_percent,
        symbol = escape(&dashboard.symbol),
        goal_label = escape(&goal_inputs.label),
        goal_amount = goal_inputs.goal_amount,
        current_savings = goal_inputs.current_savings,
        header_image = escape(HEADER_IMAGE),
        budget_chart = script_json(&dashboard.budget_chart),
        stock_section = stock_section,
        goal_bar = dashboard.goal_bar,
        goal_status = escape(&dashboard.goal_status),
        tip = escape(&dashboard.tip),
        footer_image = escape(FOOTER_IMAGE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::{FetchError, INVALID_SYMBOL_MESSAGE};
    use crate::models::{PricePoint, StockSeries};
    use crate::quotes::FINANCE_QUOTES;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct Fixed;

    #[async_trait]
    impl PriceHistorySource for Fixed {
        async fn fetch_month(&self, symbol: &str) -> Result<StockSeries, FetchError> {
            if symbol != "AAPL" {
                return Err(FetchError::Http(404));
            }
            Ok(StockSeries {
                symbol: symbol.to_string(),
                points: vec![PricePoint {
                    date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                    close: 179.66,
                }],
            })
        }
    }

    #[tokio::test]
    async fn defaults_render_full_dashboard() {
        let params = DashboardParams::default();
        let dashboard = render_dashboard(&Fixed, &params).await;

        assert_eq!(dashboard.budget.savings, 1000.0);
        assert_eq!(dashboard.budget.remaining, 2000.0);
        assert_eq!(dashboard.symbol, "AAPL");
        assert!(matches!(dashboard.stock, StockPanel::Chart { .. }));
        assert_eq!(dashboard.goal.percent, 20.0);
        assert_eq!(dashboard.goal_status, "🚀 Progress: 20.00% towards Save $10,000");
        assert!(FINANCE_QUOTES.contains(&dashboard.tip.as_str()));

        let html = render_html(&dashboard);
        assert!(html.contains(r#"id="stock-chart""#));
        assert!(html.contains(HEADER_IMAGE));
        assert!(html.contains("Save $10,000"));
    }

    #[tokio::test]
    async fn unknown_symbol_shows_warning_and_no_chart() {
        let params = DashboardParams {
            symbol: Some("NOPE".to_string()),
            ..Default::default()
        };
        let dashboard = render_dashboard(&Fixed, &params).await;

        let html = render_html(&dashboard);
        assert!(html.contains(INVALID_SYMBOL_MESSAGE));
        assert!(!html.contains(r#"id="stock-chart""#));
        // the rest of the page still renders
        assert!(html.contains(r#"id="budget-chart""#));
    }

    #[tokio::test]
    async fn user_text_is_escaped() {
        let params = DashboardParams {
            goal: Some("<script>alert(1)</script>".to_string()),
            ..Default::default()
        };
        let dashboard = render_dashboard(&Fixed, &params).await;
        let html = render_html(&dashboard);

        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[tokio::test]
    async fn form_echoes_the_inputs_used_for_the_pass() {
        let params = DashboardParams {
            goal_amount: Some(-50.0),
            current_savings: Some(750.0),
            ..Default::default()
        };
        let dashboard = render_dashboard(&Fixed, &params).await;
        assert_eq!(dashboard.goal_inputs.goal_amount, 0.0);

        let html = render_html(&dashboard);
        assert!(html.contains(r#"name="goal_amount" min="0" step="any" value="0""#));
        assert!(html.contains(r#"name="current_savings" min="0" step="any" value="750""#));
    }

    #[test]
    fn script_json_cannot_close_the_tag() {
        assert_eq!(script_json(&"</script>"), r#""<\/script>""#);
    }
}
