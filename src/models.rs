use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::charts::ChartSpec;
use crate::market::StockPanel;

/// Sidebar inputs for the monthly budget.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BudgetInputs {
    pub income: f64,
    pub expenses: f64,
    pub savings_percent: u8,
}

impl Default for BudgetInputs {
    fn default() -> Self {
        BudgetInputs {
            income: 5000.0,
            expenses: 3000.0,
            savings_percent: 20,
        }
    }
}

/// Income, expenses, savings and what is left of the budget.
/// Remaining can go negative.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BudgetBreakdown {
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub remaining: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BudgetCategory {
    pub category: String,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GoalInputs {
    pub label: String,
    pub goal_amount: f64,
    pub current_savings: f64,
}

impl Default for GoalInputs {
    fn default() -> Self {
        GoalInputs {
            label: "Save $10,000".to_string(),
            goal_amount: 10000.0,
            current_savings: 2000.0,
        }
    }
}

/// Progress towards a goal in percent, unbounded above.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub label: String,
    pub percent: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StockQuery {
    pub symbol: String,
}

impl Default for StockQuery {
    fn default() -> Self {
        StockQuery {
            symbol: "AAPL".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Daily closing prices, oldest first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StockSeries {
    pub symbol: String,
    pub points: Vec<PricePoint>,
}

/// Query string of a dashboard render. Missing fields take the sidebar defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DashboardParams {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub income: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub expenses: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub savings_percent: Option<f64>,
    pub symbol: Option<String>,
    pub goal: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub goal_amount: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub current_savings: Option<f64>,
}

// A cleared number field is submitted as `name=`
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map(Some).map_err(de::Error::custom)
        }
        _ => Ok(None),
    }
}

// The slider only yields whole numbers in 0..=100. NaN lands on 0.
fn slider_percent(raw: f64) -> u8 {
    raw.clamp(0.0, 100.0).round() as u8
}

impl DashboardParams {
    pub fn budget(&self) -> BudgetInputs {
        let defaults = BudgetInputs::default();
        BudgetInputs {
            income: self.income.unwrap_or(defaults.income),
            expenses: self.expenses.unwrap_or(defaults.expenses),
            savings_percent: self
                .savings_percent
                .map(slider_percent)
                .unwrap_or(defaults.savings_percent),
        }
        .clamped()
    }

    pub fn stock(&self) -> StockQuery {
        match &self.symbol {
            Some(symbol) => StockQuery {
                symbol: symbol.trim().to_string(),
            },
            None => StockQuery::default(),
        }
    }

    pub fn goal(&self) -> GoalInputs {
        let defaults = GoalInputs::default();
        GoalInputs {
            label: self.goal.clone().unwrap_or(defaults.label),
            goal_amount: self.goal_amount.unwrap_or(defaults.goal_amount),
            current_savings: self.current_savings.unwrap_or(defaults.current_savings),
        }
        .clamped()
    }
}

/// Everything one render pass produces.
#[derive(Serialize, Debug, Clone)]
pub struct Dashboard {
    pub budget_inputs: BudgetInputs,
    pub budget: BudgetBreakdown,
    pub budget_chart: ChartSpec,
    pub goal_inputs: GoalInputs,
    pub symbol: String,
    pub stock: StockPanel,
    pub goal: GoalProgress,
    pub goal_bar: f64,
    pub goal_status: String,
    pub tip: String,
}
