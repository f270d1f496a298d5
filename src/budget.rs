use crate::models::{BudgetBreakdown, BudgetCategory, BudgetInputs};

impl BudgetInputs {
    /// Applies the same bounds as the sidebar widgets: amounts never below 0,
    /// savings percentage at most 100.
    pub fn clamped(self) -> Self {
        BudgetInputs {
            income: self.income.max(0.0),
            expenses: self.expenses.max(0.0),
            savings_percent: self.savings_percent.min(100),
        }
    }
}

/// Computes the budget breakdown shown in the pie chart.
pub fn compute_budget(inputs: &BudgetInputs) -> BudgetBreakdown {
    BudgetBreakdown {
        income: inputs.income,
        expenses: inputs.expenses,
        savings: f64::from(inputs.savings_percent) / 100.0 * inputs.income,
        remaining: inputs.income - inputs.expenses,
    }
}

impl BudgetBreakdown {
    /// The four chart categories, in display order.
    pub fn categories(&self) -> Vec<BudgetCategory> {
        [
            ("Income", self.income),
            ("Expenses", self.expenses),
            ("Savings", self.savings),
            ("Remaining Budget", self.remaining),
        ]
        .into_iter()
        .map(|(category, amount)| BudgetCategory {
            category: category.to_string(),
            amount,
        })
        .collect()
    }
}
