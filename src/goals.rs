use crate::models::{GoalInputs, GoalProgress};

impl GoalInputs {
    /// Amounts never go below 0, matching the number inputs.
    pub fn clamped(self) -> Self {
        GoalInputs {
            goal_amount: self.goal_amount.max(0.0),
            current_savings: self.current_savings.max(0.0),
            ..self
        }
    }
}

/// Percentage of the goal already saved.
///
/// Plain `f64` division: nothing is clamped, so over-achievement shows up as
/// more than 100%. A goal amount of 0 gives `inf`, or `NaN` when nothing is saved.
pub fn compute_progress(inputs: &GoalInputs) -> GoalProgress {
    GoalProgress {
        label: inputs.label.clone(),
        percent: inputs.current_savings / inputs.goal_amount * 100.0,
    }
}

impl GoalProgress {
    /// Fill level for the progress bar, in `[0, 1]`.
    pub fn bar_fraction(&self) -> f64 {
        if self.percent.is_nan() {
            return 0.0;
        }
        (self.percent / 100.0).clamp(0.0, 1.0)
    }

    pub fn status_line(&self) -> String {
        format!("🚀 Progress: {:.2}% towards {}", self.percent, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(goal_amount: f64, current_savings: f64) -> GoalInputs {
        GoalInputs {
            label: "Buy a Car".to_string(),
            goal_amount,
            current_savings,
        }
    }

    #[test]
    fn twenty_percent_of_default_goal() {
        let progress = compute_progress(&goal(10000.0, 2000.0));
        assert_eq!(progress.percent, 20.0);
        assert_eq!(progress.status_line(), "🚀 Progress: 20.00% towards Buy a Car");
        assert_eq!(progress.bar_fraction(), 0.2);
    }

    #[test]
    fn over_achievement_is_not_clamped() {
        let progress = compute_progress(&goal(10000.0, 20000.0));
        assert_eq!(progress.percent, 200.0);
        assert_eq!(progress.bar_fraction(), 1.0);
        assert!(progress.status_line().contains("200.00%"));
    }

    #[test]
    fn zero_goal_with_savings_is_infinite() {
        let progress = compute_progress(&goal(0.0, 500.0));
        assert!(progress.percent.is_infinite());
        assert!(progress.percent.is_sign_positive());
        assert_eq!(progress.bar_fraction(), 1.0);
        assert!(progress.status_line().contains("inf%"));
    }

    #[test]
    fn zero_goal_and_zero_savings_is_nan() {
        let progress = compute_progress(&goal(0.0, 0.0));
        assert!(progress.percent.is_nan());
        assert_eq!(progress.bar_fraction(), 0.0);
        assert!(progress.status_line().contains("NaN%"));
    }

    #[test]
    fn nothing_saved_yet() {
        let progress = compute_progress(&goal(10000.0, 0.0));
        assert_eq!(progress.percent, 0.0);
        assert_eq!(progress.bar_fraction(), 0.0);
    }

    #[test]
    fn clamped_raises_negative_amounts() {
        let inputs = goal(-5.0, -1.0).clamped();
        assert_eq!(inputs.goal_amount, 0.0);
        assert_eq!(inputs.current_savings, 0.0);
        assert_eq!(inputs.label, "Buy a Car");
    }
}
