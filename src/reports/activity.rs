//! Committee activity report
//!
//! Detail statistics shown in the committee drill-down: most active user,
//! largest movement, per-kind averages, and the most frequent activities
//! with their accumulated amounts.

use std::collections::BTreeMap;

use crate::models::{Money, Movement, MovementKind};

/// How many frequent activities the report keeps
const TOP_ACTIVITIES: usize = 5;

/// One activity with its frequency and accumulated amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityTally {
    /// Activity description
    pub activity: String,
    /// Number of movements with this activity
    pub count: usize,
    /// Sum of the movement amounts for this activity
    pub total: Money,
}

/// Aggregate statistics over one committee's movements
#[derive(Debug, Clone)]
pub struct ActivityReport {
    /// User with the most recorded movements, when user names are present
    pub most_active_user: Option<String>,
    /// Largest single movement amount
    pub largest_amount: Money,
    /// Average income amount (zero when there is no income)
    pub average_income: Money,
    /// Average expense amount (zero when there are no expenses)
    pub average_expense: Money,
    /// Up to five most frequent activities, by descending count
    pub frequent_activities: Vec<ActivityTally>,
}

impl ActivityReport {
    /// Generate the report for a movement collection
    pub fn generate(movements: &[Movement]) -> Self {
        let mut user_counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut activity_tallies: BTreeMap<&str, (usize, Money)> = BTreeMap::new();
        let mut largest_amount = Money::zero();
        let mut income_total = Money::zero();
        let mut income_count = 0usize;
        let mut expense_total = Money::zero();
        let mut expense_count = 0usize;

        for movement in movements {
            if let Some(user) = movement.user_name.as_deref() {
                *user_counts.entry(user).or_insert(0) += 1;
            }

            let tally = activity_tallies
                .entry(movement.activity.as_str())
                .or_insert((0, Money::zero()));
            tally.0 += 1;
            tally.1 += movement.amount;

            if movement.amount > largest_amount {
                largest_amount = movement.amount;
            }

            match movement.kind {
                MovementKind::Income => {
                    income_total += movement.amount;
                    income_count += 1;
                }
                MovementKind::Expense => {
                    expense_total += movement.amount;
                    expense_count += 1;
                }
            }
        }

        // Ties on count resolve to the lexicographically smallest name so
        // the report is deterministic across runs
        let most_active_user = user_counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            .map(|(user, _)| user.to_string());

        let mut frequent_activities: Vec<ActivityTally> = activity_tallies
            .into_iter()
            .map(|(activity, (count, total))| ActivityTally {
                activity: activity.to_string(),
                count,
                total,
            })
            .collect();
        frequent_activities.sort_by(|a, b| b.count.cmp(&a.count).then(a.activity.cmp(&b.activity)));
        frequent_activities.truncate(TOP_ACTIVITIES);

        Self {
            most_active_user,
            largest_amount,
            average_income: average(income_total, income_count),
            average_expense: average(expense_total, expense_count),
            frequent_activities,
        }
    }
}

fn average(total: Money, count: usize) -> Money {
    if count == 0 {
        Money::zero()
    } else {
        Money::from_cents(total.cents() / count as i64)
    }
}
