use crate::models::itinerary::DayPlan;
use crate::models::trip::MIN_DAILY_COST;

/// What normalization did to a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayAdjustment {
    /// Amount added to the dining cost to reach the daily minimum.
    pub raised_by: i64,
    /// Day total before it was scaled down to the cap, if it was.
    pub scaled_from: Option<i64>,
}

impl DayAdjustment {
    pub fn is_unchanged(&self) -> bool {
        self.raised_by == 0 && self.scaled_from.is_none()
    }
}

/// Keeps generated day costs between the daily minimum and an even share of
/// the budget.
#[derive(Debug, Clone, Copy)]
pub struct BudgetNormalizer {
    pub min_daily_cost: i64,
}

impl Default for BudgetNormalizer {
    fn default() -> Self {
        Self {
            min_daily_cost: MIN_DAILY_COST,
        }
    }
}

impl BudgetNormalizer {
    pub fn new(min_daily_cost: i64) -> Self {
        Self { min_daily_cost }
    }

    /// floor(budget / days); zero days yields the whole budget.
    pub fn daily_cap(budget: i64, days: usize) -> i64 {
        if days == 0 {
            return budget;
        }
        budget / days as i64
    }

    /// Normalize one day in place.
    ///
    /// The minimum is applied first and the cap second, so when `cap` is below
    /// the minimum the cap wins and the day ends below the minimum. After a
    /// scale-down `daily_cost` is exactly `cap` while the floored line items
    /// may sum to slightly less.
    pub fn normalize_day(&self, day: &mut DayPlan, cap: i64) -> DayAdjustment {
        let mut adjustment = DayAdjustment::default();
        let mut daily_cost = day.sub_cost_total();

        if daily_cost < self.min_daily_cost {
            let shortfall = self.min_daily_cost - daily_cost;
            day.dining.cost += shortfall;
            adjustment.raised_by = shortfall;
            daily_cost = self.min_daily_cost;
        }

        if daily_cost > cap {
            let cap = cap.max(0);
            day.morning.cost = scale(day.morning.cost, cap, daily_cost);
            day.afternoon.cost = scale(day.afternoon.cost, cap, daily_cost);
            day.evening.cost = scale(day.evening.cost, cap, daily_cost);
            day.dining.cost = scale(day.dining.cost, cap, daily_cost);
            day.hotel.price = scale(day.hotel.price, cap, daily_cost);
            adjustment.scaled_from = Some(daily_cost);
            daily_cost = cap;
        }

        day.daily_cost = daily_cost;
        adjustment
    }

    /// Normalize every day against `budget` and return the new total cost.
    pub fn normalize_days(&self, days: &mut [DayPlan], budget: i64) -> i64 {
        let cap = Self::daily_cap(budget, days.len());

        for day in days.iter_mut() {
            let adjustment = self.normalize_day(day, cap);
            if !adjustment.is_unchanged() {
                log::debug!(
                    "Day {} adjusted: raised by {}, scaled from {:?} to {}",
                    day.day,
                    adjustment.raised_by,
                    adjustment.scaled_from,
                    day.daily_cost
                );
            }
        }

        days.iter().map(|day| day.daily_cost).sum()
    }
}

// floor(cost * cap / total) without going through floats.
fn scale(cost: i64, cap: i64, total: i64) -> i64 {
    if total <= 0 {
        return cost;
    }
    (i128::from(cost) * i128::from(cap) / i128::from(total)) as i64
}
