use serde::Serialize;

/// Months covered by the living-cost estimate shown next to a country.
pub const STUDY_MONTHS: u32 = 24;

/// Monthly cost of living and visa facts for one study destination.
///
/// `total_monthly_living` is an authored figure, not the sum of the breakdown.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryCostData {
    pub country: &'static str,
    pub flag_code: &'static str,
    pub visa_fee: u32,
    pub health_insurance: u32,
    pub avg_rent: u32,
    pub avg_food: u32,
    pub avg_transport: u32,
    pub total_monthly_living: u32,
    pub visa_processing_weeks: &'static str,
    pub work_permit_hours: u32,
    pub post_study_work_visa: &'static str,
    pub currency_note: &'static str,
}

/// Percentage share of each breakdown line within the monthly breakdown total.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExpenseShares {
    pub rent: u32,
    pub food: u32,
    pub transport: u32,
    pub insurance: u32,
}

/// A cost record together with the figures derived from it, as served to clients.
#[derive(Debug, Clone, Serialize)]
pub struct CountryCostView {
    #[serde(flatten)]
    pub data: &'static CountryCostData,
    pub breakdown_total: u32,
    pub expense_shares: ExpenseShares,
    pub two_year_living: u32,
}

impl From<&'static CountryCostData> for CountryCostView {
    fn from(data: &'static CountryCostData) -> Self {
        CountryCostView {
            data,
            breakdown_total: data.breakdown_total(),
            expense_shares: data.expense_shares(),
            two_year_living: data.two_year_living(),
        }
    }
}

impl CountryCostData {
    pub fn breakdown_total(&self) -> u32 {
        self.avg_rent + self.avg_food + self.avg_transport + self.health_insurance
    }

    pub fn two_year_living(&self) -> u32 {
        self.total_monthly_living * STUDY_MONTHS
    }

    pub fn expense_shares(&self) -> ExpenseShares {
        let total = self.breakdown_total();
        let share = |amount: u32| {
            if total == 0 {
                0
            } else {
                (amount as f64 / total as f64 * 100.0).round() as u32
            }
        };
        ExpenseShares {
            rent: share(self.avg_rent),
            food: share(self.avg_food),
            transport: share(self.avg_transport),
            insurance: share(self.health_insurance),
        }
    }
}
