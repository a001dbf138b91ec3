//! Report assembly for the two output tiers
//!
//! The engine always computes the full result; the tier only shapes what is
//! surfaced to the caller. Free gets the headline ratios and a monthly view,
//! premium gets the complete detail.

use crate::analysis::{AnalysisConfig, AnalysisResult};
use crate::exit::ExitScenario;
use crate::metrics::{Metric, MonthlyBreakdown, YieldMetrics};
use crate::mortgage::AmortizationSchedule;
use crate::normalize::AnalysisInput;
use crate::projection::YearlySnapshot;
use crate::sensitivity::SensitivityResult;
use serde::{Deserialize, Serialize};

/// Output tier a caller is entitled to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Premium,
}

/// Headline figures shown to every caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeReport {
    pub gross_yield: Metric,
    pub net_yield: Metric,
    pub cash_on_cash: Metric,
    pub year1_net_cash_flow: f64,
    pub monthly: MonthlyBreakdown,
}

/// Complete detail for premium callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumReport {
    pub headline: FreeReport,
    pub input: AnalysisInput,
    pub config: AnalysisConfig,
    pub metrics: YieldMetrics,
    pub schedule: AmortizationSchedule,
    pub snapshots: Vec<YearlySnapshot>,
    pub break_even_year: Option<u32>,
    pub sensitivity: Vec<SensitivityResult>,
    pub exits: Vec<ExitScenario>,
}

/// Tier-shaped report, tagged for the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "tier", rename_all = "lowercase")]
pub enum Report {
    Free(FreeReport),
    Premium(Box<PremiumReport>),
}

/// Shape one computed result for the requested tier
pub fn assemble(result: &AnalysisResult, tier: Tier) -> Report {
    match tier {
        Tier::Free => Report::Free(headline(result)),
        Tier::Premium => Report::Premium(Box::new(PremiumReport {
            headline: headline(result),
            input: result.input.clone(),
            config: result.config.clone(),
            metrics: result.metrics.clone(),
            schedule: result.schedule.clone(),
            snapshots: result.projection.snapshots.clone(),
            break_even_year: result.projection.break_even_year,
            sensitivity: result.sensitivity.clone(),
            exits: result.exits.clone(),
        })),
    }
}

fn headline(result: &AnalysisResult) -> FreeReport {
    FreeReport {
        gross_yield: result.metrics.gross_yield,
        net_yield: result.metrics.net_yield,
        cash_on_cash: result.metrics.cash_on_cash,
        year1_net_cash_flow: result.metrics.net_cash_flow,
        monthly: result.metrics.monthly_breakdown(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::property::{FinancingInput, PropertyInput};

    fn sample_result() -> AnalysisResult {
        let mut property = PropertyInput::new(1_500_000.0, 120_000.0);
        property.size_sqft = Some(850.0);
        let financing = FinancingInput::new(0.25, 0.045, 25);
        analyze(&property, &financing, None).unwrap()
    }

    #[test]
    fn test_free_tier_hides_the_detail() {
        let report = assemble(&sample_result(), Tier::Free);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["tier"], "free");
        assert!(value.get("schedule").is_none());
        assert!(value.get("sensitivity").is_none());
        assert!(value.get("gross_yield").is_some());
        assert!(value.get("monthly").is_some());
    }

    #[test]
    fn test_premium_tier_carries_everything() {
        let result = sample_result();
        let report = assemble(&result, Tier::Premium);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["tier"], "premium");
        assert_eq!(
            value["schedule"]["rows"].as_array().unwrap().len(),
            result.schedule.rows.len()
        );
        assert_eq!(
            value["snapshots"].as_array().unwrap().len(),
            result.projection.snapshots.len()
        );
        assert_eq!(
            value["sensitivity"].as_array().unwrap().len(),
            result.sensitivity.len()
        );
    }

    #[test]
    fn test_both_tiers_share_the_same_headline() {
        let result = sample_result();

        let free = match assemble(&result, Tier::Free) {
            Report::Free(headline) => headline,
            Report::Premium(_) => unreachable!(),
        };
        let premium = match assemble(&result, Tier::Premium) {
            Report::Premium(full) => full,
            Report::Free(_) => unreachable!(),
        };

        assert_eq!(free.gross_yield, premium.headline.gross_yield);
        assert_eq!(free.cash_on_cash, premium.headline.cash_on_cash);
        assert_eq!(free.year1_net_cash_flow, result.metrics.net_cash_flow);
    }

    #[test]
    fn test_tier_names_on_the_wire() {
        assert_eq!(serde_json::to_string(&Tier::Free).unwrap(), r#""free""#);
        assert_eq!(
            serde_json::from_str::<Tier>(r#""premium""#).unwrap(),
            Tier::Premium
        );
    }
}
