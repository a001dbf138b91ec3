//! Full analysis pipeline
//!
//! One call takes raw property and financing inputs through normalization,
//! amortization, yield metrics, the multi-year projection, the sensitivity
//! grid and the requested exit scenarios. The result is a plain data tree;
//! rerunning the same inputs reproduces it bit for bit.

use crate::assumptions::AssumptionOverrides;
use crate::error::{ValidationError, ValidationIssue};
use crate::exit::{ExitCalculator, ExitScenario};
use crate::metrics::{calculate_yields, YieldMetrics};
use crate::mortgage::{amortize, AmortizationSchedule};
use crate::normalize::{AnalysisInput, InputNormalizer};
use crate::projection::{
    ProjectionConfig, ProjectionEngine, ProjectionResult, DEFAULT_HORIZON_YEARS,
    MAX_HORIZON_YEARS,
};
use crate::property::{FinancingInput, PropertyInput};
use crate::sensitivity::{SensitivityAnalyzer, SensitivityResult};
use log::debug;
use serde::{Deserialize, Serialize};

/// Analysis-wide settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Projection length in years, 1 to [`MAX_HORIZON_YEARS`]
    pub horizon_years: u32,

    /// Years to price an exit sale for, each within the horizon
    pub exit_years: Vec<u32>,

    /// Broker and transfer costs on sale, as a fraction of the sale price
    pub selling_cost_rate: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            exit_years: vec![DEFAULT_HORIZON_YEARS],
            selling_cost_rate: 0.02,
        }
    }
}

/// Everything the engine computes for one property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Validated input echo, including every default actually applied
    pub input: AnalysisInput,
    pub config: AnalysisConfig,
    pub metrics: YieldMetrics,
    pub schedule: AmortizationSchedule,
    pub projection: ProjectionResult,
    pub sensitivity: Vec<SensitivityResult>,
    pub exits: Vec<ExitScenario>,
}

/// Stateless orchestrator for the full pipeline
pub struct AnalysisEngine {
    normalizer: InputNormalizer,
    config: AnalysisConfig,
}

impl AnalysisEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            normalizer: InputNormalizer::new(),
            config,
        }
    }

    /// Engine with non-default base assumptions or closing-cost schedule
    pub fn with_normalizer(normalizer: InputNormalizer, config: AnalysisConfig) -> Self {
        Self { normalizer, config }
    }

    /// Run the whole pipeline for one property
    ///
    /// Input and config problems are reported together in a single
    /// [`ValidationError`]; once validation passes, every later stage is
    /// pure arithmetic and cannot fail.
    pub fn analyze(
        &self,
        property: &PropertyInput,
        financing: &FinancingInput,
        overrides: Option<&AssumptionOverrides>,
    ) -> Result<AnalysisResult, ValidationError> {
        let mut config_issues = validate_config(&self.config);
        let input = match self.normalizer.normalize(property, financing, overrides) {
            Ok(input) if config_issues.is_empty() => input,
            Ok(_) => return Err(ValidationError::new(config_issues)),
            Err(error) => {
                let mut issues = error.issues;
                issues.append(&mut config_issues);
                return Err(ValidationError::new(issues));
            }
        };

        let schedule = amortize(
            input.financing.loan_amount,
            input.financing.annual_interest_rate,
            input.financing.loan_term_years,
        );
        let metrics = calculate_yields(&input, &schedule);
        let projection = ProjectionEngine::new(ProjectionConfig {
            horizon_years: self.config.horizon_years,
        })
        .project(&input, &schedule);
        let sensitivity = SensitivityAnalyzer::new().run(&input);

        // Exit years were checked against the horizon above, so every
        // scenario resolves
        let calculator = ExitCalculator::new(self.config.selling_cost_rate);
        let exits = self
            .config
            .exit_years
            .iter()
            .filter_map(|&year| calculator.scenario(&input, &projection, year).ok())
            .collect();

        debug!(
            "analysis complete: horizon {} year(s), {} exit scenario(s)",
            self.config.horizon_years,
            self.config.exit_years.len()
        );

        Ok(AnalysisResult {
            input,
            config: self.config.clone(),
            metrics,
            schedule,
            projection,
            sensitivity,
            exits,
        })
    }
}

fn validate_config(config: &AnalysisConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if config.horizon_years == 0 || config.horizon_years > MAX_HORIZON_YEARS {
        issues.push(ValidationIssue::new(
            "horizon_years",
            format!("must be between 1 and {}", MAX_HORIZON_YEARS),
        ));
    }
    for &year in &config.exit_years {
        if year == 0 || year > config.horizon_years {
            issues.push(ValidationIssue::new(
                "exit_years",
                format!(
                    "exit year {} is outside the horizon 1..={}",
                    year, config.horizon_years
                ),
            ));
        }
    }
    if !config.selling_cost_rate.is_finite()
        || config.selling_cost_rate < 0.0
        || config.selling_cost_rate > 1.0
    {
        issues.push(ValidationIssue::new(
            "selling_cost_rate",
            "must be a fraction between 0 and 1",
        ));
    }

    issues
}

/// One-call analysis with the default configuration
pub fn analyze(
    property: &PropertyInput,
    financing: &FinancingInput,
    overrides: Option<&AssumptionOverrides>,
) -> Result<AnalysisResult, ValidationError> {
    AnalysisEngine::new(AnalysisConfig::default()).analyze(property, financing, overrides)
}
