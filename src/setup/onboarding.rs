//! Onboarding aggregator
//!
//! Gathers the three onboarding steps (profile, loan details, category
//! selection) and turns them into one validated [`SemesterPlan`]. Raw strings
//! stay raw until `finalize`, which is where parsing and policy decisions
//! happen.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::{LoanAmountPolicy, Settings};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{DefaultCategory, Money, SemesterPlan, StudentProfile};

/// Date layouts tried after the configured one ("August 20, 2024", "2024-08-20")
const FALLBACK_DATE_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d"];

/// One row of the category selection screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelection {
    pub name: String,
    pub icon: String,
    pub amount: Money,
    pub is_selected: bool,
}

impl CategorySelection {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            amount,
            is_selected: true,
        }
    }

    /// Mark the row as unselected; it is kept as an inactive category
    pub fn deselected(mut self) -> Self {
        self.is_selected = false;
        self
    }
}

impl From<DefaultCategory> for CategorySelection {
    fn from(default: DefaultCategory) -> Self {
        Self::new(default.name(), default.icon(), default.suggested_amount())
    }
}

/// The default selection screen: all five defaults, selected
pub fn default_selections() -> Vec<CategorySelection> {
    DefaultCategory::all()
        .iter()
        .copied()
        .map(CategorySelection::from)
        .collect()
}

/// Collects onboarding input until it is finalized into a plan
#[derive(Debug, Clone, Default)]
pub struct OnboardingAggregator {
    profile: StudentProfile,
    loan_amount: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    categories: Option<Vec<CategorySelection>>,
}

impl OnboardingAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step one: profile details, stored as given
    pub fn set_profile(
        &mut self,
        name: impl Into<String>,
        age: impl Into<String>,
        university: impl Into<String>,
    ) -> &mut Self {
        self.profile = StudentProfile {
            name: name.into().trim().to_string(),
            age: age.into().trim().to_string(),
            university: university.into().trim().to_string(),
        };
        self
    }

    /// Step two: the loan amount as typed
    pub fn set_loan_amount(&mut self, raw: impl Into<String>) -> &mut Self {
        self.loan_amount = Some(raw.into());
        self
    }

    /// Step two: semester start and end dates as typed
    pub fn set_semester_dates(
        &mut self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> &mut Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    /// Step three: the category rows
    pub fn select_categories(&mut self, selections: Vec<CategorySelection>) -> &mut Self {
        self.categories = Some(selections);
        self
    }

    pub fn profile(&self) -> &StudentProfile {
        &self.profile
    }

    /// Build the plan from everything collected so far
    pub fn finalize(&self, settings: &Settings) -> BudgetResult<SemesterPlan> {
        let total_loan_amount = self.resolve_loan_amount(settings.loan_amount_policy)?;
        let start_date = self.resolve_date("start date", self.start_date.as_deref(), settings)?;
        let end_date = self.resolve_date("end date", self.end_date.as_deref(), settings)?;

        if end_date <= start_date {
            return Err(BudgetError::Validation(format!(
                "Semester end date {} must be after start date {}",
                end_date, start_date
            )));
        }

        let mut plan = SemesterPlan::new(
            self.profile.clone(),
            total_loan_amount,
            start_date,
            end_date,
        );

        let selections = match &self.categories {
            Some(selections) => selections.clone(),
            None => default_selections(),
        };

        for selection in &selections {
            let name = selection.name.trim();
            if name.is_empty() {
                return Err(BudgetError::Validation("Category name cannot be empty".into()));
            }
            if selection.amount.is_negative() {
                return Err(BudgetError::InvalidAmount(selection.amount));
            }
            if selection.is_selected && plan.active_category_by_name(name).is_some() {
                return Err(BudgetError::DuplicateName(name.to_string()));
            }

            let id = plan
                .push_category(name, selection.icon.trim(), selection.amount)
                .map_err(|e| BudgetError::Validation(e.to_string()))?;
            if let Some(category) = plan.categories.iter_mut().find(|c| c.id == id) {
                category.is_active = selection.is_selected;
                category
                    .validate()
                    .map_err(|e| BudgetError::Validation(e.to_string()))?;
            }
        }

        plan.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        info!(
            loan = %plan.total_loan_amount,
            categories = plan.categories.len(),
            allocated = %plan.total_allocated(),
            "onboarding finalized"
        );

        Ok(plan)
    }

    fn resolve_loan_amount(&self, policy: LoanAmountPolicy) -> BudgetResult<Money> {
        let raw = self
            .loan_amount
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let parsed = match raw {
            Some(raw) => Money::parse(raw).map_err(|e| e.to_string()),
            None => Err("loan amount was not provided".to_string()),
        };

        match (parsed, policy) {
            (Ok(amount), _) if amount.is_negative() => Err(BudgetError::InvalidAmount(amount)),
            (Ok(amount), _) => Ok(amount),
            (Err(reason), LoanAmountPolicy::FallbackTo(fallback)) => {
                warn!(%reason, %fallback, "loan amount unusable, using configured fallback");
                Ok(fallback)
            }
            (Err(reason), LoanAmountPolicy::Reject) => Err(BudgetError::IncompleteInput(reason)),
        }
    }

    fn resolve_date(
        &self,
        field: &str,
        raw: Option<&str>,
        settings: &Settings,
    ) -> BudgetResult<NaiveDate> {
        let raw = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| BudgetError::IncompleteInput(format!("{} was not provided", field)))?;

        parse_date(raw, &settings.date_format).ok_or_else(|| {
            BudgetError::IncompleteInput(format!("could not read {} '{}'", field, raw))
        })
    }
}

/// Parse a date using the configured format, then the common fallbacks
pub fn parse_date(raw: &str, format: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    std::iter::once(format)
        .chain(FALLBACK_DATE_FORMATS.iter().copied())
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}
