//! Home-improvement return on investment.
//!
//! Estimates how much of a pre-sale improvement's cost comes back in sale
//! price, using industry-average recoup percentages per improvement type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::sanitize::amount_in_range;

/// Typical cost range for an improvement, in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostRange {
    pub min: Decimal,
    pub max: Decimal,
}

/// Improvements the calculator knows an average ROI for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImprovementType {
    KitchenRemodel,
    BathroomRemodel,
    InteriorPaint,
    ExteriorPaint,
    Flooring,
    RoofReplacement,
    Windows,
    DeckAddition,
    Landscaping,
    BasementFinish,
    AtticConversion,
    Siding,
    Hvac,
    Custom,
}

impl ImprovementType {
    pub fn all() -> &'static [ImprovementType] {
        &[
            Self::KitchenRemodel,
            Self::BathroomRemodel,
            Self::InteriorPaint,
            Self::ExteriorPaint,
            Self::Flooring,
            Self::RoofReplacement,
            Self::Windows,
            Self::DeckAddition,
            Self::Landscaping,
            Self::BasementFinish,
            Self::AtticConversion,
            Self::Siding,
            Self::Hvac,
            Self::Custom,
        ]
    }

    /// Stable kebab-case key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::KitchenRemodel => "kitchen-remodel",
            Self::BathroomRemodel => "bathroom-remodel",
            Self::InteriorPaint => "paint-interior",
            Self::ExteriorPaint => "paint-exterior",
            Self::Flooring => "flooring",
            Self::RoofReplacement => "roof-replacement",
            Self::Windows => "windows",
            Self::DeckAddition => "deck-addition",
            Self::Landscaping => "landscaping",
            Self::BasementFinish => "basement-finish",
            Self::AtticConversion => "attic-conversion",
            Self::Siding => "siding",
            Self::Hvac => "hvac",
            Self::Custom => "custom",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim().to_ascii_lowercase();
        Self::all().iter().copied().find(|t| t.key() == key)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::KitchenRemodel => "Kitchen Remodel",
            Self::BathroomRemodel => "Bathroom Remodel",
            Self::InteriorPaint => "Interior Paint",
            Self::ExteriorPaint => "Exterior Paint",
            Self::Flooring => "New Flooring",
            Self::RoofReplacement => "Roof Replacement",
            Self::Windows => "Window Replacement",
            Self::DeckAddition => "Deck Addition",
            Self::Landscaping => "Landscaping",
            Self::BasementFinish => "Basement Finishing",
            Self::AtticConversion => "Attic Conversion",
            Self::Siding => "Siding Replacement",
            Self::Hvac => "HVAC Replacement",
            Self::Custom => "Custom Improvement",
        }
    }

    /// Average percentage of cost recouped at sale. Zero for custom.
    pub fn average_roi_percent(&self) -> Decimal {
        let percent: u32 = match self {
            Self::KitchenRemodel => 60,
            Self::BathroomRemodel => 58,
            Self::InteriorPaint => 107,
            Self::ExteriorPaint => 55,
            Self::Flooring => 70,
            Self::RoofReplacement => 60,
            Self::Windows => 68,
            Self::DeckAddition => 65,
            Self::Landscaping => 100,
            Self::BasementFinish => 70,
            Self::AtticConversion => 56,
            Self::Siding => 75,
            Self::Hvac => 35,
            Self::Custom => 0,
        };
        Decimal::from(percent)
    }

    pub fn cost_range(&self) -> Option<CostRange> {
        let (min, max): (u32, u32) = match self {
            Self::KitchenRemodel => (15_000, 75_000),
            Self::BathroomRemodel => (10_000, 35_000),
            Self::InteriorPaint => (2_000, 8_000),
            Self::ExteriorPaint => (3_000, 12_000),
            Self::Flooring => (5_000, 25_000),
            Self::RoofReplacement => (8_000, 30_000),
            Self::Windows => (8_000, 25_000),
            Self::DeckAddition => (5_000, 20_000),
            Self::Landscaping => (2_000, 15_000),
            Self::BasementFinish => (20_000, 50_000),
            Self::AtticConversion => (30_000, 80_000),
            Self::Siding => (10_000, 30_000),
            Self::Hvac => (5_000, 15_000),
            Self::Custom => return None,
        };
        Some(CostRange {
            min: Decimal::from(min),
            max: Decimal::from(max),
        })
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::KitchenRemodel => "Complete kitchen renovation including cabinets, countertops, appliances, and fixtures. One of the most impactful improvements for home value.",
            Self::BathroomRemodel => "Full bathroom renovation with new fixtures, tile, vanity, and lighting. Essential for modernizing older homes.",
            Self::InteriorPaint => "Fresh interior paint throughout the home. One of the highest ROI improvements - low cost with significant visual impact.",
            Self::ExteriorPaint => "Exterior painting to refresh curb appeal. Important for first impressions and protecting your home's exterior.",
            Self::Flooring => "Replace old carpet, hardwood refinishing, or install new flooring. High impact on buyer perception and home value.",
            Self::RoofReplacement => "Complete roof replacement. Often necessary for sale and provides peace of mind to buyers. Essential maintenance item.",
            Self::Windows => "Energy-efficient window replacement. Improves energy efficiency, reduces utility costs, and enhances curb appeal.",
            Self::DeckAddition => "Add or replace outdoor deck/patio. Expands living space and creates outdoor entertainment area highly valued by buyers.",
            Self::Landscaping => "Professional landscaping and curb appeal improvements. Highest ROI improvement - dramatically improves first impressions.",
            Self::BasementFinish => "Finish unfinished basement to add livable square footage. Significantly increases home value and appeal.",
            Self::AtticConversion => "Convert attic space into livable area. Adds square footage but requires proper permits and structural considerations.",
            Self::Siding => "Replace old or damaged siding. Improves curb appeal, energy efficiency, and reduces maintenance needs.",
            Self::Hvac => "Replace heating and cooling system. Lower ROI but often necessary for sale and provides comfort to buyers.",
            Self::Custom => "Custom improvement not listed above. Enter your own ROI percentage based on your research.",
        }
    }
}

/// Figures for one improvement estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiInput {
    pub improvement_type: Option<ImprovementType>,
    pub improvement_cost: Decimal,
    pub current_home_value: Decimal,
    /// User-supplied ROI percent. Zero means "use the type's average".
    pub expected_roi_percent: Decimal,
}

/// Recommendation tier by effective ROI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    /// 80% and up.
    Excellent,
    /// 60% to 80%.
    Good,
    /// 40% to 60%.
    Moderate,
    Lower,
}

impl Recommendation {
    fn for_roi(roi_percent: Decimal) -> Self {
        if roi_percent >= Decimal::from(80) {
            Self::Excellent
        } else if roi_percent >= Decimal::from(60) {
            Self::Good
        } else if roi_percent >= Decimal::from(40) {
            Self::Moderate
        } else {
            Self::Lower
        }
    }
}

/// Extra caution when the improvement is large relative to the home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HomeValueNote {
    /// More than 15% of the home's value.
    Significant,
    /// More than 10% of the home's value.
    Substantial,
}

/// How the improvement pays back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BreakEven {
    PaysForItself {
        added_value: Decimal,
    },
    PartialRecoup {
        recoup_percent: Decimal,
        recouped: Decimal,
        net_cost: Decimal,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoiResult {
    pub improvement_type: Option<ImprovementType>,
    pub improvement_cost: Decimal,
    pub current_home_value: Decimal,
    /// The ROI actually applied.
    pub roi_percent: Decimal,
    pub value_increase: Decimal,
    /// Negative when the improvement costs more than it adds.
    pub net_gain: Decimal,
    pub is_worth_it: bool,
    pub percent_of_home_value: Decimal,
    pub recommendation: Recommendation,
    pub home_value_note: Option<HomeValueNote>,
    pub break_even: Option<BreakEven>,
}

/// ROI estimator. Stateless; never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoiCalculator;

impl RoiCalculator {
    pub fn calculate(
        &self,
        input: &RoiInput,
    ) -> RoiResult {
        let cost = amount_in_range(input.improvement_cost);
        let home_value = amount_in_range(input.current_home_value);
        let roi_percent = self.effective_roi(input);

        let value_increase = cost * roi_percent / Decimal::ONE_HUNDRED;
        let net_gain = value_increase - cost;
        let percent_of_home_value = self.percent_of_home_value(cost, home_value);

        let result = RoiResult {
            improvement_type: input.improvement_type,
            improvement_cost: cost,
            current_home_value: home_value,
            roi_percent,
            value_increase,
            net_gain,
            is_worth_it: self.is_worth_it(roi_percent, cost, net_gain),
            percent_of_home_value,
            recommendation: Recommendation::for_roi(roi_percent),
            home_value_note: self.home_value_note(percent_of_home_value),
            break_even: self.break_even(roi_percent, cost, value_increase, net_gain),
        };

        debug!(
            roi_percent = %result.roi_percent,
            net_gain = %result.net_gain,
            "Computed improvement ROI"
        );

        result
    }

    /// The user's percent, or the type's average when the user left it at 0.
    fn effective_roi(
        &self,
        input: &RoiInput,
    ) -> Decimal {
        let entered = amount_in_range(input.expected_roi_percent);
        match input.improvement_type {
            Some(kind) if kind != ImprovementType::Custom && entered.is_zero() => {
                kind.average_roi_percent()
            }
            _ => entered,
        }
    }

    /// Profitable, or a high-ROI item that recoups at least 70% of cost.
    fn is_worth_it(
        &self,
        roi_percent: Decimal,
        cost: Decimal,
        net_gain: Decimal,
    ) -> bool {
        let tolerated_loss = -(cost * Decimal::new(3, 1));
        net_gain > Decimal::ZERO || (roi_percent >= Decimal::from(70) && net_gain > tolerated_loss)
    }

    /// Saturates at `Decimal::MAX` when a sub-cent home value would push the
    /// ratio out of range.
    fn percent_of_home_value(
        &self,
        cost: Decimal,
        home_value: Decimal,
    ) -> Decimal {
        if home_value.is_zero() {
            return Decimal::ZERO;
        }
        cost.checked_div(home_value)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::MAX)
    }

    fn home_value_note(
        &self,
        percent_of_home_value: Decimal,
    ) -> Option<HomeValueNote> {
        if percent_of_home_value > Decimal::from(15) {
            Some(HomeValueNote::Significant)
        } else if percent_of_home_value > Decimal::TEN {
            Some(HomeValueNote::Substantial)
        } else {
            None
        }
    }

    fn break_even(
        &self,
        roi_percent: Decimal,
        cost: Decimal,
        value_increase: Decimal,
        net_gain: Decimal,
    ) -> Option<BreakEven> {
        if roi_percent.is_zero() || cost.is_zero() {
            return None;
        }
        if net_gain >= Decimal::ZERO {
            Some(BreakEven::PaysForItself {
                added_value: net_gain,
            })
        } else {
            Some(BreakEven::PartialRecoup {
                recoup_percent: roi_percent,
                recouped: value_increase,
                net_cost: -net_gain,
            })
        }
    }
}
