//! Seller net sheet: estimated cash to the seller at closing.
//!
//! # Breakdown
//!
//! | Line                  | Derivation |
//! |-----------------------|------------|
//! | Listing price         | input |
//! | Mortgage payoff       | input |
//! | Prorated taxes        | yearly taxes × days elapsed / days in year |
//! | Commission            | listing price × rate / 100 |
//! | Transfer / recording  | location rule (zero without a price), or user values when auto is off |
//! | Title company fees    | flat schedule, only when there is a sale price |
//! | HOA, warranty, repairs, misc | input |
//! | Total closing costs   | every deduction except payoff and prorated taxes |
//! | Net proceeds          | price − payoff − prorated − commission − closing costs, floored at 0 |
//!
//! The calculator cannot fail. Every amount is coerced into
//! `0..=MAX_AMOUNT` before use and the result keeps full precision; rounding is left to
//! whoever displays it.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use netsheet_core::calculations::common::round_half_up;
//! use netsheet_core::calculations::{ProceedsInput, compute_breakdown};
//!
//! let input = ProceedsInput {
//!     listing_price: dec!(500000),
//!     mortgage_payoff: dec!(300000),
//!     yearly_property_taxes: dec!(6000),
//!     closing_date: NaiveDate::from_ymd_opt(2025, 6, 30),
//!     commission_rate_percent: dec!(6),
//!     ..ProceedsInput::default()
//! };
//!
//! let breakdown = compute_breakdown(&input);
//!
//! assert_eq!(breakdown.commission_amount, dec!(30000));
//! assert_eq!(breakdown.total_closing_costs, dec!(1475));
//! assert_eq!(round_half_up(breakdown.net_proceeds), dec!(165549.66));
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::common::max;
use crate::calculations::jurisdiction::{
    Location, TitleCompanyFees, TransferTaxes, derive_transfer_and_recording_tax,
};
use crate::calculations::proration::prorate_yearly_amount;
use crate::sanitize::{amount_in_range, percent_in_range};

/// Seller-supplied figures for one estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProceedsInput {
    pub listing_price: Decimal,
    pub mortgage_payoff: Decimal,
    pub yearly_property_taxes: Decimal,
    pub closing_date: Option<NaiveDate>,

    /// Total commission as a percentage of the listing price (0–100).
    pub commission_rate_percent: Decimal,

    pub location: Location,

    /// When true, transfer and recording taxes come from the location rule
    /// (zero without a sale price) and the two fields below are ignored.
    pub use_auto_calculated_taxes: bool,
    pub transfer_tax: Decimal,
    pub recording_tax: Decimal,

    pub hoa_fees: Decimal,
    pub home_warranty_cost: Decimal,
    pub repairs_concessions: Decimal,
    pub misc_closing_costs: Decimal,
}

impl Default for ProceedsInput {
    fn default() -> Self {
        Self {
            listing_price: Decimal::ZERO,
            mortgage_payoff: Decimal::ZERO,
            yearly_property_taxes: Decimal::ZERO,
            closing_date: None,
            commission_rate_percent: Decimal::ZERO,
            location: Location::default(),
            use_auto_calculated_taxes: true,
            transfer_tax: Decimal::ZERO,
            recording_tax: Decimal::ZERO,
            hoa_fees: Decimal::ZERO,
            home_warranty_cost: Decimal::ZERO,
            repairs_concessions: Decimal::ZERO,
            misc_closing_costs: Decimal::ZERO,
        }
    }
}

/// The derived net sheet, shared by the on-screen panel and the exported
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProceedsBreakdown {
    pub listing_price: Decimal,
    pub mortgage_payoff: Decimal,
    pub prorated_property_taxes: Decimal,

    /// The sanitized rate the commission was computed from.
    pub commission_rate_percent: Decimal,
    pub commission_amount: Decimal,

    pub transfer_tax: Decimal,
    pub recording_tax: Decimal,
    pub title_company_fees: Decimal,
    pub hoa_fees: Decimal,
    pub home_warranty_cost: Decimal,
    pub repairs_concessions: Decimal,
    pub misc_closing_costs: Decimal,

    /// Sum of every deduction except mortgage payoff and prorated taxes.
    pub total_closing_costs: Decimal,

    /// Cash to the seller, never below zero.
    pub net_proceeds: Decimal,

    /// Amount the seller would have to bring to closing when deductions
    /// exceed the price; zero otherwise.
    pub shortfall: Decimal,
}

impl ProceedsBreakdown {
    /// Whether the deductions exceed the sale price.
    pub fn is_underwater(&self) -> bool {
        self.shortfall > Decimal::ZERO
    }

    /// The breakdown as an ordered list of display lines: the sale price
    /// followed by every deduction.
    pub fn line_items(&self) -> Vec<LineItem> {
        let deduction = |label: &str, amount: Decimal| LineItem {
            label: label.to_string(),
            amount,
            kind: LineItemKind::Deduction,
        };

        vec![
            LineItem {
                label: "Listing Price".to_string(),
                amount: self.listing_price,
                kind: LineItemKind::SalePrice,
            },
            deduction("Mortgage Payoff", self.mortgage_payoff),
            deduction("Prorated Taxes", self.prorated_property_taxes),
            deduction(
                &format!("Commission ({}%)", self.commission_rate_percent.normalize()),
                self.commission_amount,
            ),
            deduction("Transfer Tax", self.transfer_tax),
            deduction("Recording Tax", self.recording_tax),
            deduction("Title Company Fees", self.title_company_fees),
            deduction("HOA Fees", self.hoa_fees),
            deduction("Home Warranty", self.home_warranty_cost),
            deduction("Repairs/Concessions", self.repairs_concessions),
            deduction("Other Closing Costs", self.misc_closing_costs),
        ]
    }
}

/// Whether a line adds to or subtracts from the seller's proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineItemKind {
    SalePrice,
    Deduction,
}

/// One labelled amount of a net sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: Decimal,
    pub kind: LineItemKind,
}

/// Net sheet calculator for one fee schedule.
#[derive(Debug, Clone, Default)]
pub struct NetSheetCalculator {
    title_fees: TitleCompanyFees,
}

impl NetSheetCalculator {
    pub fn new(title_fees: TitleCompanyFees) -> Self {
        Self { title_fees }
    }

    pub fn title_fees(&self) -> &TitleCompanyFees {
        &self.title_fees
    }

    /// Computes the full breakdown for `input`.
    pub fn calculate(
        &self,
        input: &ProceedsInput,
    ) -> ProceedsBreakdown {
        let listing_price = amount_in_range(input.listing_price);
        let mortgage_payoff = amount_in_range(input.mortgage_payoff);
        let yearly_taxes = amount_in_range(input.yearly_property_taxes);
        let commission_rate = percent_in_range(input.commission_rate_percent);

        let prorated_property_taxes = prorate_yearly_amount(yearly_taxes, input.closing_date);
        let commission_amount = self.commission(listing_price, commission_rate);
        let taxes = self.transfer_and_recording_tax(listing_price, input);
        let title_company_fees = self.title_company_fees(listing_price);

        let hoa_fees = amount_in_range(input.hoa_fees);
        let home_warranty_cost = amount_in_range(input.home_warranty_cost);
        let repairs_concessions = amount_in_range(input.repairs_concessions);
        let misc_closing_costs = amount_in_range(input.misc_closing_costs);

        let total_closing_costs = taxes.transfer_tax
            + taxes.recording_tax
            + title_company_fees
            + hoa_fees
            + home_warranty_cost
            + repairs_concessions
            + misc_closing_costs;

        let raw_net = listing_price
            - mortgage_payoff
            - prorated_property_taxes
            - commission_amount
            - total_closing_costs;

        if raw_net < Decimal::ZERO {
            warn!(
                listing_price = %listing_price,
                raw_net = %raw_net,
                "Deductions exceed listing price; net proceeds floored at zero"
            );
        }

        let breakdown = ProceedsBreakdown {
            listing_price,
            mortgage_payoff,
            prorated_property_taxes,
            commission_rate_percent: commission_rate,
            commission_amount,
            transfer_tax: taxes.transfer_tax,
            recording_tax: taxes.recording_tax,
            title_company_fees,
            hoa_fees,
            home_warranty_cost,
            repairs_concessions,
            misc_closing_costs,
            total_closing_costs,
            net_proceeds: max(raw_net, Decimal::ZERO),
            shortfall: max(-raw_net, Decimal::ZERO),
        };

        debug!(
            net_proceeds = %breakdown.net_proceeds,
            total_closing_costs = %breakdown.total_closing_costs,
            "Computed net sheet"
        );

        breakdown
    }

    fn commission(
        &self,
        listing_price: Decimal,
        rate_percent: Decimal,
    ) -> Decimal {
        listing_price * rate_percent / Decimal::ONE_HUNDRED
    }

    /// Location rule when auto is on, user values otherwise. No sale price
    /// means nothing to record.
    fn transfer_and_recording_tax(
        &self,
        listing_price: Decimal,
        input: &ProceedsInput,
    ) -> TransferTaxes {
        if !input.use_auto_calculated_taxes {
            TransferTaxes {
                transfer_tax: amount_in_range(input.transfer_tax),
                recording_tax: amount_in_range(input.recording_tax),
            }
        } else if listing_price > Decimal::ZERO {
            derive_transfer_and_recording_tax(listing_price, input.location)
        } else {
            TransferTaxes {
                transfer_tax: Decimal::ZERO,
                recording_tax: Decimal::ZERO,
            }
        }
    }

    /// Without a sale price there is no closing to bill for.
    fn title_company_fees(
        &self,
        listing_price: Decimal,
    ) -> Decimal {
        if listing_price > Decimal::ZERO {
            self.title_fees.total()
        } else {
            Decimal::ZERO
        }
    }
}

/// Computes a breakdown with the standard title fee schedule.
pub fn compute_breakdown(input: &ProceedsInput) -> ProceedsBreakdown {
    NetSheetCalculator::default().calculate(input)
}
