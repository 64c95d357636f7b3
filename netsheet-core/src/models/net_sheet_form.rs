use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::{Location, ProceedsInput};
use crate::sanitize::{
    AmountError, parse_amount, parse_date, parse_date_strict, parse_percent, sanitize_amount,
    sanitize_percent,
};

/// A net sheet field the strict conversion refused.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid {field}: {source}")]
pub struct InvalidField {
    pub field: &'static str,
    pub source: AmountError,
}

/// Net sheet fields exactly as the seller typed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetSheetForm {
    pub listing_price: String,
    pub mortgage_payoff: String,
    pub yearly_property_taxes: String,
    /// `YYYY-MM-DD`, or empty.
    pub closing_date: String,
    pub commission_rate: String,
    pub location: Location,
    pub use_auto_calculated_taxes: bool,
    pub transfer_tax: String,
    pub recording_tax: String,
    pub hoa_fees: String,
    pub home_warranty: String,
    pub repairs_concessions: String,
    pub misc_closing_costs: String,
}

impl Default for NetSheetForm {
    fn default() -> Self {
        Self {
            listing_price: String::new(),
            mortgage_payoff: String::new(),
            yearly_property_taxes: String::new(),
            closing_date: String::new(),
            commission_rate: "6".to_string(),
            location: Location::default(),
            use_auto_calculated_taxes: true,
            transfer_tax: String::new(),
            recording_tax: String::new(),
            hoa_fees: String::new(),
            home_warranty: String::new(),
            repairs_concessions: String::new(),
            misc_closing_costs: String::new(),
        }
    }
}

impl NetSheetForm {
    /// Sanitizes every field into a calculator input.
    ///
    /// Unusable text becomes zero (or no date) rather than an error.
    pub fn to_input(&self) -> ProceedsInput {
        ProceedsInput {
            listing_price: sanitize_amount(&self.listing_price),
            mortgage_payoff: sanitize_amount(&self.mortgage_payoff),
            yearly_property_taxes: sanitize_amount(&self.yearly_property_taxes),
            closing_date: parse_date(&self.closing_date),
            commission_rate_percent: sanitize_percent(&self.commission_rate),
            location: self.location,
            use_auto_calculated_taxes: self.use_auto_calculated_taxes,
            transfer_tax: sanitize_amount(&self.transfer_tax),
            recording_tax: sanitize_amount(&self.recording_tax),
            hoa_fees: sanitize_amount(&self.hoa_fees),
            home_warranty_cost: sanitize_amount(&self.home_warranty),
            repairs_concessions: sanitize_amount(&self.repairs_concessions),
            misc_closing_costs: sanitize_amount(&self.misc_closing_costs),
        }
    }

    /// Converts every field, rejecting anything [`NetSheetForm::to_input`]
    /// would coerce. The first offending field is reported.
    pub fn to_input_strict(&self) -> Result<ProceedsInput, InvalidField> {
        let amount = |field: &'static str, text: &str| {
            parse_amount(text).map_err(|source| InvalidField { field, source })
        };

        Ok(ProceedsInput {
            listing_price: amount("listing_price", &self.listing_price)?,
            mortgage_payoff: amount("mortgage_payoff", &self.mortgage_payoff)?,
            yearly_property_taxes: amount("yearly_property_taxes", &self.yearly_property_taxes)?,
            closing_date: parse_date_strict(&self.closing_date).map_err(|source| {
                InvalidField {
                    field: "closing_date",
                    source,
                }
            })?,
            commission_rate_percent: parse_percent(&self.commission_rate).map_err(|source| {
                InvalidField {
                    field: "commission_rate",
                    source,
                }
            })?,
            location: self.location,
            use_auto_calculated_taxes: self.use_auto_calculated_taxes,
            transfer_tax: amount("transfer_tax", &self.transfer_tax)?,
            recording_tax: amount("recording_tax", &self.recording_tax)?,
            hoa_fees: amount("hoa_fees", &self.hoa_fees)?,
            home_warranty_cost: amount("home_warranty", &self.home_warranty)?,
            repairs_concessions: amount("repairs_concessions", &self.repairs_concessions)?,
            misc_closing_costs: amount("misc_closing_costs", &self.misc_closing_costs)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::compute_breakdown;

    #[test]
    fn default_form_has_six_percent_commission() {
        let input = NetSheetForm::default().to_input();

        assert_eq!(input.commission_rate_percent, dec!(6));
        assert_eq!(input.listing_price, Decimal::ZERO);
        assert!(input.use_auto_calculated_taxes);
    }

    #[test]
    fn to_input_sanitizes_formatted_text() {
        let form = NetSheetForm {
            listing_price: "$500,000".to_string(),
            mortgage_payoff: " 300,000 ".to_string(),
            yearly_property_taxes: "6000".to_string(),
            closing_date: "2025-06-30".to_string(),
            commission_rate: "5.5".to_string(),
            hoa_fees: "oops".to_string(),
            home_warranty: "-500".to_string(),
            ..NetSheetForm::default()
        };

        let input = form.to_input();

        assert_eq!(input.listing_price, dec!(500000));
        assert_eq!(input.mortgage_payoff, dec!(300000));
        assert_eq!(input.closing_date, NaiveDate::from_ymd_opt(2025, 6, 30));
        assert_eq!(input.commission_rate_percent, dec!(5.5));
        assert_eq!(input.hoa_fees, Decimal::ZERO);
        assert_eq!(input.home_warranty_cost, Decimal::ZERO);
    }

    #[test]
    fn out_of_range_commission_becomes_zero() {
        let form = NetSheetForm {
            listing_price: "100000".to_string(),
            commission_rate: "150".to_string(),
            ..NetSheetForm::default()
        };

        let breakdown = compute_breakdown(&form.to_input());

        assert_eq!(breakdown.commission_amount, Decimal::ZERO);
    }

    #[test]
    fn unparseable_date_means_no_proration() {
        let form = NetSheetForm {
            listing_price: "300000".to_string(),
            yearly_property_taxes: "6000".to_string(),
            closing_date: "next June".to_string(),
            ..NetSheetForm::default()
        };

        let breakdown = compute_breakdown(&form.to_input());

        assert_eq!(breakdown.prorated_property_taxes, Decimal::ZERO);
    }

    // =========================================================================
    // to_input_strict tests
    // =========================================================================

    #[test]
    fn strict_conversion_matches_lenient_for_clean_text() {
        let form = NetSheetForm {
            listing_price: "$500,000".to_string(),
            mortgage_payoff: "300,000".to_string(),
            yearly_property_taxes: "6000".to_string(),
            closing_date: "2025-06-30".to_string(),
            ..NetSheetForm::default()
        };

        assert_eq!(form.to_input_strict(), Ok(form.to_input()));
    }

    #[test]
    fn strict_conversion_rejects_commission_above_one_hundred() {
        let form = NetSheetForm {
            commission_rate: "150".to_string(),
            ..NetSheetForm::default()
        };

        assert_eq!(
            form.to_input_strict(),
            Err(InvalidField {
                field: "commission_rate",
                source: AmountError::PercentOutOfRange(dec!(150)),
            })
        );
    }

    #[test]
    fn strict_conversion_rejects_unparseable_closing_date() {
        let form = NetSheetForm {
            closing_date: "next June".to_string(),
            ..NetSheetForm::default()
        };

        assert_eq!(
            form.to_input_strict(),
            Err(InvalidField {
                field: "closing_date",
                source: AmountError::InvalidDate("next June".to_string()),
            })
        );
    }

    #[test]
    fn strict_conversion_rejects_oversized_amount() {
        let form = NetSheetForm {
            listing_price: "20000000000000000000000000000".to_string(),
            ..NetSheetForm::default()
        };

        let error = form.to_input_strict().unwrap_err();

        assert_eq!(error.field, "listing_price");
        assert!(matches!(error.source, AmountError::TooLarge(_)));
    }

    #[test]
    fn strict_conversion_reports_first_bad_field() {
        let form = NetSheetForm {
            hoa_fees: "oops".to_string(),
            home_warranty: "-500".to_string(),
            ..NetSheetForm::default()
        };

        let error = form.to_input_strict().unwrap_err();

        assert_eq!(error.to_string(), "invalid hoa_fees: invalid amount 'oops'");
    }
}
