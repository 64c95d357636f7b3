//! Per-location closing constants.
//!
//! Transfer and recording taxes are looked up through a [`TransferTaxRule`]
//! chosen by [`Location`], so a new market only needs a new rule and a new
//! enum variant. Title company fees are a flat itemized schedule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transfer and recording taxes owed by the seller at closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferTaxes {
    pub transfer_tax: Decimal,
    pub recording_tax: Decimal,
}

/// Strategy for deriving transfer and recording taxes from a sale price.
pub trait TransferTaxRule: Send + Sync {
    fn taxes(
        &self,
        listing_price: Decimal,
    ) -> TransferTaxes;
}

/// Texas has no transfer tax on residential sales; county recording is a
/// small flat fee (first page plus a few additional pages).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexasRecordingRule {
    pub recording_fee: Decimal,
}

const TEXAS: TexasRecordingRule = TexasRecordingRule {
    recording_fee: Decimal::from_parts(50, 0, 0, false, 0),
};

impl TransferTaxRule for TexasRecordingRule {
    fn taxes(
        &self,
        _listing_price: Decimal,
    ) -> TransferTaxes {
        TransferTaxes {
            transfer_tax: Decimal::ZERO,
            recording_tax: self.recording_fee,
        }
    }
}

/// Markets the net sheet is offered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Location {
    #[default]
    SanAntonio,
    Houston,
    Dallas,
}

impl Location {
    pub fn all() -> &'static [Location] {
        &[Location::SanAntonio, Location::Houston, Location::Dallas]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SanAntonio => "San Antonio",
            Self::Houston => "Houston",
            Self::Dallas => "Dallas",
        }
    }

    /// Accepts the display name or its kebab-case form, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "san antonio" | "san-antonio" => Some(Self::SanAntonio),
            "houston" => Some(Self::Houston),
            "dallas" => Some(Self::Dallas),
            _ => None,
        }
    }

    /// The transfer tax rule in force for this location.
    pub fn rule(&self) -> &'static dyn TransferTaxRule {
        match self {
            Self::SanAntonio | Self::Houston | Self::Dallas => &TEXAS,
        }
    }
}

/// Derives transfer and recording taxes for a sale at `location`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use netsheet_core::calculations::{Location, derive_transfer_and_recording_tax};
///
/// let taxes = derive_transfer_and_recording_tax(dec!(500000), Location::SanAntonio);
/// assert_eq!(taxes.transfer_tax, dec!(0));
/// assert_eq!(taxes.recording_tax, dec!(50));
/// ```
pub fn derive_transfer_and_recording_tax(
    listing_price: Decimal,
    location: Location,
) -> TransferTaxes {
    location.rule().taxes(listing_price)
}

/// Itemized title company charges billed to the seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleCompanyFees {
    pub closing_fee: Decimal,
    pub ron_e_signing_fee: Decimal,
    pub processing_fee: Decimal,
    pub release_service_fee: Decimal,
    pub deed_preparation: Decimal,
}

impl TitleCompanyFees {
    pub fn total(&self) -> Decimal {
        self.closing_fee
            + self.ron_e_signing_fee
            + self.processing_fee
            + self.release_service_fee
            + self.deed_preparation
    }
}

impl Default for TitleCompanyFees {
    /// Area averages used on every net sheet.
    fn default() -> Self {
        Self {
            closing_fee: Decimal::from(475),
            ron_e_signing_fee: Decimal::from(150),
            processing_fee: Decimal::from(495),
            release_service_fee: Decimal::from(110),
            deed_preparation: Decimal::from(195),
        }
    }
}
