//! CSV loader for batch net sheet scenarios.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Numeric
//! cells accept the same text the net sheet form does (`$`, `,` and blanks);
//! unusable numbers become 0 with a warning rather than failing the file.
//!
//! | Column                      | Required | Notes                                   |
//! |-----------------------------|----------|-----------------------------------------|
//! | `name`                      | yes      | Label shown in the batch summary        |
//! | `listing_price`             | yes      |                                         |
//! | `mortgage_payoff`           | no       |                                         |
//! | `yearly_property_taxes`     | no       |                                         |
//! | `closing_date`              | no       | `YYYY-MM-DD`; blank means no proration  |
//! | `commission_rate_percent`   | no       | Blank means the form default, 6         |
//! | `location`                  | no       | `San Antonio`, `Houston`, `Dallas`      |
//! | `use_auto_calculated_taxes` | no       | `true`/`false`/`yes`/`no`; blank = true |
//! | `transfer_tax`              | no       | Used only when auto taxes are off       |
//! | `recording_tax`             | no       | Used only when auto taxes are off       |
//! | `hoa_fees`                  | no       |                                         |
//! | `home_warranty`             | no       |                                         |
//! | `repairs_concessions`       | no       |                                         |
//! | `misc_closing_costs`        | no       |                                         |
//!
//! ### Minimal example
//!
//! ```csv
//! name,listing_price
//! Alamo Heights,"$650,000"
//! ```

use std::io::Read;

use netsheet_core::calculations::{Location, ProceedsInput};
use netsheet_core::models::NetSheetForm;
use netsheet_core::sanitize::parse_flag;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ScenarioRow {
    name: String,
    listing_price: String,
    #[serde(default)]
    mortgage_payoff: String,
    #[serde(default)]
    yearly_property_taxes: String,
    #[serde(default)]
    closing_date: String,
    #[serde(default)]
    commission_rate_percent: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    use_auto_calculated_taxes: String,
    #[serde(default)]
    transfer_tax: String,
    #[serde(default)]
    recording_tax: String,
    #[serde(default)]
    hoa_fees: String,
    #[serde(default)]
    home_warranty: String,
    #[serde(default)]
    repairs_concessions: String,
    #[serde(default)]
    misc_closing_costs: String,
}

/// Errors that can occur while loading scenarios.
#[derive(Debug, Error)]
pub enum ScenarioLoaderError {
    /// Bad structure or a missing required column.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// `row` is 1-based (header = row 0).
    #[error("unrecognised location '{value}' on row {row}")]
    InvalidLocation { value: String, row: usize },

    #[error("unrecognised yes/no value '{value}' on row {row}")]
    InvalidFlag { value: String, row: usize },
}

/// One named net sheet from a batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub input: ProceedsInput,
}

fn convert_row(
    row: ScenarioRow,
    row_number: usize,
) -> Result<Scenario, ScenarioLoaderError> {
    let location = if row.location.is_empty() {
        Location::default()
    } else {
        Location::parse(&row.location).ok_or_else(|| ScenarioLoaderError::InvalidLocation {
            value: row.location.clone(),
            row: row_number,
        })?
    };

    let use_auto_calculated_taxes = parse_flag(&row.use_auto_calculated_taxes, true)
        .ok_or_else(|| ScenarioLoaderError::InvalidFlag {
            value: row.use_auto_calculated_taxes.clone(),
            row: row_number,
        })?;

    let defaults = NetSheetForm::default();
    let commission_rate = if row.commission_rate_percent.is_empty() {
        defaults.commission_rate.clone()
    } else {
        row.commission_rate_percent
    };

    let form = NetSheetForm {
        listing_price: row.listing_price,
        mortgage_payoff: row.mortgage_payoff,
        yearly_property_taxes: row.yearly_property_taxes,
        closing_date: row.closing_date,
        commission_rate,
        location,
        use_auto_calculated_taxes,
        transfer_tax: row.transfer_tax,
        recording_tax: row.recording_tax,
        hoa_fees: row.hoa_fees,
        home_warranty: row.home_warranty,
        repairs_concessions: row.repairs_concessions,
        misc_closing_costs: row.misc_closing_costs,
    };

    Ok(Scenario {
        name: row.name,
        input: form.to_input(),
    })
}

pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Parse scenarios from any reader. Rows are returned in file order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<Scenario>, ScenarioLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let scenarios = csv_reader
            .deserialize::<ScenarioRow>()
            .enumerate()
            .map(|(idx, result)| {
                let row = result?;
                convert_row(row, idx + 1)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = scenarios.len(), "Parsed net sheet scenarios");
        Ok(scenarios)
    }
}
