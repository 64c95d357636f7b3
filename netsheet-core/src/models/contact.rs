//! Seller contact request.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Form name the hosted form handler routes on.
pub const CONTACT_FORM_NAME: &str = "seller-contact";

/// A field that failed validation, keyed by its wire name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl std::fmt::Display for FieldError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// What a seller sends when asking for a consultation.
///
/// `timeline` is one of "1-2 Months", "3-6 Months", "6+ Months";
/// `proceeds_new_home` and `liens` are "Yes" or "No".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub timeline: String,
    pub proceeds_new_home: String,
    pub current_payoff: String,
    pub liens: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub sq_ft: String,
    pub notes: String,
    pub property_address: String,
}

impl ContactForm {
    /// Checks the required fields, reporting every missing one.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let required = [
            ("name", self.name.as_str(), "Name is required"),
            ("phone", self.phone.as_str(), "Phone is required"),
            ("timeline", self.timeline.as_str(), "Please select a timeline"),
            ("proceedsNewHome", self.proceeds_new_home.as_str(), "Please select an option"),
            ("liens", self.liens.as_str(), "Please select an option"),
            ("bedrooms", self.bedrooms.as_str(), "Required"),
            ("bathrooms", self.bathrooms.as_str(), "Required"),
            ("sqFt", self.sq_ft.as_str(), "Required"),
        ];

        let errors: Vec<FieldError> = required
            .into_iter()
            .filter(|(_, value, _)| value.trim().is_empty())
            .map(|(field, _, message)| FieldError { field, message })
            .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Wire fields in submission order, led by the form name.
    pub fn to_form_pairs(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("form-name", CONTACT_FORM_NAME),
            ("name", self.name.as_str()),
            ("phone", self.phone.as_str()),
            ("timeline", self.timeline.as_str()),
            ("proceedsNewHome", self.proceeds_new_home.as_str()),
            ("currentPayoff", self.current_payoff.as_str()),
            ("liens", self.liens.as_str()),
            ("bedrooms", self.bedrooms.as_str()),
            ("bathrooms", self.bathrooms.as_str()),
            ("sqFt", self.sq_ft.as_str()),
            ("notes", self.notes.as_str()),
            ("propertyAddress", self.property_address.as_str()),
        ]
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn to_url_encoded(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_form_pairs())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn complete_form() -> ContactForm {
        ContactForm {
            name: "Dana Reyes".to_string(),
            phone: "210-555-0142".to_string(),
            timeline: "3-6 Months".to_string(),
            proceeds_new_home: "Yes".to_string(),
            current_payoff: "180000".to_string(),
            liens: "No".to_string(),
            bedrooms: "3".to_string(),
            bathrooms: "2".to_string(),
            sq_ft: "1850".to_string(),
            notes: String::new(),
            property_address: "123 Main St, San Antonio".to_string(),
        }
    }

    // =========================================================================
    // validate tests
    // =========================================================================

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(complete_form().validate(), Ok(()));
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ContactForm::default().validate().unwrap_err();

        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "name",
                "phone",
                "timeline",
                "proceedsNewHome",
                "liens",
                "bedrooms",
                "bathrooms",
                "sqFt"
            ]
        );
        assert_eq!(errors[0].message, "Name is required");
        assert_eq!(errors[2].message, "Please select a timeline");
        assert_eq!(errors[7].message, "Required");
    }

    #[test]
    fn whitespace_only_name_is_missing() {
        let form = ContactForm {
            name: "   ".to_string(),
            ..complete_form()
        };

        let errors = form.validate().unwrap_err();

        assert_eq!(
            errors,
            vec![FieldError {
                field: "name",
                message: "Name is required"
            }]
        );
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let form = ContactForm {
            current_payoff: String::new(),
            notes: String::new(),
            property_address: String::new(),
            ..complete_form()
        };

        assert_eq!(form.validate(), Ok(()));
    }

    // =========================================================================
    // encoding tests
    // =========================================================================

    #[test]
    fn form_pairs_lead_with_form_name() {
        let form = complete_form();
        let pairs = form.to_form_pairs();

        assert_eq!(pairs.len(), 12);
        assert_eq!(pairs[0], ("form-name", "seller-contact"));
        assert_eq!(pairs[11], ("propertyAddress", "123 Main St, San Antonio"));
    }

    #[test]
    fn url_encoding_escapes_values() {
        let body = complete_form().to_url_encoded();

        assert!(body.starts_with("form-name=seller-contact&name=Dana+Reyes&phone=210-555-0142"));
        assert!(body.contains("timeline=3-6+Months"));
        assert!(body.ends_with("propertyAddress=123+Main+St%2C+San+Antonio"));
    }
}
