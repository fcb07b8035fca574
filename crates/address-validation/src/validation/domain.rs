use serde::{Deserialize, Serialize};
use std::fmt;

/// Candidate address as submitted by a client.
///
/// Every field is optional: a missing or `null` field reaches the validator as
/// `None` and is reported as an invalid field rather than a decoding error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street_name: Option<String>,
    #[serde(default)]
    pub street_number: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl Address {
    pub fn new(
        street_name: impl Into<String>,
        street_number: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            street_name: Some(street_name.into()),
            street_number: Some(street_number.into()),
            postal_code: Some(postal_code.into()),
            city: Some(city.into()),
        }
    }
}

/// Field reported when validation fails, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    Address,
    StreetName,
    StreetNumber,
    PostalCode,
    City,
}

impl AddressField {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressField::Address => "address",
            AddressField::StreetName => "streetName",
            AddressField::StreetNumber => "streetNumber",
            AddressField::PostalCode => "postalCode",
            AddressField::City => "city",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for a single address.
///
/// `invalid_field` is set exactly when the address is invalid; the
/// constructors are the only way to build a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    invalid_field: Option<AddressField>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            invalid_field: None,
        }
    }

    pub fn invalid(field: AddressField) -> Self {
        Self {
            valid: false,
            invalid_field: Some(field),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn invalid_field(&self) -> Option<AddressField> {
        self.invalid_field
    }
}

impl From<Result<(), AddressField>> for ValidationResult {
    fn from(value: Result<(), AddressField>) -> Self {
        match value {
            Ok(()) => Self::valid(),
            Err(field) => Self::invalid(field),
        }
    }
}
