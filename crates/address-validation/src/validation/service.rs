use std::sync::Arc;

use super::cities::CitySet;
use super::domain::{Address, ValidationResult};
use super::validate_address;

/// Service binding the validation pipeline to a shared reference city set.
#[derive(Debug, Clone)]
pub struct AddressValidationService {
    cities: Arc<CitySet>,
}

impl AddressValidationService {
    pub fn new(cities: Arc<CitySet>) -> Self {
        Self { cities }
    }

    /// Validate an address, or the absence of one.
    pub fn validate(&self, address: Option<&Address>) -> ValidationResult {
        validate_address(address, &self.cities)
    }

    pub fn cities(&self) -> &CitySet {
        &self.cities
    }
}

impl From<CitySet> for AddressValidationService {
    fn from(cities: CitySet) -> Self {
        Self::new(Arc::new(cities))
    }
}
