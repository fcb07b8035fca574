//! Address validation pipeline.
//!
//! Fields are checked in a fixed order (street name, street number, postal
//! code, city) and the first failing field is reported. Later checks never run
//! once an earlier one has failed.

pub mod cities;
pub mod domain;
pub(crate) mod fields;
pub mod router;
pub mod service;

pub use cities::{CityLoadError, CitySet};
pub use domain::{Address, AddressField, ValidationResult};
pub use fields::parse_integer;
pub use router::address_validation_router;
pub use service::AddressValidationService;

use tracing::info;

/// Validate `address` against the reference `cities`.
///
/// `None` stands for a request that carried no address at all and is reported
/// as [`AddressField::Address`].
pub fn validate_address(address: Option<&Address>, cities: &CitySet) -> ValidationResult {
    let Some(address) = address else {
        info!("address is missing");
        return ValidationResult::invalid(AddressField::Address);
    };

    check_fields(address, cities).into()
}

fn check_fields(address: &Address, cities: &CitySet) -> Result<(), AddressField> {
    fields::check_street_name(address.street_name.as_deref())?;
    fields::check_street_number(address.street_number.as_deref())?;
    fields::check_postal_code(address.postal_code.as_deref())?;
    fields::check_city(address.city.as_deref(), cities)?;
    Ok(())
}
