use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;
use tracing::info;

use super::cities::CitySet;
use super::domain::AddressField;

pub(crate) const STREET_NUMBER_RANGE: Range<i32> = 1..10_000;
pub(crate) const POSTAL_CODE_RANGE: Range<i32> = 10_000..60_000;

static STREET_NAME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn street_name_pattern() -> &'static Regex {
    STREET_NAME_PATTERN
        .get_or_init(|| Regex::new(r"^[a-zA-Z,\- ]+$").expect("street name pattern compiles"))
}

/// Parse a base-10 `i32` literal, returning `None` instead of an error.
///
/// Surrounding whitespace is not stripped, a single leading sign is allowed
/// and values outside the `i32` range fail to parse.
pub fn parse_integer(value: Option<&str>) -> Option<i32> {
    value.and_then(|raw| raw.parse::<i32>().ok())
}

pub(crate) fn check_street_name(street_name: Option<&str>) -> Result<(), AddressField> {
    let Some(street_name) = street_name else {
        info!("street name is missing");
        return Err(AddressField::StreetName);
    };

    if !street_name_pattern().is_match(street_name) {
        info!(street_name, "street name contains unsupported characters");
        return Err(AddressField::StreetName);
    }

    Ok(())
}

pub(crate) fn check_street_number(street_number: Option<&str>) -> Result<(), AddressField> {
    check_ranged_integer(street_number, STREET_NUMBER_RANGE, AddressField::StreetNumber)
}

pub(crate) fn check_postal_code(postal_code: Option<&str>) -> Result<(), AddressField> {
    check_ranged_integer(postal_code, POSTAL_CODE_RANGE, AddressField::PostalCode)
}

fn check_ranged_integer(
    value: Option<&str>,
    range: Range<i32>,
    field: AddressField,
) -> Result<(), AddressField> {
    let Some(parsed) = parse_integer(value) else {
        info!(field = field.as_str(), value = ?value, "not an integer");
        return Err(field);
    };

    if !range.contains(&parsed) {
        info!(
            field = field.as_str(),
            value = parsed,
            min = range.start,
            max_exclusive = range.end,
            "integer out of range"
        );
        return Err(field);
    }

    Ok(())
}

pub(crate) fn check_city(city: Option<&str>, cities: &CitySet) -> Result<(), AddressField> {
    let Some(city) = city else {
        info!("city is missing");
        return Err(AddressField::City);
    };

    if !cities.contains(city) {
        info!(city, "city is not a known reference city");
        return Err(AddressField::City);
    }

    Ok(())
}
