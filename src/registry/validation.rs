//! Client-side validation gate for household submissions
//!
//! Rules run in a fixed order and the first violation stops validation.

use crate::error::ValidationError;
use crate::models::{HouseholdRecord, MemberRecord, is_sixteen_digits};

/// Check a household before it is sent to the backend
///
/// Order: registry number present, registry number shape, the four region
/// names top-down, at least one member, then each member in turn (name,
/// national id, marriage date).
pub fn validate_household(record: &HouseholdRecord) -> Result<(), ValidationError> {
    // Shape is checked on the raw value: padding is sent as-is
    if record.registry_number.trim().is_empty() {
        return Err(ValidationError::RegistryNumberMissing);
    }
    if !is_sixteen_digits(&record.registry_number) {
        return Err(ValidationError::RegistryNumberFormat);
    }

    if let Some(level) = record.location.first_missing() {
        return Err(ValidationError::RegionMissing(level));
    }

    if record.members.is_empty() {
        return Err(ValidationError::NoMembers);
    }

    record
        .members
        .iter()
        .enumerate()
        .try_for_each(|(index, member)| validate_member(member, index + 1))
}

/// Check one member; `position` is 1-based for display
pub fn validate_member(member: &MemberRecord, position: usize) -> Result<(), ValidationError> {
    if member.full_name.trim().is_empty() {
        return Err(ValidationError::MemberNameMissing { position });
    }
    if !is_sixteen_digits(&member.national_id) {
        return Err(ValidationError::MemberNationalIdFormat { position });
    }
    if member.is_married() && member.marriage_date.is_none() {
        return Err(ValidationError::MarriageDateMissing { position });
    }
    Ok(())
}
