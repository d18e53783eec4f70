//! Household member records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{BloodType, Citizenship, MaritalStatus, Sex};
use crate::utils::date::lenient_date;

/// A person listed on a household card
///
/// Every member belongs to exactly one household. Fields missing from a
/// backend payload take their default value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberRecord {
    pub full_name: String,
    /// 16-digit national identity number (NIK)
    pub national_id: String,
    pub family_relationship: String,
    pub sex: Sex,
    pub blood_type: BloodType,
    pub religion: String,
    pub marital_status: MaritalStatus,
    /// Only meaningful when `marital_status` is `Married`
    #[serde(deserialize_with = "lenient_date")]
    pub marriage_date: Option<NaiveDate>,
    pub citizenship: Citizenship,
    pub passport_number: String,
    pub residence_permit_number: String,
    pub birth_place: String,
    #[serde(deserialize_with = "lenient_date")]
    pub birth_date: Option<NaiveDate>,
    pub education_level: String,
    pub occupation: String,
    pub phone: String,
    pub email: String,
    pub father_name: String,
    pub mother_name: String,
}

impl MemberRecord {
    /// Create a member with identity fields set
    pub fn new(full_name: impl Into<String>, national_id: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            national_id: national_id.into(),
            ..Self::default()
        }
    }

    /// Set the marital status, dropping the marriage date unless married
    pub fn set_marital_status(&mut self, status: MaritalStatus) {
        self.marital_status = status;
        if status != MaritalStatus::Married {
            self.marriage_date = None;
        }
    }

    #[must_use]
    pub fn is_married(&self) -> bool {
        self.marital_status == MaritalStatus::Married
    }

    /// Whether nothing has been entered on this row yet
    #[must_use]
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}
