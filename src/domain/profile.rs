//! Backing record of the "Create Driver" form.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub user: UserDraft,
    pub driver: DriverDraft,
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for UserDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDraft")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDraft {
    pub government: String,
    pub name: String,
    pub surname: String,
    pub middle_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub driving_license_code: String,
}

/// Editable fields of a [`ProfileDraft`], in form order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize)]
pub enum DraftField {
    #[default]
    #[strum(serialize = "Account email")]
    UserEmail,
    #[strum(serialize = "Password")]
    Password,
    #[strum(serialize = "Government ID")]
    Government,
    #[strum(serialize = "Name")]
    Name,
    #[strum(serialize = "Surname")]
    Surname,
    #[strum(serialize = "Middle name")]
    MiddleName,
    #[strum(serialize = "Address")]
    Address,
    #[strum(serialize = "Phone")]
    Phone,
    #[strum(serialize = "Contact email")]
    DriverEmail,
    #[strum(serialize = "License code")]
    DrivingLicenseCode,
}

impl DraftField {
    pub fn next(self) -> Self {
        let fields: Vec<DraftField> = DraftField::iter().collect();
        let index = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(index + 1) % fields.len()]
    }

    pub fn previous(self) -> Self {
        let fields: Vec<DraftField> = DraftField::iter().collect();
        let index = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(index + fields.len() - 1) % fields.len()]
    }

    pub fn is_secret(self) -> bool {
        self == DraftField::Password
    }
}

impl ProfileDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::UserEmail => &self.user.email,
            DraftField::Password => &self.user.password,
            DraftField::Government => &self.driver.government,
            DraftField::Name => &self.driver.name,
            DraftField::Surname => &self.driver.surname,
            DraftField::MiddleName => &self.driver.middle_name,
            DraftField::Address => &self.driver.address,
            DraftField::Phone => &self.driver.phone,
            DraftField::DriverEmail => &self.driver.email,
            DraftField::DrivingLicenseCode => &self.driver.driving_license_code,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::UserEmail => &mut self.user.email,
            DraftField::Password => &mut self.user.password,
            DraftField::Government => &mut self.driver.government,
            DraftField::Name => &mut self.driver.name,
            DraftField::Surname => &mut self.driver.surname,
            DraftField::MiddleName => &mut self.driver.middle_name,
            DraftField::Address => &mut self.driver.address,
            DraftField::Phone => &mut self.driver.phone,
            DraftField::DriverEmail => &mut self.driver.email,
            DraftField::DrivingLicenseCode => &mut self.driver.driving_license_code,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        *self == ProfileDraft::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_draft_starts_empty() {
        let draft = ProfileDraft::default();
        assert!(draft.is_empty());
        assert!(DraftField::iter().all(|field| draft.get(field).is_empty()));
    }

    #[test]
    fn test_set_and_get_every_field() {
        let mut draft = ProfileDraft::default();
        for field in DraftField::iter() {
            draft.set(field, field.to_string());
        }
        for field in DraftField::iter() {
            assert_eq!(draft.get(field), field.to_string());
        }
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_debug_output_hides_password() {
        let mut draft = ProfileDraft::default();
        draft.set(DraftField::UserEmail, "ada@fleet.io".to_string());
        draft.set(DraftField::Password, "Zq9-secret".to_string());

        let printed = format!("{draft:?}");
        assert!(printed.contains("ada@fleet.io"));
        assert!(!printed.contains("Zq9-secret"));
    }

    #[test]
    fn test_field_navigation_wraps() {
        assert_eq!(DraftField::UserEmail.next(), DraftField::Password);
        assert_eq!(DraftField::DrivingLicenseCode.next(), DraftField::UserEmail);
        assert_eq!(DraftField::UserEmail.previous(), DraftField::DrivingLicenseCode);
    }

    #[test]
    fn test_serializes_nested_camel_case() -> serde_json::Result<()> {
        let mut draft = ProfileDraft::default();
        draft.set(DraftField::MiddleName, String::from("Q"));
        draft.set(DraftField::DrivingLicenseCode, String::from("C1"));

        let json = serde_json::to_value(&draft)?;
        assert_eq!(json["user"]["email"], "");
        assert_eq!(json["driver"]["middleName"], "Q");
        assert_eq!(json["driver"]["drivingLicenseCode"], "C1");
        Ok(())
    }
}
