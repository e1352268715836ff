use serde::{Deserialize, Deserializer, Serialize};
use strum::Display;

/// A fleet driver's profile as returned by the drivers endpoint.
///
/// Field names follow the API's PascalCase wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    #[serde(rename = "DriverID", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Surname", default)]
    pub surname: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Phone", default)]
    pub phone: String,
    #[serde(rename = "DrivingLicenseCode", default)]
    pub driving_license_code: String,
    #[serde(rename = "HasVehicle", default)]
    pub has_vehicle: bool,
}

/// Two-state label derived from [`Driver::has_vehicle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum VehicleStatus {
    #[strum(serialize = "Has Vehicle")]
    HasVehicle,
    #[strum(serialize = "No Vehicle")]
    NoVehicle,
}

impl Driver {
    pub fn new(id: impl Into<String>, name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            surname: surname.into(),
            email: String::new(),
            phone: String::new(),
            driving_license_code: String::new(),
            has_vehicle: false,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn driving_license_code(mut self, code: impl Into<String>) -> Self {
        self.driving_license_code = code.into();
        self
    }

    pub fn has_vehicle(mut self, has_vehicle: bool) -> Self {
        self.has_vehicle = has_vehicle;
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    pub fn vehicle_status(&self) -> VehicleStatus {
        if self.has_vehicle {
            VehicleStatus::HasVehicle
        } else {
            VehicleStatus::NoVehicle
        }
    }

    /// Email as displayed in the table. Filtering still uses [`Driver::email`].
    pub fn display_email(&self) -> String {
        self.email.to_lowercase()
    }
}

/// Body of `GET /driver/drivers/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DriversResponse {
    #[serde(default)]
    pub drivers: Option<Vec<Driver>>,
}

impl DriversResponse {
    pub fn into_drivers(self) -> Vec<Driver> {
        self.drivers.unwrap_or_default()
    }
}

// Some deployments serve numeric ids.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}
