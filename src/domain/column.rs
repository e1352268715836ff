//! Column definitions of the drivers table
//!
//! Each column knows its header label, how to read a comparable/filterable
//! value from a [`Driver`], and how to render a cell. Columns are listed in
//! display order by [`ColumnId::iter`].

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::domain::driver::Driver;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum ColumnId {
    #[strum(serialize = "vehicleStatus")]
    #[serde(rename = "vehicleStatus")]
    VehicleStatus,
    #[strum(serialize = "fullName")]
    #[serde(rename = "fullName")]
    FullName,
    #[strum(serialize = "Email")]
    #[serde(rename = "Email")]
    Email,
    #[strum(serialize = "DrivingLicenseCode")]
    #[serde(rename = "DrivingLicenseCode")]
    DrivingLicenseCode,
    #[strum(serialize = "Phone")]
    #[serde(rename = "Phone")]
    Phone,
    #[strum(serialize = "actions")]
    #[serde(rename = "actions")]
    Actions,
}

impl ColumnId {
    pub fn header(self) -> &'static str {
        match self {
            ColumnId::VehicleStatus => "Status",
            ColumnId::FullName => "Full Name",
            ColumnId::Email => "Email",
            ColumnId::DrivingLicenseCode => "License Code",
            ColumnId::Phone => "Phone",
            ColumnId::Actions => "",
        }
    }

    /// The actions column is pinned.
    pub fn is_hideable(self) -> bool {
        self != ColumnId::Actions
    }

    /// Whether the column carries a value that can be sorted and filtered.
    pub fn is_data(self) -> bool {
        self != ColumnId::Actions
    }

    /// Whether the global filter searches this column. The vehicle status
    /// label is computed, not a record field, so it is left out.
    pub fn is_globally_filterable(self) -> bool {
        self.is_data() && self != ColumnId::VehicleStatus
    }

    /// Every column that can be sorted and filtered, in display order.
    pub fn data_columns() -> impl Iterator<Item = ColumnId> {
        ColumnId::iter().filter(|column| column.is_data())
    }

    pub fn hideable_columns() -> impl Iterator<Item = ColumnId> {
        ColumnId::iter().filter(|column| column.is_hideable())
    }

    /// Unrendered value used for sorting and per-column filters.
    pub fn raw_value(self, driver: &Driver) -> Cow<'_, str> {
        match self {
            ColumnId::VehicleStatus => Cow::Owned(driver.vehicle_status().to_string()),
            ColumnId::FullName => Cow::Owned(driver.full_name()),
            ColumnId::Email => Cow::Borrowed(&driver.email),
            ColumnId::DrivingLicenseCode => Cow::Borrowed(&driver.driving_license_code),
            ColumnId::Phone => Cow::Borrowed(&driver.phone),
            ColumnId::Actions => Cow::Borrowed(""),
        }
    }

    /// Cell text as shown in the table body.
    pub fn render(self, driver: &Driver) -> String {
        match self {
            ColumnId::Email => driver.display_email(),
            ColumnId::Actions => String::from("···"),
            _ => self.raw_value(driver).into_owned(),
        }
    }

    /// Preferred share of the table width, in percent.
    pub fn width_percent(self) -> u16 {
        match self {
            ColumnId::VehicleStatus => 14,
            ColumnId::FullName => 24,
            ColumnId::Email => 28,
            ColumnId::DrivingLicenseCode => 14,
            ColumnId::Phone => 15,
            ColumnId::Actions => 5,
        }
    }
}
