use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// One row of the user dataset.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Record {
    pub id: i64,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    /// Registration date, shown as-is.
    #[serde(default, deserialize_with = "nullable_string")]
    pub date: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub address: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub phone: String,
}

/// Treats an explicit `null` like a missing field.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Record {
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        date: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            date: date.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }

    /// Fields consulted by the search box.
    pub fn searchable_fields(&self) -> [&str; 3] {
        [
            self.name.as_str(),
            self.address.as_str(),
            self.phone.as_str(),
        ]
    }
}

/// Error returned when a sort column name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort field: {0}")]
pub struct UnknownSortField(pub String);

/// Columns the table can be ordered by.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Id,
    Name,
    Date,
    Address,
    Phone,
}

impl SortField {
    /// Columns in table order.
    pub const ALL: [SortField; 5] = [
        SortField::Id,
        SortField::Name,
        SortField::Date,
        SortField::Address,
        SortField::Phone,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Date => "date",
            SortField::Address => "address",
            SortField::Phone => "phone",
        }
    }

    /// Column header shown above the field.
    pub const fn label(self) -> &'static str {
        match self {
            SortField::Id => "User ID",
            SortField::Name => "Name",
            SortField::Date => "Date of Registration",
            SortField::Address => "Address",
            SortField::Phone => "Phone Number",
        }
    }

    /// Returns the value of this column as text. Ids are rendered in decimal,
    /// so they order as strings.
    pub fn value(self, record: &Record) -> Cow<'_, str> {
        match self {
            SortField::Id => Cow::Owned(record.id.to_string()),
            SortField::Name => Cow::Borrowed(&record.name),
            SortField::Date => Cow::Borrowed(&record.date),
            SortField::Address => Cow::Borrowed(&record.address),
            SortField::Phone => Cow::Borrowed(&record.phone),
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownSortField(s.to_string()))
    }
}
