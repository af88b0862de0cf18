use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A user record as served by the user-list endpoint.
///
/// Read-only. Missing or `null` fields decode to empty values and extra fields are
/// ignored, so one sparse record never fails the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Numeric and string ids are both kept as text.
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(deserialize_with = "lenient_text")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_object")]
    pub company: Company,
    #[serde(deserialize_with = "lenient_object")]
    pub address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(deserialize_with = "lenient_text")]
    pub city: String,
    #[serde(deserialize_with = "lenient_text")]
    pub street: String,
}

/// `null` becomes `""`, scalars keep their JSON text, strings are taken as-is.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

/// `null` decodes as the empty object.
fn lenient_object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl User {
    /// Text the search box matches against.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.email, self.company.name)
    }

    /// `"{city}, {street}"`, as shown in the Address column.
    pub fn address_line(&self) -> String {
        format!("{}, {}", self.address.city, self.address.street)
    }
}
