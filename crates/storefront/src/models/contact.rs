//! Saved delivery contact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use foodhub_core::PaymentMethod;

/// Contact and address details remembered from the last checkout.
///
/// Every field is optional on read so that a partially edited record still
/// prefills whatever it has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    /// Payment method used for the order. Unrecognised values read as the
    /// default method.
    #[serde(default, alias = "paymentMethod", deserialize_with = "method_or_default")]
    pub method: PaymentMethod,
    /// When the record was written.
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

fn method_or_default<'de, D>(deserializer: D) -> Result<PaymentMethod, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_record() {
        let json = r#"{"name":"Asha","phone":"9876543210","address":"12 MG Road, Pune","method":"card","savedAt":"2026-01-05T10:00:00.000Z"}"#;
        let record: ContactRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Asha");
        assert_eq!(record.method, PaymentMethod::Card);
        assert!(record.saved_at.is_some());
    }

    #[test]
    fn test_partial_record() {
        let record: ContactRecord =
            serde_json::from_str(r#"{"phone":"9876543210","paymentMethod":"cod"}"#).unwrap();
        assert!(record.name.is_empty());
        assert_eq!(record.method, PaymentMethod::CashOnDelivery);
        assert_eq!(record.saved_at, None);
    }

    #[test]
    fn test_unknown_method_keeps_contact() {
        for method in [r#""bitcoin""#, "5", "null", r#"{"kind":"upi"}"#] {
            let json = format!(
                r#"{{"name":"Asha","phone":"9876543210","address":"12 MG Road, Pune","method":{method}}}"#
            );
            let record: ContactRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(record.name, "Asha");
            assert_eq!(record.phone, "9876543210");
            assert_eq!(record.address, "12 MG Road, Pune");
            assert_eq!(record.method, PaymentMethod::default());
        }
    }
}
