//! Decoding of echoed configuration that tolerates values this client does not know.
//!
//! Use with `#[serde(default, deserialize_with = "crate::codec::lenient::option")]`
//! on an `Option<T>` response field, or [`list`] on an `Option<Vec<T>>`. A
//! value that fails to decode is dropped with a warning instead of failing
//! the whole response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::TRACING_TARGET_DECODING;

fn decode<T: DeserializeOwned>(value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(error) => {
            tracing::warn!(
                target: TRACING_TARGET_DECODING,
                shape = std::any::type_name::<T>(),
                error = %error,
                "dropping undecodable value"
            );
            None
        }
    }
}

/// Keeps the value when it decodes and drops it otherwise.
pub fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(decode))
}

/// Keeps the elements that decode and drops the rest.
pub fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(values.map(|values| values.into_iter().filter_map(decode).collect()))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::enums::Order;

    #[derive(Debug, Deserialize)]
    struct Echo {
        #[serde(default, deserialize_with = "super::option")]
        order: Option<Order>,
        #[serde(default, deserialize_with = "super::list")]
        orders: Option<Vec<Order>>,
    }

    #[test]
    fn test_undecodable_values_are_dropped() {
        let echo: Echo =
            serde_json::from_str(r#"{"order": "SIDEWAYS", "orders": ["ASCENDING", "SIDEWAYS"]}"#)
                .unwrap();

        assert_eq!(echo.order, None);
        assert_eq!(echo.orders, Some(vec![Order::Ascending]));
    }

    #[test]
    fn test_missing_and_null() {
        let echo: Echo = serde_json::from_str(r#"{"order": null}"#).unwrap();
        assert_eq!(echo.order, None);
        assert_eq!(echo.orders, None);
    }
}
