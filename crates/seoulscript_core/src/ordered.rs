//! Order-preserving map deserialization.

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;

/// Deserialize a JSON object into `(key, value)` pairs in document order.
///
/// `null` yields an empty list. A repeated key keeps its first position and
/// takes the last value.
pub(crate) fn entries<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct EntriesVisitor<V>(PhantomData<V>);

    impl<'de, V> Visitor<'de> for EntriesVisitor<V>
    where
        V: Deserialize<'de>,
    {
        type Value = Vec<(String, V)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of named entries")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries: Vec<(String, V)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, V>()? {
                match entries.iter_mut().find(|(existing, _)| *existing == key) {
                    Some(slot) => slot.1 = value,
                    None => entries.push((key, value)),
                }
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_any(EntriesVisitor(PhantomData))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "entries")]
        items: Vec<(String, u32)>,
    }

    #[test]
    fn test_preserves_document_order() {
        let json = r#"{"items": {"zeta": 1, "alpha": 2, "mid": 3}}"#;
        let wrapper: Wrapper = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = wrapper.items.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_key_keeps_position_takes_last_value() {
        let json = r#"{"items": {"a": 1, "b": 2, "a": 3}}"#;
        let wrapper: Wrapper = serde_json::from_str(json).unwrap();
        assert_eq!(
            wrapper.items,
            vec![("a".to_string(), 3), ("b".to_string(), 2)]
        );
    }

    #[test]
    fn test_null_is_empty() {
        let wrapper: Wrapper = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(wrapper.items.is_empty());
    }
}
