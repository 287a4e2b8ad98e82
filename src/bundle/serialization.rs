//! Deserialization for Bundle
//!
//! Decoding is lenient: missing fields and explicit `null` collections take
//! their zero value. Top-level keys outside the schema are routed into
//! `custom`, where an entry of the explicit `custom` object takes precedence
//! over a stray key of the same name.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{Deserialize, DeserializeOwned, Deserializer, MapAccess, Visitor};

use super::Bundle;

impl<'de> Deserialize<'de> for Bundle {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(BundleVisitor)
    }
}

struct BundleVisitor;

impl<'de> Visitor<'de> for BundleVisitor {
    type Value = Bundle;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a bundle document")
    }

    fn visit_map<M>(self, mut map: M) -> std::result::Result<Bundle, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut bundle = Bundle::default();
        let mut extensions = BTreeMap::new();

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "name" => bundle.name = next_or_default(&mut map)?,
                "version" => bundle.version = next_or_default(&mut map)?,
                "description" => bundle.description = next_or_default(&mut map)?,
                "keywords" => bundle.keywords = next_or_default(&mut map)?,
                "maintainers" => bundle.maintainers = next_or_default(&mut map)?,
                "invocationImages" => bundle.invocation_images = next_or_default(&mut map)?,
                "images" => bundle.images = next_or_default(&mut map)?,
                "actions" => bundle.actions = next_or_default(&mut map)?,
                "parameters" => bundle.parameters = next_or_default(&mut map)?,
                "credentials" => bundle.credentials = next_or_default(&mut map)?,
                "custom" => bundle.custom = next_or_default(&mut map)?,
                _ => {
                    let value: serde_json::Value = map.next_value()?;
                    extensions.insert(key, value);
                }
            }
        }

        for (key, value) in extensions {
            bundle.custom.entry(key).or_insert(value);
        }

        Ok(bundle)
    }
}

/// Read the next value, treating `null` as the type's zero value
fn next_or_default<'de, M, T>(map: &mut M) -> std::result::Result<T, M::Error>
where
    M: MapAccess<'de>,
    T: DeserializeOwned + Default,
{
    Ok(map.next_value::<Option<T>>()?.unwrap_or_default())
}
