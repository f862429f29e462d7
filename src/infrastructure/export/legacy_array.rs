//! Legacy array encoder
//!
//! Structured values embedded in single `wp:meta_value` fields use the
//! length-prefixed array grammar of the importer's runtime:
//!
//! ```text
//! a:<count>:{<key><value>...}
//! i:<int>;            integer
//! s:<bytes>:"<text>"; string, length counted in bytes
//! ```
//!
//! Importers parse these values with that grammar, so the output must match
//! byte for byte, including the quirks of the attribute records.
//!
//! Attribute flags (`position`, `is_visible`, `is_variation`) fall back to
//! their string defaults only when absent. An explicit `0` keeps the type it
//! was submitted with, so `is_visible: 0` is written as `i:1:"0"`, not as the
//! default `s:1:"1"`.

use std::fmt::Write;

use crate::domain::entities::AttributeRecord;
use crate::domain::services::attribute_taxonomy;
use crate::domain::value_objects::LegacyScalar;

/// `[10, 20]` -> `a:2:{i:0;i:10;i:1;i:20;}`
pub fn encode_sequence(values: &[i64]) -> String {
    let mut body = String::new();
    for (index, value) in values.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = write!(body, "i:{};i:{};", index, value);
    }
    format!("a:{}:{{{}}}", values.len(), body)
}

/// `["a", "bc"]` -> `a:2:{i:0;s:1:"a";i:1;s:2:"bc";}`
pub fn encode_string_sequence<S: AsRef<str>>(values: &[S]) -> String {
    let mut body = String::new();
    for (index, value) in values.iter().enumerate() {
        let value = value.as_ref();
        let _ = write!(body, "i:{};s:{}:\"{}\";", index, value.len(), value);
    }
    format!("a:{}:{{{}}}", values.len(), body)
}

/// Encode product attributes as the `_product_attributes` value.
///
/// Each record becomes an entry keyed by its attribute taxonomy, holding a
/// six-key array. The `name` entry carries the taxonomy rather than the
/// display name, and `is_taxonomy` is written as a bare `i:1` with no
/// quoted value.
pub fn encode_attribute_set(attributes: &[AttributeRecord]) -> String {
    let entries: String = attributes.iter().map(encode_attribute).collect();
    format!("a:{}:{{{}}}", attributes.len(), entries)
}

fn encode_attribute(attribute: &AttributeRecord) -> String {
    let taxonomy = attribute_taxonomy(&attribute.name);
    let position = attribute.position.clone().unwrap_or_else(|| LegacyScalar::str("0"));
    let is_visible = attribute.is_visible.clone().unwrap_or_else(|| LegacyScalar::str("1"));
    let is_variation = attribute.is_variation.clone().unwrap_or_else(|| LegacyScalar::str("0"));

    let pairs = [
        keyed("name", &LegacyScalar::str(taxonomy.as_str())),
        keyed("value", &LegacyScalar::str(attribute.value.as_str())),
        keyed("position", &position),
        keyed("is_visible", &is_visible),
        keyed("is_variation", &is_variation),
        format!("{};{}", string_key("is_taxonomy"), bare(&LegacyScalar::Int(1))),
    ];

    format!(
        "s:{}:\"{}\";a:{}:{{{};}}",
        taxonomy.len(),
        taxonomy,
        pairs.len(),
        pairs.join(";")
    )
}

fn string_key(key: &str) -> String {
    format!("s:{}:\"{}\"", key.len(), key)
}

/// Type tag and length of a value's text, without the value itself
fn bare(value: &LegacyScalar) -> String {
    format!("{}:{}", value.type_tag(), value.to_string().len())
}

fn keyed(key: &str, value: &LegacyScalar) -> String {
    format!("{};{}:\"{}\"", string_key(key), bare(value), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_sequence() {
        assert_eq!(encode_sequence(&[10, 20, 30]), "a:3:{i:0;i:10;i:1;i:20;i:2;i:30;}");
        assert_eq!(encode_sequence(&[]), "a:0:{}");
        assert_eq!(encode_sequence(&[-1]), "a:1:{i:0;i:-1;}");
    }

    #[test]
    fn test_encode_string_sequence() {
        assert_eq!(
            encode_string_sequence(&["a", "bc"]),
            "a:2:{i:0;s:1:\"a\";i:1;s:2:\"bc\";}"
        );
        // Lengths are bytes, not characters.
        assert_eq!(encode_string_sequence(&["é"]), "a:1:{i:0;s:2:\"é\";}");
        assert_eq!(encode_string_sequence::<&str>(&[]), "a:0:{}");
    }

    #[test]
    fn test_encode_single_attribute() {
        let encoded = encode_attribute_set(&[AttributeRecord::new("Color", "Red")]);
        assert_eq!(
            encoded,
            concat!(
                "a:1:{s:8:\"pa_color\";a:6:{",
                "s:4:\"name\";s:8:\"pa_color\";",
                "s:5:\"value\";s:3:\"Red\";",
                "s:8:\"position\";s:1:\"0\";",
                "s:10:\"is_visible\";s:1:\"1\";",
                "s:12:\"is_variation\";s:1:\"0\";",
                "s:11:\"is_taxonomy\";i:1;}}"
            )
        );
    }

    #[test]
    fn test_is_taxonomy_has_no_quoted_value() {
        let encoded = encode_attribute_set(&[AttributeRecord::new("Size", "XL")]);
        assert!(encoded.ends_with("s:11:\"is_taxonomy\";i:1;}}"));
        assert!(!encoded.contains("is_taxonomy\";i:1:"));
    }

    #[test]
    fn test_entries_are_concatenated_without_separator() {
        let encoded = encode_attribute_set(&[
            AttributeRecord::new("Color", "Red"),
            AttributeRecord::new("Shoe Size", "42"),
        ]);
        assert!(encoded.starts_with("a:2:{s:8:\"pa_color\";a:6:{"));
        assert!(encoded.contains("i:1;}s:12:\"pa_shoe_size\";a:6:{"));
        assert!(encoded.ends_with("i:1;}}"));
        assert_eq!(encode_attribute_set(&[]), "a:0:{}");
    }

    #[test]
    fn test_explicit_flags_keep_their_type() {
        let mut record = AttributeRecord::new("Color", "Red");
        record.position = Some(LegacyScalar::Int(2));
        record.is_visible = Some(LegacyScalar::Int(0));
        record.is_variation = Some(LegacyScalar::str("1"));
        let encoded = encode_attribute_set(&[record]);
        assert!(encoded.contains("s:8:\"position\";i:1:\"2\""));
        assert!(!encoded.contains("s:10:\"is_visible\";s:1:\"1\""));
        assert!(encoded.contains("s:10:\"is_visible\";i:1:\"0\""));
        assert!(encoded.contains("s:12:\"is_variation\";s:1:\"1\""));
    }

    #[test]
    fn test_zero_position_is_not_replaced_by_default() {
        let mut record = AttributeRecord::new("Color", "Red");
        record.position = Some(LegacyScalar::Int(0));
        let encoded = encode_attribute_set(&[record]);
        assert!(encoded.contains("s:8:\"position\";i:1:\"0\""));
        assert!(!encoded.contains("s:8:\"position\";s:1:\"0\""));
    }

    #[test]
    fn test_multibyte_values_use_byte_lengths() {
        let encoded = encode_attribute_set(&[AttributeRecord::new("Farbe", "Grün")]);
        assert!(encoded.contains("s:5:\"value\";s:5:\"Grün\""));
    }

    #[test]
    fn test_prefixed_names_are_used_verbatim() {
        let encoded = encode_attribute_set(&[AttributeRecord::new("pa_color", "Red")]);
        assert!(encoded.starts_with("a:1:{s:8:\"pa_color\";"));
        assert!(encoded.contains("s:4:\"name\";s:8:\"pa_color\""));
    }
}
