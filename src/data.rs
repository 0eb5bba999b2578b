use serde::{
    Deserialize, Deserializer, Serializer,
    de::{self, Visitor},
};
use std::fmt::Formatter;

pub mod mark;
pub mod student;

/// Both lists are always requested at this size.
pub const PAGE_SIZE: u64 = 5;

/// One page of records, as the API sends it back.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    #[serde(deserialize_with = "lenient_count")]
    pub total: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub limit: u64,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            total: 0,
            limit: PAGE_SIZE,
        }
    }
}

impl PageMeta {
    pub const fn page_count(self) -> u64 {
        if self.limit == 0 {
            0
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    /// Page controls are only worth showing once there's more than one page of records.
    pub const fn paginates(self) -> bool {
        self.total > self.limit
    }

    pub fn pages(self) -> impl Iterator<Item = u64> {
        1..=self.page_count()
    }
}

/// Form fields hold whatever was typed. Numbers go over the wire as numbers, anything else
/// (including nothing at all) goes as the raw text and the API gets to decide.
/// Nothing is trimmed: `" 20"` goes out as the string `" 20"`.
pub fn number_or_raw<S: Serializer>(raw: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if let Ok(int) = raw.parse::<i64>() {
        return serializer.serialize_i64(int);
    }
    match raw.parse::<f64>() {
        Ok(float) if float.is_finite() => serializer.serialize_f64(float),
        _ => serializer.serialize_str(raw),
    }
}

struct NumberOrText;

impl<'de> Visitor<'de> for NumberOrText {
    type Value = String;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a number, a string or null")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<String, D::Error> {
        deserializer.deserialize_any(self)
    }
}

/// Record values are only ever displayed or put back in a form, so whatever the API stored
/// (a number, text, or null) is kept as display text rather than failing the whole page.
pub fn number_or_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    deserializer.deserialize_any(NumberOrText)
}

/// Counts may come back as numbers or as numeric strings; null counts as zero.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let text = number_or_text(deserializer)?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(0);
    }
    if let Ok(count) = text.parse::<u64>() {
        return Ok(count);
    }
    match text.parse::<f64>() {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(float) if float.is_finite() && float >= 0.0 && float.fract() == 0.0 => Ok(float as u64),
        _ => Err(de::Error::invalid_value(
            de::Unexpected::Str(text),
            &"a non-negative whole number",
        )),
    }
}
