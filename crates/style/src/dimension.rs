//! Page geometry and length parsing. All values are PDF points.
use crate::error::StyleParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser::SerializeMap};

pub const POINTS_PER_INCH: f32 = 72.0;

/// Converts inches to points.
pub fn inch(value: f32) -> f32 {
    value * POINTS_PER_INCH
}

/// Parse a length value with optional unit (e.g., "10pt", "0.5in", "5mm", "12")
pub fn parse_length(input: &str) -> Result<f32, StyleParseError> {
    let trimmed = input.trim();
    let invalid = |e: std::num::ParseFloatError| {
        StyleParseError::InvalidLength(input.to_string(), e.to_string())
    };

    let (number, scale) = if let Some(val) = trimmed.strip_suffix("pt") {
        (val, 1.0)
    } else if let Some(val) = trimmed.strip_suffix("in") {
        (val, POINTS_PER_INCH)
    } else if let Some(val) = trimmed.strip_suffix("cm") {
        (val, POINTS_PER_INCH / 2.54)
    } else if let Some(val) = trimmed.strip_suffix("mm") {
        (val, POINTS_PER_INCH / 25.4)
    } else {
        (trimmed, 1.0)
    };

    number.trim().parse::<f32>().map(|v| v * scale).map_err(invalid)
}

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Vertical and horizontal pair, CSS order.
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Parse CSS-style margin shorthand (1, 2, or 4 values)
    pub fn parse_shorthand(input: &str) -> Result<Self, StyleParseError> {
        let values = input
            .split_whitespace()
            .map(parse_length)
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [all] => Ok(Margins::all(*all)),
            [vertical, horizontal] => Ok(Margins::symmetric(*vertical, *horizontal)),
            [top, right, bottom, left] => Ok(Margins {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            _ => Err(StyleParseError::InvalidLength(
                input.to_string(),
                format!("expected 1, 2, or 4 values, got {}", values.len()),
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MarginsVisitor;
        impl<'de> de::Visitor<'de> for MarginsVisitor {
            type Value = Margins;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string like '0.5in' or '0.5in 1in', a number, or a map")
            }

            fn visit_str<E>(self, value: &str) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Margins::parse_shorthand(value).map_err(E::custom)
            }

            fn visit_f64<E>(self, value: f64) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Ok(Margins::all(value as f32))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Ok(Margins::all(value as f32))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Margins, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut margins = Margins::default();
                while let Some(key) = map.next_key::<String>()? {
                    let raw: LengthDef = map.next_value()?;
                    let value = raw.into_points().map_err(de::Error::custom)?;
                    match key.as_str() {
                        "top" => margins.top = value,
                        "right" => margins.right = value,
                        "bottom" => margins.bottom = value,
                        "left" => margins.left = value,
                        _ => {}
                    }
                }
                Ok(margins)
            }
        }
        deserializer.deserialize_any(MarginsVisitor)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LengthDef {
    Num(f32),
    Str(String),
}

impl LengthDef {
    fn into_points(self) -> Result<f32, StyleParseError> {
        match self {
            LengthDef::Num(n) => Ok(n),
            LengthDef::Str(s) => parse_length(&s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    A4,
    #[default]
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    /// Parse a page size name (e.g., "A4", "Letter", "Legal")
    pub fn parse(s: &str) -> Result<Self, StyleParseError> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(StyleParseError::UnknownPageSize(s.to_string())),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}
