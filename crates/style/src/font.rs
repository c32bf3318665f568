use crate::error::StyleParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

/// The subset of the PDF base-14 fonts the layout engine carries metrics for.
///
/// These faces are never embedded: every conforming PDF viewer provides them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum BuiltinFont {
    #[default]
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
    ZapfDingbats,
}

impl BuiltinFont {
    pub const ALL: [BuiltinFont; 9] = [
        BuiltinFont::Helvetica,
        BuiltinFont::HelveticaBold,
        BuiltinFont::HelveticaOblique,
        BuiltinFont::HelveticaBoldOblique,
        BuiltinFont::Courier,
        BuiltinFont::CourierBold,
        BuiltinFont::CourierOblique,
        BuiltinFont::CourierBoldOblique,
        BuiltinFont::ZapfDingbats,
    ];

    pub fn postscript_name(self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::HelveticaOblique => "Helvetica-Oblique",
            BuiltinFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            BuiltinFont::Courier => "Courier",
            BuiltinFont::CourierBold => "Courier-Bold",
            BuiltinFont::CourierOblique => "Courier-Oblique",
            BuiltinFont::CourierBoldOblique => "Courier-BoldOblique",
            BuiltinFont::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Symbolic fonts use their built-in encoding rather than WinAnsi.
    pub fn is_symbolic(self) -> bool {
        matches!(self, BuiltinFont::ZapfDingbats)
    }

    pub fn is_bold(self) -> bool {
        matches!(
            self,
            BuiltinFont::HelveticaBold
                | BuiltinFont::HelveticaBoldOblique
                | BuiltinFont::CourierBold
                | BuiltinFont::CourierBoldOblique
        )
    }

    pub fn is_monospace(self) -> bool {
        matches!(
            self,
            BuiltinFont::Courier
                | BuiltinFont::CourierBold
                | BuiltinFont::CourierOblique
                | BuiltinFont::CourierBoldOblique
        )
    }
}

impl FromStr for BuiltinFont {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuiltinFont::ALL
            .iter()
            .copied()
            .find(|f| f.postscript_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StyleParseError::UnknownFont(s.to_string()))
    }
}

impl fmt::Display for BuiltinFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.postscript_name())
    }
}

impl Serialize for BuiltinFont {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.postscript_name())
    }
}

impl<'de> Deserialize<'de> for BuiltinFont {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}
