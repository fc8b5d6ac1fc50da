//! `HijriMonth` — month-of-year enum for the Hijri calendar.

/// Month of the Hijri year.
///
/// Variants are numbered 1–12 (Muharram = 1, Dhu al-Hijjah = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum HijriMonth {
    /// Muharram (1).
    Muharram = 1,
    /// Safar (2).
    Safar = 2,
    /// Rabi al-Awwal (3).
    RabiAlAwwal = 3,
    /// Rabi al-Thani (4).
    RabiAlThani = 4,
    /// Jumada al-Ula (5).
    JumadaAlUla = 5,
    /// Jumada al-Akhirah (6).
    JumadaAlAkhirah = 6,
    /// Rajab (7).
    Rajab = 7,
    /// Shaban (8).
    Shaban = 8,
    /// Ramadan (9).
    Ramadan = 9,
    /// Shawwal (10).
    Shawwal = 10,
    /// Dhu al-Qadah (11).
    DhuAlQadah = 11,
    /// Dhu al-Hijjah (12).
    DhuAlHijjah = 12,
}

impl HijriMonth {
    /// All twelve months in calendar order.
    pub const ALL: [HijriMonth; 12] = [
        HijriMonth::Muharram,
        HijriMonth::Safar,
        HijriMonth::RabiAlAwwal,
        HijriMonth::RabiAlThani,
        HijriMonth::JumadaAlUla,
        HijriMonth::JumadaAlAkhirah,
        HijriMonth::Rajab,
        HijriMonth::Shaban,
        HijriMonth::Ramadan,
        HijriMonth::Shawwal,
        HijriMonth::DhuAlQadah,
        HijriMonth::DhuAlHijjah,
    ];

    /// Construct from a number (1 = Muharram … 12 = Dhu al-Hijjah).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1..=12 => Some(Self::ALL[n as usize - 1]),
            _ => None,
        }
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the English transliteration of the month name.
    pub fn long_name(&self) -> &'static str {
        match self {
            HijriMonth::Muharram => "Muharram",
            HijriMonth::Safar => "Safar",
            HijriMonth::RabiAlAwwal => "Rabi al-Awwal",
            HijriMonth::RabiAlThani => "Rabi al-Thani",
            HijriMonth::JumadaAlUla => "Jumada al-Ula",
            HijriMonth::JumadaAlAkhirah => "Jumada al-Akhirah",
            HijriMonth::Rajab => "Rajab",
            HijriMonth::Shaban => "Shaban",
            HijriMonth::Ramadan => "Ramadan",
            HijriMonth::Shawwal => "Shawwal",
            HijriMonth::DhuAlQadah => "Dhu al-Qadah",
            HijriMonth::DhuAlHijjah => "Dhu al-Hijjah",
        }
    }
}

impl std::fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl From<HijriMonth> for u8 {
    fn from(m: HijriMonth) -> u8 {
        m as u8
    }
}
