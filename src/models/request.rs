use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use tracing::debug;

use crate::error::{PartyError, Result};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Find the candidate closest to `input`, if any is similar enough.
pub fn closest_match<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let input = input.to_lowercase();
    candidates
        .iter()
        .map(|c| (*c, jaro_winkler(c, &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}

/// How heavily the crowd drinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    Medium,
    Heavy,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Light, Intensity::Medium, Intensity::Heavy];

    pub fn name(&self) -> &'static str {
        match self {
            Intensity::Light => "light",
            Intensity::Medium => "medium",
            Intensity::Heavy => "heavy",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Intensity::Light => "Light Drinkers",
            Intensity::Medium => "Medium Drinkers",
            Intensity::Heavy => "Heavy Drinkers",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Intensity::Light => "1-2 drinks per hour",
            Intensity::Medium => "2-3 drinks per hour",
            Intensity::Heavy => "3+ drinks per hour",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Intensity {
    type Err = PartyError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        Intensity::ALL
            .into_iter()
            .find(|i| i.name() == key)
            .ok_or_else(|| PartyError::UnknownIntensity {
                value: s.to_string(),
            })
    }
}

/// Broad grouping of drink types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkCategory {
    Beer,
    Wine,
    Spirits,
}

/// A drink the host can put on the shopping list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkType {
    Beer,
    Wine,
    Vodka,
    Whiskey,
    Rum,
    Gin,
}

impl DrinkType {
    pub const ALL: [DrinkType; 6] = [
        DrinkType::Beer,
        DrinkType::Wine,
        DrinkType::Vodka,
        DrinkType::Whiskey,
        DrinkType::Rum,
        DrinkType::Gin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DrinkType::Beer => "beer",
            DrinkType::Wine => "wine",
            DrinkType::Vodka => "vodka",
            DrinkType::Whiskey => "whiskey",
            DrinkType::Rum => "rum",
            DrinkType::Gin => "gin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DrinkType::Beer => "Beer 🍺",
            DrinkType::Wine => "Wine 🍷",
            DrinkType::Vodka => "Vodka",
            DrinkType::Whiskey => "Whiskey",
            DrinkType::Rum => "Rum",
            DrinkType::Gin => "Gin",
        }
    }

    pub fn category(&self) -> DrinkCategory {
        match self {
            DrinkType::Beer => DrinkCategory::Beer,
            DrinkType::Wine => DrinkCategory::Wine,
            DrinkType::Vodka | DrinkType::Whiskey | DrinkType::Rum | DrinkType::Gin => {
                DrinkCategory::Spirits
            }
        }
    }

    #[inline]
    pub fn is_spirit(&self) -> bool {
        self.category() == DrinkCategory::Spirits
    }
}

impl fmt::Display for DrinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for DrinkType {
    type Err = PartyError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        if let Some(drink) = DrinkType::ALL.into_iter().find(|d| d.name() == key) {
            return Ok(drink);
        }
        let names: Vec<&str> = DrinkType::ALL.iter().map(|d| d.name()).collect();
        Err(PartyError::UnknownDrinkType {
            value: s.to_string(),
            suggestion: closest_match(&key, &names).map(str::to_string),
        })
    }
}

/// A non-alcoholic mixer served with spirits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MixerType {
    Soda,
    Juice,
    Tonic,
}

impl MixerType {
    pub const ALL: [MixerType; 3] = [MixerType::Soda, MixerType::Juice, MixerType::Tonic];

    pub fn name(&self) -> &'static str {
        match self {
            MixerType::Soda => "soda",
            MixerType::Juice => "juice",
            MixerType::Tonic => "tonic",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MixerType::Soda => "Soda",
            MixerType::Juice => "Juice",
            MixerType::Tonic => "Tonic Water",
        }
    }
}

impl fmt::Display for MixerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for MixerType {
    type Err = PartyError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        if let Some(mixer) = MixerType::ALL.into_iter().find(|m| m.name() == key) {
            return Ok(mixer);
        }
        let names: Vec<&str> = MixerType::ALL.iter().map(|m| m.name()).collect();
        Err(PartyError::UnknownMixerType {
            value: s.to_string(),
            suggestion: closest_match(&key, &names).map(str::to_string),
        })
    }
}

/// Unvalidated request as it arrives over the wire or from a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyRequestBody {
    pub guests: i64,
    pub drinker_type: String,
    pub duration: i64,
    pub drink_types: Vec<String>,
    #[serde(default)]
    pub mixers: Vec<String>,
}

/// A validated party description. Construct with [`PartyRequest::new`] or
/// [`PartyRequest::from_body`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyRequest {
    guests: u32,
    intensity: Intensity,
    duration_hours: u32,
    drink_types: Vec<DrinkType>,
    mixers: Vec<MixerType>,
}

/// Keep the first occurrence of each value, preserving order.
fn dedup_ordered<T: PartialEq + Copy>(values: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

impl PartyRequest {
    pub fn new(
        guests: i64,
        intensity: Intensity,
        duration_hours: i64,
        drink_types: &[DrinkType],
        mixers: &[MixerType],
    ) -> Result<Self> {
        if guests < 1 {
            return Err(PartyError::InvalidGuestCount(guests));
        }
        if duration_hours < 1 {
            return Err(PartyError::InvalidDuration(duration_hours));
        }
        let guests = u32::try_from(guests).map_err(|_| PartyError::InvalidGuestCount(guests))?;
        let duration =
            u32::try_from(duration_hours).map_err(|_| PartyError::InvalidDuration(duration_hours))?;

        let drinks = dedup_ordered(drink_types.iter().copied());
        if drinks.is_empty() {
            return Err(PartyError::EmptyDrinkSelection);
        }
        if drinks.len() != drink_types.len() {
            debug!(
                submitted = drink_types.len(),
                kept = drinks.len(),
                "collapsed duplicate drink types"
            );
        }

        Ok(Self {
            guests,
            intensity,
            duration_hours: duration,
            drink_types: drinks,
            mixers: dedup_ordered(mixers.iter().copied()),
        })
    }

    /// Validate a wire body. Numeric checks run before name lookups.
    pub fn from_body(body: &PartyRequestBody) -> Result<Self> {
        if body.guests < 1 {
            return Err(PartyError::InvalidGuestCount(body.guests));
        }
        if body.duration < 1 {
            return Err(PartyError::InvalidDuration(body.duration));
        }
        if body.drink_types.is_empty() {
            return Err(PartyError::EmptyDrinkSelection);
        }

        let intensity: Intensity = body.drinker_type.parse()?;
        let drinks = body
            .drink_types
            .iter()
            .map(|s| s.parse())
            .collect::<Result<Vec<DrinkType>>>()?;
        let mixers = body
            .mixers
            .iter()
            .map(|s| s.parse())
            .collect::<Result<Vec<MixerType>>>()?;

        Self::new(body.guests, intensity, body.duration, &drinks, &mixers)
    }

    pub fn guests(&self) -> u32 {
        self.guests
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn duration_hours(&self) -> u32 {
        self.duration_hours
    }

    pub fn drink_types(&self) -> &[DrinkType] {
        &self.drink_types
    }

    pub fn mixers(&self) -> &[MixerType] {
        &self.mixers
    }

    /// Selected spirits, in submitted order.
    pub fn spirits(&self) -> Vec<DrinkType> {
        self.drink_types
            .iter()
            .copied()
            .filter(DrinkType::is_spirit)
            .collect()
    }

    pub fn has_spirits(&self) -> bool {
        self.drink_types.iter().any(DrinkType::is_spirit)
    }

    /// Guests multiplied by hours, the basis for extras.
    pub fn guest_hours(&self) -> u64 {
        self.guests as u64 * self.duration_hours as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(guests: i64, duration: i64, drinks: &[&str], mixers: &[&str]) -> PartyRequestBody {
        PartyRequestBody {
            guests,
            drinker_type: "medium".to_string(),
            duration,
            drink_types: drinks.iter().map(|s| s.to_string()).collect(),
            mixers: mixers.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Vodka".parse::<DrinkType>().unwrap(), DrinkType::Vodka);
        assert_eq!(" TONIC ".parse::<MixerType>().unwrap(), MixerType::Tonic);
        assert_eq!("Heavy".parse::<Intensity>().unwrap(), Intensity::Heavy);
    }

    #[test]
    fn test_display_honors_width() {
        assert_eq!(format!("[{:<8}]", DrinkType::Gin), "[gin     ]");
        assert_eq!(format!("[{:>6}]", MixerType::Soda), "[  soda]");
        assert_eq!(format!("[{:^7}]", Intensity::Light), "[ light ]");
    }

    #[test]
    fn test_unknown_drink_suggests_closest() {
        match "wiskey".parse::<DrinkType>() {
            Err(PartyError::UnknownDrinkType { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("whiskey"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_mixer_without_close_match() {
        match "espresso".parse::<MixerType>() {
            Err(PartyError::UnknownMixerType { suggestion, .. }) => assert!(suggestion.is_none()),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_from_body_rejects_zero_guests() {
        let err = PartyRequest::from_body(&body(0, 4, &["beer"], &[])).unwrap_err();
        assert!(matches!(err, PartyError::InvalidGuestCount(0)));
    }

    #[test]
    fn test_from_body_rejects_zero_duration() {
        let err = PartyRequest::from_body(&body(5, 0, &["beer"], &[])).unwrap_err();
        assert!(matches!(err, PartyError::InvalidDuration(0)));
    }

    #[test]
    fn test_from_body_rejects_empty_drinks() {
        let err = PartyRequest::from_body(&body(5, 2, &[], &["soda"])).unwrap_err();
        assert!(matches!(err, PartyError::EmptyDrinkSelection));
    }

    #[test]
    fn test_from_body_rejects_unknown_intensity() {
        let mut b = body(5, 2, &["beer"], &[]);
        b.drinker_type = "extreme".to_string();
        let err = PartyRequest::from_body(&b).unwrap_err();
        assert!(matches!(err, PartyError::UnknownIntensity { .. }));
    }

    #[test]
    fn test_duplicates_collapse_in_order() {
        let req =
            PartyRequest::from_body(&body(5, 2, &["rum", "beer", "rum"], &["soda", "soda"]))
                .unwrap();
        assert_eq!(req.drink_types(), &[DrinkType::Rum, DrinkType::Beer]);
        assert_eq!(req.mixers(), &[MixerType::Soda]);
    }

    #[test]
    fn test_spirits_filter() {
        let req = PartyRequest::new(
            4,
            Intensity::Light,
            2,
            &[DrinkType::Beer, DrinkType::Gin, DrinkType::Wine, DrinkType::Vodka],
            &[],
        )
        .unwrap();
        assert_eq!(req.spirits(), vec![DrinkType::Gin, DrinkType::Vodka]);
        assert!(req.has_spirits());
        assert_eq!(req.guest_hours(), 8);
    }

    #[test]
    fn test_mixers_optional_in_json() {
        let json = r#"{"guests": 3, "drinker_type": "light", "duration": 2, "drink_types": ["wine"]}"#;
        let b: PartyRequestBody = serde_json::from_str(json).unwrap();
        assert!(b.mixers.is_empty());
        let req = PartyRequest::from_body(&b).unwrap();
        assert_eq!(req.drink_types(), &[DrinkType::Wine]);
    }
}
