use serde::Serialize;

use crate::models::{DrinkCategory, DrinkType, Intensity, MixerType};

#[derive(Debug, Clone, Serialize)]
pub struct DrinkOption {
    pub id: DrinkType,
    pub name: &'static str,
    pub category: DrinkCategory,
}

#[derive(Debug, Clone, Serialize)]
pub struct MixerOption {
    pub id: MixerType,
    pub name: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntensityOption {
    pub id: Intensity,
    pub name: &'static str,
    pub description: &'static str,
}

/// Everything a front end needs to build its selection screens.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub drink_types: Vec<DrinkOption>,
    pub mixers: Vec<MixerOption>,
    pub intensities: Vec<IntensityOption>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            drink_types: DrinkType::ALL
                .into_iter()
                .map(|d| DrinkOption {
                    id: d,
                    name: d.display_name(),
                    category: d.category(),
                })
                .collect(),
            mixers: MixerType::ALL
                .into_iter()
                .map(|m| MixerOption {
                    id: m,
                    name: m.display_name(),
                })
                .collect(),
            intensities: Intensity::ALL
                .into_iter()
                .map(|i| IntensityOption {
                    id: i,
                    name: i.display_name(),
                    description: i.description(),
                })
                .collect(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_json_shape() {
        let value = serde_json::to_value(Catalog::new()).unwrap();
        assert_eq!(value["drink_types"].as_array().unwrap().len(), 6);
        assert_eq!(value["drink_types"][2]["id"], "vodka");
        assert_eq!(value["drink_types"][2]["category"], "spirits");
        assert_eq!(value["mixers"][2]["name"], "Tonic Water");
        assert_eq!(value["intensities"][0]["description"], "1-2 drinks per hour");
    }
}
