use serde::{Deserialize, Serialize};

/// Nutrition per serving. Macros in grams, sodium and cholesterol in mg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionInfo {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbohydrates: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
    #[serde(default)]
    pub sugar: f64,
    #[serde(default)]
    pub sodium: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cholesterol: Option<f64>,
}

impl NutritionInfo {
    /// Field-wise sum. Cholesterol is present on any non-empty sum.
    pub fn sum<'a>(items: impl IntoIterator<Item = &'a NutritionInfo>) -> NutritionInfo {
        items.into_iter().fold(NutritionInfo::default(), |acc, item| {
            NutritionInfo {
                calories: acc.calories + item.calories,
                protein: acc.protein + item.protein,
                carbohydrates: acc.carbohydrates + item.carbohydrates,
                fat: acc.fat + item.fat,
                fiber: acc.fiber + item.fiber,
                sugar: acc.sugar + item.sugar,
                sodium: acc.sodium + item.sodium,
                cholesterol: Some(
                    acc.cholesterol.unwrap_or(0.0) + item.cholesterol.unwrap_or(0.0),
                ),
            }
        })
    }

    /// Scale by a servings factor.
    ///
    /// Calories, sodium and cholesterol round to whole numbers; the
    /// gram-based fields round to one decimal.
    pub fn scale(&self, factor: f64) -> NutritionInfo {
        NutritionInfo {
            calories: (self.calories * factor).round(),
            protein: round_tenth(self.protein * factor),
            carbohydrates: round_tenth(self.carbohydrates * factor),
            fat: round_tenth(self.fat * factor),
            fiber: round_tenth(self.fiber * factor),
            sugar: round_tenth(self.sugar * factor),
            sodium: (self.sodium * factor).round(),
            cholesterol: self
                .cholesterol
                .filter(|c| *c != 0.0)
                .map(|c| (c * factor).round()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.calories == 0.0
    }
}

pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
