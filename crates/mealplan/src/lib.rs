pub mod dates;
pub mod error;
pub mod nutrition_log;
pub mod plan;
pub mod preferences;
pub mod storage;

pub use dates::{parse_iso_date, week_start};
pub use error::{PlanError, PlanResult, StorageError};
pub use nutrition_log::{
    DailyNutritionLog, DailyProgress, MealEntry, NUTRITION_PRESETS, NutritionGoals,
    NutritionPreset, NutritionProgress, NutritionTracker, ProgressStatus, WeekSummary,
    find_preset,
};
pub use plan::{DayMeals, DayPlan, MealPlanner, MealSlot, WeeklyPlan, plan_id, slot_nutrition};
pub use preferences::{
    CuisinePreference, MAX_HISTORY_ENTRIES, MealHistoryEntry, MealPreference, MealPreferences,
    NewHistoryEntry, PreferenceStore, UserPreferences,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
