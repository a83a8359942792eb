use mealmate_meal_planning::{RecipeCriteria, filter_recipes_with_criteria};
use mealmate_recipe::{CuisineType, DietType, MealType, Recipe};

mod helpers;
use helpers::{create_test_recipe, ids, with_diet};

fn sample_catalog() -> Vec<Recipe> {
    vec![
        Recipe {
            name: "Rava Idli".to_owned(),
            meal_type: vec![MealType::Breakfast, MealType::Snack],
            prep_time: 10,
            cook_time: 15,
            spice_level: 1,
            tags: vec!["Steamed".to_owned()],
            ..create_test_recipe("idli")
        },
        Recipe {
            name: "Chilli Chicken".to_owned(),
            description: "Crispy and fiery".to_owned(),
            cuisine: CuisineType::IndoChinese,
            meal_type: vec![MealType::Dinner, MealType::Snack],
            diet_type: DietType::NonVeg,
            prep_time: 20,
            cook_time: 20,
            spice_level: 5,
            ..create_test_recipe("chilli-chicken")
        },
        Recipe {
            name: "Egg Roast".to_owned(),
            cuisine: CuisineType::Kerala,
            meal_type: vec![MealType::Breakfast, MealType::Dinner],
            diet_type: DietType::Egg,
            prep_time: 15,
            cook_time: 25,
            spice_level: 3,
            ..create_test_recipe("egg-roast")
        },
        Recipe {
            name: "Bisi Bele Bath".to_owned(),
            description: "Hot lentil rice".to_owned(),
            meal_type: vec![MealType::Lunch, MealType::Dinner],
            prep_time: 20,
            cook_time: 40,
            spice_level: 3,
            ..create_test_recipe("bisi-bele-bath")
        },
    ]
}

#[test]
fn test_empty_criteria_keeps_everything_in_order() {
    let catalog = sample_catalog();

    let result = filter_recipes_with_criteria(&catalog, &RecipeCriteria::default());

    assert_eq!(
        ids(&result),
        vec!["idli", "chilli-chicken", "egg-roast", "bisi-bele-bath"]
    );
}

#[test]
fn test_diet_asymmetry() {
    let catalog = vec![
        with_diet("veg", DietType::Veg),
        with_diet("egg", DietType::Egg),
        with_diet("non-veg", DietType::NonVeg),
    ];
    let by_diet = |diet| {
        let criteria = RecipeCriteria {
            diet_type: Some(diet),
            ..Default::default()
        };
        ids(&filter_recipes_with_criteria(&catalog, &criteria))
    };

    assert_eq!(by_diet(DietType::Veg), vec!["veg"]);
    assert_eq!(by_diet(DietType::Egg), vec!["veg", "egg"]);
    assert_eq!(by_diet(DietType::NonVeg), vec!["non-veg"]);
}

#[test]
fn test_meal_type_criterion() {
    let catalog = sample_catalog();
    let criteria = RecipeCriteria {
        meal_type: Some(MealType::Breakfast),
        ..Default::default()
    };

    let result = filter_recipes_with_criteria(&catalog, &criteria);

    assert_eq!(ids(&result), vec!["idli", "egg-roast"]);
}

#[test]
fn test_cuisine_allow_list() {
    let catalog = sample_catalog();
    let criteria = RecipeCriteria {
        cuisines: vec![CuisineType::Kerala, CuisineType::IndoChinese],
        ..Default::default()
    };

    let result = filter_recipes_with_criteria(&catalog, &criteria);

    assert_eq!(ids(&result), vec!["chilli-chicken", "egg-roast"]);
}

#[test]
fn test_max_cook_time_uses_total_time() {
    let catalog = sample_catalog();
    let criteria = RecipeCriteria {
        max_cook_time: Some(40),
        ..Default::default()
    };

    let result = filter_recipes_with_criteria(&catalog, &criteria);

    // 25, 40 and 40 minutes pass; 60 does not
    assert_eq!(ids(&result), vec!["idli", "chilli-chicken", "egg-roast"]);
}

#[test]
fn test_zero_limits_mean_no_constraint() {
    let catalog = sample_catalog();
    let criteria = RecipeCriteria {
        max_cook_time: Some(0),
        spice_level_max: Some(0),
        ..Default::default()
    };

    let result = filter_recipes_with_criteria(&catalog, &criteria);

    assert_eq!(result.len(), catalog.len());
}

#[test]
fn test_spice_level_max() {
    let catalog = sample_catalog();
    let criteria = RecipeCriteria {
        spice_level_max: Some(3),
        ..Default::default()
    };

    let result = filter_recipes_with_criteria(&catalog, &criteria);

    assert_eq!(ids(&result), vec!["idli", "egg-roast", "bisi-bele-bath"]);
}

#[test]
fn test_search_is_case_insensitive_across_fields() {
    let catalog = sample_catalog();
    let search = |query: &str| {
        let criteria = RecipeCriteria {
            search_query: Some(query.to_owned()),
            ..Default::default()
        };
        ids(&filter_recipes_with_criteria(&catalog, &criteria))
    };

    // name
    assert_eq!(search("IDLI"), vec!["idli"]);
    // description
    assert_eq!(search("lentil"), vec!["bisi-bele-bath"]);
    // tag
    assert_eq!(search("steamed"), vec!["idli"]);
    // cuisine identifier
    assert_eq!(search("indo-chi"), vec!["chilli-chicken"]);
    assert_eq!(search("kerala"), vec!["egg-roast"]);
    // empty query is ignored
    assert_eq!(search("").len(), catalog.len());
}

#[test]
fn test_search_query_is_not_trimmed() {
    let catalog = sample_catalog();
    let search = |query: &str| {
        let criteria = RecipeCriteria {
            search_query: Some(query.to_owned()),
            ..Default::default()
        };
        ids(&filter_recipes_with_criteria(&catalog, &criteria))
    };

    assert_eq!(search(" idli"), vec!["idli"]);
    assert!(search(" idli ").is_empty());
    assert!(search("  ").is_empty());
}

#[test]
fn test_filter_conjunctivity() {
    let catalog = sample_catalog();
    let singles = [
        RecipeCriteria {
            meal_type: Some(MealType::Dinner),
            ..Default::default()
        },
        RecipeCriteria {
            diet_type: Some(DietType::Egg),
            ..Default::default()
        },
        RecipeCriteria {
            max_cook_time: Some(45),
            ..Default::default()
        },
        RecipeCriteria {
            spice_level_max: Some(4),
            ..Default::default()
        },
    ];
    let combined = RecipeCriteria {
        meal_type: Some(MealType::Dinner),
        diet_type: Some(DietType::Egg),
        max_cook_time: Some(45),
        spice_level_max: Some(4),
        ..Default::default()
    };

    let combined_ids = ids(&filter_recipes_with_criteria(&catalog, &combined));

    let intersection: Vec<String> = catalog
        .iter()
        .map(|r| r.id.clone())
        .filter(|id| {
            singles.iter().all(|criteria| {
                ids(&filter_recipes_with_criteria(&catalog, criteria)).contains(id)
            })
        })
        .collect();

    assert_eq!(combined_ids, intersection);
    assert_eq!(combined_ids, vec!["egg-roast"]);
}
