use fitdb_core::{
    field_props,
    fragment::catalog,
    prelude::*,
    validate::FieldError,
};
use proptest::prelude::*;
use serde_json::{Value, json};

fn registry() -> Registry {
    Registry::assemble().unwrap()
}

fn squat() -> Record {
    Record::new()
        .with(Field::Id, "50c1fc75-0975-45f8-8177-ff4988b00de2")
        .with(Field::Timestamp, 1_700_000_000_000_i64)
        .with(Field::Name, "Barbell Squat")
        .with(Field::Desc, "")
        .with(Field::Enabled, true)
        .with(Field::Favorited, false)
        .with(Field::ExerciseInputs, json!(["reps", "weightLbs"]))
}

fn body_fat_result(percent: f64) -> Record {
    Record::new()
        .with(Field::Id, "0b8b4e4a-4f6e-4c1d-9d0b-5a2c7f1e3d21")
        .with(Field::Timestamp, 1_700_000_000_000_i64)
        .with(Field::ParentId, "43e3fc4e-b419-468c-9888-b5e072d81dfb")
        .with(Field::Note, "")
        .with(Field::Percent, percent)
}

#[test]
fn parent_child_links_round_trip() {
    let registry = registry();

    for ty in RecordType::ALL.iter().copied() {
        if let Some(parent) = registry.parent_type(ty) {
            assert_eq!(registry.child_type(parent), Some(ty));
            assert_eq!(registry.group(parent), Group::Parent);
        }
        if let Some(child) = registry.child_type(ty) {
            assert_eq!(registry.parent_type(child), Some(ty));
            assert_eq!(registry.group(child), Group::Child);
        }
    }
}

#[test]
fn every_default_is_accepted_by_its_validator() {
    let registry = registry();

    for schema in registry.schemas() {
        for field in schema.validator.fields() {
            let props = schema.field_props_for(field).unwrap();
            if let Some(value) = props.default_value() {
                assert!(props.validator.accepts(&value), "{field}");
            }
        }
    }
}

#[test]
fn inspect_format_never_panics() {
    let samples = [json!(null), json!(0), json!("text"), json!([1, 2]), json!({ "a": 1 })];

    for field in Field::ALL.iter().copied() {
        let props = field_props::get(field);
        let _ = props.inspect(None);
        for sample in &samples {
            let _ = props.inspect(Some(sample));
        }
        if let Some(value) = props.default_value() {
            let _ = props.inspect(Some(&value));
        }
    }
}

#[test]
fn name_boundaries() {
    assert!(catalog::NAME.accepts(&json!("a")));
    assert!(catalog::NAME.accepts(&json!("a".repeat(50))));
    assert!(!catalog::NAME.accepts(&json!("")));
    assert!(!catalog::NAME.accepts(&json!("a".repeat(51))));
}

#[test]
fn percent_boundaries() {
    assert!(catalog::PERCENT.accepts(&json!(0)));
    assert!(catalog::PERCENT.accepts(&json!(100)));
    assert!(!catalog::PERCENT.accepts(&json!(-1)));
    assert!(!catalog::PERCENT.accepts(&json!(100.0001)));
}

#[test]
fn workout_with_extra_key_names_it() {
    let registry = registry();
    let mut workout = registry
        .defaults(RecordType::Workout)
        .with(Field::Name, "Push Day")
        .with(Field::ExerciseIds, json!(["50c1fc75-0975-45f8-8177-ff4988b00de2"]));
    workout.insert("foo".to_string(), json!(1));

    let errors = registry.validate(RecordType::Workout, &workout).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].is_unknown());
    assert_eq!(errors[0].key(), "foo");
}

#[test]
fn exercise_scenario() {
    let registry = registry();

    assert!(registry.validate(RecordType::Exercise, &squat()).is_ok());

    let jumping = squat().with(Field::ExerciseInputs, json!(["reps", "jumping"]));
    let errors = registry
        .validate(RecordType::Exercise, &jumping)
        .unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].key(), "exerciseInputs");
}

#[test]
fn empty_workout_fails_but_instructional_exercise_passes() {
    let registry = registry();

    let workout = registry
        .defaults(RecordType::Workout)
        .with(Field::Name, "Empty")
        .with(Field::ExerciseIds, json!([]));
    let errors = registry.validate(RecordType::Workout, &workout).unwrap_err();
    assert!(matches!(
        errors.for_key("exerciseIds"),
        Some(FieldError::Invalid { message, .. }) if *message == field_props::get(Field::ExerciseIds).validation_message
    ));

    let stretch = squat().with(Field::ExerciseInputs, json!([]));
    assert!(registry.validate(RecordType::Exercise, &stretch).is_ok());
}

#[test]
fn measurement_result_percent_scenario() {
    let registry = registry();

    let errors = registry
        .validate(RecordType::MeasurementResult, &body_fat_result(150.0))
        .unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].key(), "percent");

    assert!(
        registry
            .validate(RecordType::MeasurementResult, &body_fat_result(55.0))
            .is_ok()
    );
}

#[test]
fn table_projection_truncates_without_touching_values() {
    let registry = registry();
    let long_name = "x".repeat(50);
    let record = squat().with(Field::Name, long_name.as_str());

    let name_column = registry
        .table_columns(RecordType::Exercise)
        .iter()
        .find(|c| c.field == Field::Name && !c.hidden)
        .unwrap();

    assert!(name_column.render(&record).chars().count() < long_name.len());
    assert_eq!(record.str_field(Field::Name), Some(long_name.as_str()));
}

proptest! {
    #[test]
    fn validating_twice_is_stable(
        name in "[A-Za-z][A-Za-z ]{0,40}",
        desc in "[ a-z.]{0,120}",
        favorited in any::<bool>(),
    ) {
        let registry = registry();
        let record = squat()
            .with(Field::Name, format!("  {name}"))
            .with(Field::Desc, desc)
            .with(Field::Favorited, favorited);

        let once = registry.validate(RecordType::Exercise, &record).unwrap();
        let twice = registry.validate(RecordType::Exercise, &once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn percent_outside_unit_interval_is_rejected(n in prop_oneof![-1.0e6f64..-0.0001, 100.0001f64..1.0e6]) {
        let registry = registry();

        let result = registry.validate(RecordType::MeasurementResult, &body_fat_result(n));
        prop_assert!(result.is_err());
    }

    #[test]
    fn slugs_parse_back(i in 0usize..8) {
        let ty = RecordType::ALL[i];

        prop_assert_eq!(ty.as_str().parse::<RecordType>().unwrap(), ty);
        prop_assert_eq!(serde_json::to_value(ty).unwrap(), Value::String(ty.as_str().to_string()));
    }
}
