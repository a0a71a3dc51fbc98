use medflow_vitals::{
    classify_blood_pressure, classify_heart_rate, classify_oxygen_saturation, classify_reading,
    classify_respiratory_rate, classify_temperature, Temperature, VitalStatus, VitalsReading,
};
use pretty_assertions::assert_eq;

#[test]
fn blood_pressure_bounds_are_strict() {
    assert_eq!(
        classify_blood_pressure(Some(140.0), Some(90.0)),
        VitalStatus::Normal
    );
    assert_eq!(
        classify_blood_pressure(Some(140.1), Some(80.0)),
        VitalStatus::Warning
    );
    assert_eq!(
        classify_blood_pressure(Some(120.0), Some(90.1)),
        VitalStatus::Warning
    );
    assert_eq!(
        classify_blood_pressure(Some(180.0), Some(120.0)),
        VitalStatus::Warning
    );
    assert_eq!(
        classify_blood_pressure(Some(180.1), Some(80.0)),
        VitalStatus::Critical
    );
    assert_eq!(
        classify_blood_pressure(Some(120.0), Some(120.1)),
        VitalStatus::Critical
    );
}

#[test]
fn textbook_blood_pressure_cases() {
    assert_eq!(
        classify_blood_pressure(Some(181.0), Some(80.0)),
        VitalStatus::Critical
    );
    assert_eq!(
        classify_blood_pressure(Some(140.0), Some(95.0)),
        VitalStatus::Warning
    );
    assert_eq!(
        classify_blood_pressure(Some(120.0), Some(80.0)),
        VitalStatus::Normal
    );
}

#[test]
fn heart_rate_130_is_warning_not_critical() {
    assert_eq!(classify_heart_rate(Some(130.0)), VitalStatus::Warning);
    assert_eq!(classify_heart_rate(Some(130.01)), VitalStatus::Critical);
    assert_eq!(classify_heart_rate(Some(131.0)), VitalStatus::Critical);
    assert_eq!(classify_heart_rate(Some(100.0)), VitalStatus::Normal);
    assert_eq!(classify_heart_rate(Some(101.0)), VitalStatus::Warning);
    assert_eq!(classify_heart_rate(Some(50.0)), VitalStatus::Normal);
    assert_eq!(classify_heart_rate(Some(49.9)), VitalStatus::Warning);
    assert_eq!(classify_heart_rate(Some(40.0)), VitalStatus::Warning);
    assert_eq!(classify_heart_rate(Some(39.9)), VitalStatus::Critical);
}

#[test]
fn temperature_40c_exactly_is_warning() {
    assert_eq!(
        classify_temperature(Some(Temperature::celsius(40.0))),
        VitalStatus::Warning
    );
    assert_eq!(
        classify_temperature(Some(Temperature::celsius(40.01))),
        VitalStatus::Critical
    );
    assert_eq!(
        classify_temperature(Some(Temperature::celsius(38.5))),
        VitalStatus::Normal
    );
    assert_eq!(
        classify_temperature(Some(Temperature::celsius(38.6))),
        VitalStatus::Warning
    );
    assert_eq!(
        classify_temperature(Some(Temperature::celsius(36.0))),
        VitalStatus::Normal
    );
    assert_eq!(
        classify_temperature(Some(Temperature::celsius(35.9))),
        VitalStatus::Warning
    );
    assert_eq!(
        classify_temperature(Some(Temperature::celsius(34.9))),
        VitalStatus::Critical
    );
}

#[test]
fn fahrenheit_converts_before_grading() {
    // (104 - 32) * 5/9 is exactly 40.0, on the strict bound
    assert_eq!(
        classify_temperature(Some(Temperature::fahrenheit(104.0))),
        VitalStatus::Warning
    );
    assert_eq!(
        classify_temperature(Some(Temperature::fahrenheit(104.1))),
        VitalStatus::Critical
    );
    assert_eq!(
        classify_temperature(Some(Temperature::fahrenheit(98.6))),
        VitalStatus::Normal
    );
}

#[test]
fn oxygen_saturation_grid() {
    assert_eq!(classify_oxygen_saturation(Some(95.0)), VitalStatus::Normal);
    assert_eq!(classify_oxygen_saturation(Some(94.9)), VitalStatus::Warning);
    assert_eq!(classify_oxygen_saturation(Some(90.0)), VitalStatus::Warning);
    assert_eq!(
        classify_oxygen_saturation(Some(89.9)),
        VitalStatus::Critical
    );
}

#[test]
fn respiratory_rate_grid() {
    assert_eq!(classify_respiratory_rate(Some(12.0)), VitalStatus::Normal);
    assert_eq!(classify_respiratory_rate(Some(11.9)), VitalStatus::Warning);
    assert_eq!(classify_respiratory_rate(Some(20.0)), VitalStatus::Normal);
    assert_eq!(classify_respiratory_rate(Some(20.1)), VitalStatus::Warning);
    assert_eq!(classify_respiratory_rate(Some(8.0)), VitalStatus::Warning);
    assert_eq!(classify_respiratory_rate(Some(7.9)), VitalStatus::Critical);
    assert_eq!(classify_respiratory_rate(Some(30.0)), VitalStatus::Warning);
    assert_eq!(classify_respiratory_rate(Some(30.1)), VitalStatus::Critical);
}

#[test]
fn one_critical_metric_makes_the_reading_critical() {
    let reading = VitalsReading {
        systolic: Some(185.0),
        diastolic: Some(80.0),
        heart_rate: Some(72.0),
        temperature: Some(Temperature::celsius(36.8)),
        oxygen_saturation: Some(98.0),
        respiratory_rate: Some(14.0),
        ..Default::default()
    };
    assert_eq!(classify_reading(&reading), VitalStatus::Critical);
}

#[test]
fn warnings_do_not_escalate_to_critical() {
    let reading = VitalsReading {
        heart_rate: Some(105.0),
        oxygen_saturation: Some(94.0),
        ..Default::default()
    };
    assert_eq!(classify_reading(&reading), VitalStatus::Warning);
}

#[test]
fn unclassified_measurements_never_affect_the_grade() {
    let reading = VitalsReading {
        blood_glucose: Some(400.0),
        pain_score: Some(10.0),
        gcs_score: Some(3.0),
        ..Default::default()
    };
    assert_eq!(classify_reading(&reading), VitalStatus::Normal);
}

#[test]
fn classification_is_bit_stable_across_calls() {
    let reading = VitalsReading {
        systolic: Some(144.0),
        heart_rate: Some(99.0),
        temperature: Some(Temperature::fahrenheit(100.4)),
        ..Default::default()
    };
    assert_eq!(classify_reading(&reading), classify_reading(&reading));
}
