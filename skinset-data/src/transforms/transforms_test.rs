// skinset-data/src/transforms/transforms_test.rs

use super::*;

fn add_one(x: &i32) -> Result<i32, DataError> {
    Ok(x + 1)
}

fn to_label(x: &i32) -> Result<String, DataError> {
    Ok(format!("#{}", x))
}

fn fail_on_zero(x: &i32) -> Result<i32, DataError> {
    if *x == 0 {
        Err(DataError::TransformFailed("zero".to_string()))
    } else {
        Ok(*x)
    }
}

#[test]
fn test_identity_returns_clone() {
    let sample = vec![1.0f32, 2.0, 3.0];
    let out = Identity::new().apply(&sample).unwrap();
    assert_eq!(out, sample);
}

#[test]
fn test_closure_is_a_transform() {
    let square = |x: &i32| Ok::<_, DataError>(x * x);
    assert_eq!(square.apply(&4).unwrap(), 16);
}

#[test]
fn test_compose_applies_in_order() {
    let pipeline = Compose::new(add_one, to_label);
    assert_eq!(pipeline.apply(&41).unwrap(), "#42");
}

#[test]
fn test_then_builds_compose() {
    let pipeline = add_one.then(add_one).then(to_label);
    assert_eq!(pipeline.apply(&0).unwrap(), "#2");
}

#[test]
fn test_compose_short_circuits_on_first_error() {
    let pipeline = Compose::new(fail_on_zero, to_label);
    assert_eq!(
        pipeline.apply(&0).unwrap_err(),
        DataError::TransformFailed("zero".to_string())
    );
    assert_eq!(pipeline.apply(&5).unwrap(), "#5");
}

#[test]
fn test_compose_propagates_second_error() {
    let pipeline = Compose::new(Identity, fail_on_zero);
    assert!(pipeline.apply(&0).is_err());
    assert_eq!(pipeline.apply(&3).unwrap(), 3);
}
