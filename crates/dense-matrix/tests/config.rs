//! Integration tests for `Tolerances` and the `MatrixError` messages.

use dense_matrix::config::{EQUALITY_EPSILON, SINGULARITY_THRESHOLD};
use dense_matrix::{MatrixError, Tolerances};
use serde::de::value::{Error as ValueError, MapDeserializer};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Tolerances
// ---------------------------------------------------------------------------

fn deserialize_entries(entries: Vec<(&'static str, f64)>) -> Result<Tolerances, ValueError> {
    let de: MapDeserializer<_, ValueError> = MapDeserializer::new(entries.into_iter());
    Tolerances::deserialize(de)
}

#[test]
fn default_tolerances() {
    let t = Tolerances::default();
    assert_eq!(t.equality(), 1e-7);
    assert_eq!(t.singularity(), 1e-7);
    assert_eq!(t.equality(), EQUALITY_EPSILON);
    assert_eq!(t.singularity(), SINGULARITY_THRESHOLD);
}

#[test]
fn tolerances_reject_negative_and_nan() {
    assert!(Tolerances::new(0.0, 0.0).is_some());
    assert!(Tolerances::new(-1e-9, 1e-7).is_none());
    assert!(Tolerances::new(1e-7, f64::NAN).is_none());
}

#[test]
fn tolerances_deserialize_with_defaults() -> anyhow::Result<()> {
    let t = deserialize_entries(vec![("singularity", 1e-12)])?;
    assert_eq!(t.singularity(), 1e-12);
    assert_eq!(t.equality(), EQUALITY_EPSILON);
    Ok(())
}

#[test]
fn tolerances_deserialize_rejects_negative_and_nan() {
    let err = deserialize_entries(vec![("singularity", -1.0)]).unwrap_err();
    assert!(err.to_string().contains("must be non-negative"), "{}", err);
    assert!(deserialize_entries(vec![("equality", -1e-9)]).is_err());
    assert!(deserialize_entries(vec![("equality", f64::NAN)]).is_err());
}

// ---------------------------------------------------------------------------
// Error messages
// ---------------------------------------------------------------------------

#[test]
fn error_messages_name_the_shapes() {
    let e = MatrixError::InvalidDimensions { rows: -1, cols: 3 };
    assert_eq!(
        e.to_string(),
        "invalid matrix dimensions (-1, 3): rows and cols must be positive"
    );

    let e = MatrixError::DimensionIncompatible {
        left: (3, 2),
        right: (3, 3),
    };
    assert!(e.to_string().contains("3x2 by 3x3"));

    let e = MatrixError::IndexOutOfRange {
        row: 2,
        col: 1,
        rows: 2,
        cols: 2,
    };
    assert_eq!(e.to_string(), "index (2, 1) out of range for a 2x2 matrix");
}

#[test]
fn errors_convert_into_anyhow() {
    let e: anyhow::Error = MatrixError::NotSquare { rows: 2, cols: 3 }.into();
    assert_eq!(e.to_string(), "matrix must be square, got 2x3");
    assert!(e.downcast_ref::<MatrixError>().is_some());
}
