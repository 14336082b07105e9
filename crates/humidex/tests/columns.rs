//! Table helpers against the scalar formulas.

use approx::assert_relative_eq;
use thermowave_humidex::{
    HumidexError, dewpoint, humidex, with_dewpoint, with_humidex, with_humidex_from_humidity,
};
use thermowave_table::{Column, ObservationTable, TableError};

fn table() -> ObservationTable {
    ObservationTable::from_columns([
        ("tas", Column::Float(vec![25.0, 30.0, f64::NAN])),
        ("hurs", Column::Int(vec![60, 80, 50])),
    ])
    .unwrap()
}

#[test]
fn humidex_from_humidity_matches_scalar() {
    let out = with_humidex_from_humidity(&table(), "tas", "hurs", "humidex").unwrap();
    let h = out.float_column("humidex").unwrap();
    assert_relative_eq!(h[0], 30.293857, epsilon = 1e-5);
    assert_relative_eq!(h[1], humidex(30.0, dewpoint(30.0, 80.0)), epsilon = 1e-12);
    assert!(h[2].is_nan());
    assert_eq!(out.column_names(), &["tas", "hurs", "humidex"]);
}

#[test]
fn two_step_equals_one_step() {
    let t = with_dewpoint(&table(), "tas", "hurs", "tdps").unwrap();
    let t = with_humidex(&t, "tas", "tdps", "humidex").unwrap();
    let direct = with_humidex_from_humidity(&table(), "tas", "hurs", "humidex").unwrap();
    let a = t.float_column("humidex").unwrap();
    let b = direct.float_column("humidex").unwrap();
    for i in 0..2 {
        assert_relative_eq!(a[i], b[i], epsilon = 1e-12);
    }
}

#[test]
fn missing_input_column() {
    let result = with_humidex(&table(), "tas", "tdps", "humidex");
    assert_eq!(
        result,
        Err(HumidexError::Table(TableError::MissingColumn {
            name: "tdps".to_string()
        }))
    );
}

#[test]
fn output_must_not_overwrite_input() {
    assert!(matches!(
        with_dewpoint(&table(), "tas", "hurs", "tas"),
        Err(HumidexError::OverwritesInput { .. })
    ));
}
