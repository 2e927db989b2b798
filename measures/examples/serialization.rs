//! Examples of serializing and deserializing measures.
//!
//! A measure is encoded as `{ "value": …, "unit": { "coefficient": …, "constant": …, "symbol": … } }`, and decoding
//! applies the same validation as construction.
//!
//! ```bash
//! cargo run --example serialization --features json
//! ```

#[cfg(feature = "json")]
fn main() {
    use measures::{Length, Measure, ThermodynamicTemperature, Time};
    use serde::{Deserialize, Serialize};

    println!("=== Measure Serialization Examples ===\n");

    // Example 1: Basic serialization to JSON
    println!("1. Basic JSON Serialization:");
    let second = Measure::new(1, Time::SECOND).unwrap();
    println!("   {} → {}", second, second.to_json().unwrap());

    let room = Measure::new(21.5, ThermodynamicTemperature::CELSIUS).unwrap();
    println!("   {} → {}", room, room.to_json().unwrap());
    println!();

    // Example 2: Deserialization, including units the library does not predefine
    println!("2. JSON Deserialization:");
    let json = r#"{ "value": 8, "unit": { "coefficient": 201.168, "symbol": "fur" } }"#;
    let race = Measure::<Length>::from_json(json).unwrap();
    println!("   {} → {} ({})", json, race, race.to(Length::MILE).unwrap());
    println!();

    // Example 3: Invalid records
    println!("3. Rejected Records:");
    for json in [
        r#"{ "value": -1, "unit": { "coefficient": 1, "constant": 0, "symbol": "s" } }"#,
        r#"{ "value": 1, "unit": { "coefficient": 0, "constant": 0, "symbol": "s" } }"#,
        r#"{ "value": 1 "#,
    ] {
        let err = Measure::<Time>::from_json(json).unwrap_err();
        println!("   {} → {}", json, err);
    }
    println!();

    // Example 4: Serializing structs containing measures
    #[derive(Serialize, Deserialize, Debug)]
    struct Run {
        distance: Measure<Length>,
        duration: Measure<Time>,
    }

    println!("4. Serializing Structs with Measures:");
    let run = Run {
        distance: Measure::new(10, Length::KILOMETRE).unwrap(),
        duration: Measure::new(52.5, Time::MINUTE).unwrap(),
    };
    let json = serde_json::to_string_pretty(&run).unwrap();
    println!("   Struct to JSON:\n{}", json);

    let restored: Run = serde_json::from_str(&json).unwrap();
    println!("   Restored: {:?}", restored);
}

#[cfg(not(feature = "json"))]
fn main() {
    println!("This example requires the 'json' feature.");
    println!("Run with: cargo run --example serialization --features json");
}
