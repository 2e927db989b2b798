//! Minimal end-to-end example: build measures, compare them and convert between units.

use measures::{Magnitude, Measure, Speed, ThermodynamicTemperature, Time, Unit};

fn main() {
    let four_seconds = Measure::new(4, Time::SECOND).unwrap();
    let one_minute = Measure::new(1, Time::MINUTE).unwrap();
    assert!(four_seconds.is_less_than(&one_minute));
    println!("{} < {}", four_seconds, one_minute);

    let mut v = Measure::new(5, Speed::KILOMETRES_PER_HOUR).unwrap();
    v.convert(Speed::METRES_PER_SECOND).unwrap();
    println!("5 km/h = {}", v);

    let kilokelvin = ThermodynamicTemperature::KELVIN.with_magnitude(Magnitude::Kilo);
    let hot = Measure::new(5, kilokelvin).unwrap();
    println!("{} = {}", hot, hot.to(ThermodynamicTemperature::CELSIUS).unwrap());

    match Measure::new(-1, Time::SECOND) {
        Ok(m) => println!("unexpected: {}", m),
        Err(err) => println!("rejected: {}", err),
    }
}
