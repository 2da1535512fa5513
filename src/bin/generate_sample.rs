use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const AIRLINES: [&str; 6] = [
    "AirAsia",
    "Air_India",
    "GO_FIRST",
    "Indigo",
    "SpiceJet",
    "Vistara",
];
const CITIES: [&str; 6] = [
    "Bangalore",
    "Chennai",
    "Delhi",
    "Hyderabad",
    "Kolkata",
    "Mumbai",
];
const CLASSES: [&str; 2] = ["Business", "Economy"];
const STOPS: [&str; 3] = ["zero", "one", "two_or_more"];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = "airlines_flights_data.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record([
        "airline",
        "source_city",
        "destination_city",
        "class",
        "stops",
        "duration",
        "price",
    ])?;

    let rows = 5000;
    for _ in 0..rows {
        let airline = *rng.pick(&AIRLINES);
        let source = *rng.pick(&CITIES);
        let destination = loop {
            let city = *rng.pick(&CITIES);
            if city != source {
                break city;
            }
        };
        let class = *rng.pick(&CLASSES);
        let stops = *rng.pick(&STOPS);

        // Duration grows with stop count; price with class and duration.
        let base_hours = 1.5 + rng.next_f64() * 3.0;
        let duration = match stops {
            "zero" => base_hours,
            "one" => base_hours + 2.0 + rng.next_f64() * 3.0,
            _ => base_hours + 5.0 + rng.next_f64() * 6.0,
        };
        let class_factor = if class == "Business" { 5.0 } else { 1.0 };
        let price = (2000.0 + duration * 600.0 + rng.next_f64() * 3000.0) * class_factor;

        let duration_s = format!("{duration:.2}");
        let price_s = format!("{price:.0}");
        writer.write_record([
            airline,
            source,
            destination,
            class,
            stops,
            duration_s.as_str(),
            price_s.as_str(),
        ])?;
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {rows} flights to {output_path}");
    Ok(())
}
