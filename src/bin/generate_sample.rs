//! Writes `sample_restaurants.csv`, a deterministic synthetic dataset for
//! trying out the dashboard.  A small fraction of rows has a required
//! field blanked so the loader's cleaning pass has something to drop.

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

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const CITIES: [&str; 6] = ["Bangalore", "Chennai", "Delhi", "Hyderabad", "Mumbai", "Pune"];

// (cuisine, typical cost for two)
const CUISINES: [(&str, f64); 8] = [
    ("North Indian", 350.0),
    ("South Indian", 180.0),
    ("Chinese", 300.0),
    ("Pizza", 400.0),
    ("Biryani", 280.0),
    ("Cafe", 250.0),
    ("Desserts", 150.0),
    ("Street Food", 120.0),
];

const NAME_FIRST: [&str; 10] = [
    "Spice", "Royal", "Golden", "Corner", "Urban", "Coastal", "Garden", "Grand", "Tandoori",
    "Velvet",
];
const NAME_SECOND: [&str; 10] = [
    "Villa", "Kitchen", "House", "Bites", "Junction", "Tadka", "Court", "Express", "Garden",
    "Story",
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = "sample_restaurants.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;
    writer
        .write_record(["name", "city", "cuisine", "rating", "rating_count", "cost"])
        .context("writing header")?;

    let rows_per_city = 120;
    let mut rows = 0usize;

    for city in CITIES {
        for i in 0..rows_per_city {
            let (cuisine, base_cost) = CUISINES[(rng.next_u64() % CUISINES.len() as u64) as usize];

            let name = format!(
                "{} {} {}",
                rng.pick(&NAME_FIRST),
                rng.pick(&NAME_SECOND),
                i + 1
            );

            let rating = (rng.gauss(3.9, 0.5).clamp(2.0, 5.0) * 10.0).round() / 10.0;
            // Log-normal-ish spread: a few places with huge followings.
            let rating_count = rng.gauss(5.5, 1.4).exp().clamp(0.0, 500_000.0) as u64;
            let cost = rng.gauss(base_cost, base_cost * 0.25).max(80.0).round();

            // Roughly 3% dirty rows so the loader's dropna path is visible.
            let dirty = rng.next_f64() < 0.03;

            let rating_field = if dirty {
                String::new()
            } else {
                format!("{rating:.1}")
            };
            let count_field = rating_count.to_string();
            let cost_field = format!("{cost:.0}");

            writer
                .write_record([
                    name.as_str(),
                    city,
                    cuisine,
                    rating_field.as_str(),
                    count_field.as_str(),
                    cost_field.as_str(),
                ])
                .context("writing row")?;
            rows += 1;
        }
    }

    writer.flush().context("flushing output")?;
    println!("Wrote {rows} restaurants across {} cities to {output_path}", CITIES.len());
    Ok(())
}
