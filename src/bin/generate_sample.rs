use std::fs;
use std::path::Path;

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const STATES: [&str; 51] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "District of Columbia",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

fn main() {
    let mut rng = SimpleRng::new(42);

    let sexes = ["female", "male"];
    // (beverage, mean percent, spread)
    let beverages = [
        ("any", 42.0, 4.0),
        ("beer", 30.0, 3.0),
        ("wine", 22.0, 2.5),
        ("spirits", 16.0, 2.0),
    ];

    let out_path = Path::new("data/us_drinking.csv");
    if let Some(dir) = out_path.parent() {
        fs::create_dir_all(dir).expect("Failed to create data directory");
    }

    let mut writer = csv::Writer::from_path(out_path).expect("Failed to create output file");
    writer
        .write_record(["state", "sex", "type", "percent"])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for state in STATES {
        // Per-state offset so a state ranks similarly across filters.
        let state_offset = rng.gauss(0.0, 6.0);

        for sex in sexes {
            let sex_offset = if sex == "male" { 3.0 } else { -3.0 };

            for (beverage, mean, spread) in beverages {
                let percent = (mean + state_offset + sex_offset + rng.gauss(0.0, spread))
                    .clamp(5.0, 75.0);
                let percent_cell = format!("{percent:.1}");
                writer
                    .write_record([state, sex, beverage, percent_cell.as_str()])
                    .expect("Failed to write row");
                rows += 1;
            }
        }
    }

    writer.flush().expect("Failed to flush output");

    println!("Wrote {rows} rows to {}", out_path.display());
}
