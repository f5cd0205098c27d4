use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

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

struct SampleLaunch {
    flight_number: i64,
    launch_site: String,
    class: i64,
    payload_mass_kg: f64,
    booster_version_category: String,
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let sites = [
        "CCAFS LC-40",
        "VAFB SLC-4E",
        "KSC LC-39A",
        "CCAFS SLC-40",
    ];
    // (category, typical payload kg, landing success probability)
    let boosters: [(&str, f64, f64); 5] = [
        ("v1.0", 2_500.0, 0.10),
        ("v1.1", 3_500.0, 0.25),
        ("FT", 5_000.0, 0.65),
        ("B4", 5_800.0, 0.75),
        ("B5", 6_200.0, 0.90),
    ];

    let n_launches = 56;
    let mut launches = Vec::with_capacity(n_launches);

    for flight in 0..n_launches {
        // Booster generations roll over as the flight number grows.
        let era = (flight * boosters.len()) / n_launches;
        let (booster, typical_mass, success_rate) = boosters[era];

        let site = sites[(rng.next_u64() % sites.len() as u64) as usize];

        let payload_mass_kg = rng
            .gauss(typical_mass, 1_800.0)
            .clamp(300.0, 9_600.0);
        // Heavier payloads land a little less often.
        let p = (success_rate - payload_mass_kg / 40_000.0).clamp(0.05, 0.95);
        let class = i64::from(rng.next_f64() < p);

        launches.push(SampleLaunch {
            flight_number: flight as i64 + 1,
            launch_site: site.to_string(),
            class,
            payload_mass_kg: (payload_mass_kg * 10.0).round() / 10.0,
            booster_version_category: booster.to_string(),
        });
    }

    write_csv(&launches, "spacex_launch_dash.csv");
    write_parquet(&launches, "spacex_launch_dash.parquet");

    println!(
        "Wrote {} launches to spacex_launch_dash.csv / .parquet",
        launches.len()
    );
}

fn write_csv(launches: &[SampleLaunch], path: &str) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create CSV file");
    writer
        .write_record([
            "Flight Number",
            "Launch Site",
            "class",
            "Payload Mass (kg)",
            "Booster Version Category",
        ])
        .expect("Failed to write CSV header");

    for launch in launches {
        writer
            .write_record([
                launch.flight_number.to_string(),
                launch.launch_site.clone(),
                launch.class.to_string(),
                format!("{:.1}", launch.payload_mass_kg),
                launch.booster_version_category.clone(),
            ])
            .expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV");
}

fn write_parquet(launches: &[SampleLaunch], path: &str) {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let flight_array = Int64Array::from(
        launches.iter().map(|l| l.flight_number).collect::<Vec<_>>(),
    );
    let site_array = StringArray::from(
        launches
            .iter()
            .map(|l| l.launch_site.as_str())
            .collect::<Vec<_>>(),
    );
    let class_array = Int64Array::from(launches.iter().map(|l| l.class).collect::<Vec<_>>());
    let mass_array = Float64Array::from(
        launches
            .iter()
            .map(|l| l.payload_mass_kg)
            .collect::<Vec<_>>(),
    );
    let booster_array = StringArray::from(
        launches
            .iter()
            .map(|l| l.booster_version_category.as_str())
            .collect::<Vec<_>>(),
    );

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(flight_array),
            Arc::new(site_array),
            Arc::new(class_array),
            Arc::new(mass_array),
            Arc::new(booster_array),
        ],
    )
    .expect("Failed to create RecordBatch");

    let file = std::fs::File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}
