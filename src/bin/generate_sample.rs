use std::fs::File;
use std::io::{BufWriter, Result, Write};

/// Minimal deterministic PRNG (splitmix64)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
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

/// Force response of a damped oscillation at time `t`.
fn damped_force(t: f64, frequency: f64, damping: f64, amplitude: f64) -> f64 {
    amplitude * (-damping * t).exp() * (std::f64::consts::TAU * frequency * t).sin()
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // One run per parameter set: (frequency [Hz], damping, amplitude [N])
    let runs = [(1.4, 0.35, 180.0), (1.1, 0.25, 240.0), (0.9, 0.5, 150.0)];

    let time_step = 0.01;
    let steps = 500;
    let noise_level = 1.5;

    let output_path = "sample_forces.txt";
    let mut out = BufWriter::new(File::create(output_path)?);

    for (run, &(frequency, damping, amplitude)) in runs.iter().enumerate() {
        writeln!(out, "# run {}; rendering: cpu; time: real time", run + 1)?;
        for step in 0..steps {
            let t = step as f64 * time_step;
            let force = damped_force(t, frequency, damping, amplitude) + rng.gauss(0.0, noise_level);
            writeln!(out, "{t:.3} {force:.4}")?;
        }
    }
    out.flush()?;

    println!("Wrote {} runs ({steps} samples each) to {output_path}", runs.len());
    Ok(())
}
