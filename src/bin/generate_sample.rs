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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Quadrant label for a score, matching the dashboard's default thresholds.
fn quadrant_label(score: f64) -> &'static str {
    if score >= 80.0 {
        "Ganho de Equity"
    } else if score >= 60.0 {
        "Opção de Compra"
    } else if score >= 40.0 {
        "Manutenção"
    } else {
        "Diluição"
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let first_names = [
        "João", "Maria", "Pedro", "Ana", "Carlos", "Beatriz", "Lucas", "Fernanda", "Rafael",
        "Juliana",
    ];
    let last_names = [
        "Silva", "Santos", "Costa", "Lima", "Souza", "Oliveira", "Pereira", "Almeida",
    ];

    // (team, mean score, spread)
    let teams = [
        ("Vendas", 68.0, 18.0),
        ("Marketing", 55.0, 20.0),
        ("Operações", 62.0, 15.0),
        ("Financeiro", 72.0, 12.0),
    ];

    let output_path = "partnership.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;
    writer
        .write_record(["Funcionario", "Pontuacao", "Quadrante", "Equipe"])
        .context("writing header")?;

    let mut rows = 0usize;
    for (team, mean, spread) in teams {
        for _ in 0..10 {
            let first = first_names[(rng.next_u64() % first_names.len() as u64) as usize];
            let last = last_names[(rng.next_u64() % last_names.len() as u64) as usize];
            // Round before labelling so the written label matches the score
            // as the dashboard will re-read it.
            let score = (rng.gauss(mean, spread).clamp(0.0, 100.0) * 10.0).round() / 10.0;

            writer
                .write_record([
                    format!("{first} {last}"),
                    format!("{score:.1}"),
                    quadrant_label(score).to_string(),
                    team.to_string(),
                ])
                .with_context(|| format!("writing row {rows}"))?;
            rows += 1;
        }
    }

    writer.flush().context("flushing output")?;
    println!("Wrote {rows} advisors to {output_path}");
    Ok(())
}
