use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Value};

/// Write a random `{"data": [...]}` payload for the form.
#[derive(Debug, Parser)]
#[command(name = "sample-payload", version)]
struct Args {
    /// Number of entries in `data`.
    #[arg(long, default_value_t = 12)]
    count: usize,

    /// PRNG seed; the same seed always yields the same payload.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output file. Defaults to stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

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

    /// Uniform in `0..n`. Modulo bias is irrelevant at these sizes.
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

/// One `data` entry: an uppercase letter, a lowercase letter, or a number
/// written as a string, with equal odds.
fn sample_entry(rng: &mut SimpleRng) -> String {
    match rng.below(3) {
        0 => char::from(b'A' + rng.below(26) as u8).to_string(),
        1 => char::from(b'a' + rng.below(26) as u8).to_string(),
        _ => rng.below(1000).to_string(),
    }
}

fn sample_payload(count: usize, seed: u64) -> Value {
    let mut rng = SimpleRng::new(seed);
    let data: Vec<String> = (0..count).map(|_| sample_entry(&mut rng)).collect();
    json!({ "data": data })
}

fn main() -> Result<()> {
    let args = Args::parse();
    let payload = sample_payload(args.count, args.seed);
    let text = serde_json::to_string_pretty(&payload).context("serializing payload")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {} entries to {}", args.count, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}").context("writing to stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_payload() {
        assert_eq!(sample_payload(20, 7), sample_payload(20, 7));
        assert_ne!(sample_payload(20, 7), sample_payload(20, 8));
    }

    #[test]
    fn entries_are_letters_or_numbers() {
        let payload = sample_payload(200, 1);
        let data = payload["data"].as_array().expect("data array");
        assert_eq!(data.len(), 200);

        for entry in data {
            let s = entry.as_str().expect("string entry");
            let is_letter = s.len() == 1 && s.chars().all(|c| c.is_ascii_alphabetic());
            let is_number = s.parse::<u32>().is_ok_and(|n| n < 1000);
            assert!(is_letter || is_number, "{s}");
        }
    }
}
