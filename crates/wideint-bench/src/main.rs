//! Benchmark for wide-integer conversion and the little-endian lane codec.
//!
//! Converts a batch of `i64` samples into 512-bit integers, encodes them back
//! to back into one buffer, decodes them again and checks the round trip.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use wideint::codec::{Reader, WireInt, Writer};
use wideint::{Decimal128, Decimal256, Decimal512, Int512, UInt512};

/// Wide-integer codec benchmark.
#[derive(Parser, Debug)]
#[command(name = "bench-wideint", about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON file holding an array of i64 samples. Random samples are used
    /// when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Number of random samples to generate when no input file is given.
    #[arg(long, default_value_t = 100_000)]
    samples: usize,

    /// Seed for random sample generation.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Timed iterations per phase.
    #[arg(long, default_value_t = 10)]
    iterations: u32,

    /// Write a JSON report to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

/// Timing of one benchmark phase.
#[derive(Debug, Serialize)]
struct PhaseReport {
    name: String,
    avg_ns: u128,
    throughput_mb_s: f64,
}

/// Full benchmark report.
#[derive(Debug, Serialize)]
struct Report {
    samples: usize,
    negative_samples: usize,
    encoded_bytes: usize,
    iterations: u32,
    phases: Vec<PhaseReport>,
}

fn load_samples(cli: &Cli) -> Result<Vec<i64>> {
    match &cli.input {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let samples: Vec<i64> = serde_json::from_str(&json).with_context(|| {
                format!("failed to parse {} as a JSON array of i64", path.display())
            })?;
            tracing::info!(path = %path.display(), count = samples.len(), "loaded samples");
            Ok(samples)
        }
        None => {
            let mut rng = StdRng::seed_from_u64(cli.seed);
            let mut samples: Vec<i64> = (0..cli.samples).map(|_| rng.r#gen()).collect();
            // Always cover the boundaries.
            samples.extend_from_slice(&[0, 1, -1, i64::MIN, i64::MAX]);
            tracing::info!(seed = cli.seed, count = samples.len(), "generated samples");
            Ok(samples)
        }
    }
}

/// Runs `f` once for warmup and then `iterations` times, returning the
/// average duration.
fn time_phase<F>(iterations: u32, mut f: F) -> Result<Duration>
where
    F: FnMut() -> Result<()>,
{
    f()?;
    let start = Instant::now();
    for _ in 0..iterations {
        f()?;
    }
    Ok(start.elapsed() / iterations.max(1))
}

fn phase(name: String, avg: Duration, bytes: usize) -> PhaseReport {
    let throughput_mb_s = (bytes as f64 / 1_000_000.0) / avg.as_secs_f64().max(f64::EPSILON);
    tracing::debug!(phase = %name, avg_ns = avg.as_nanos(), "phase finished");
    println!("{:<24} {:>12?}  {:>10.2} MB/s", name, avg, throughput_mb_s);
    PhaseReport {
        name,
        avg_ns: avg.as_nanos(),
        throughput_mb_s,
    }
}

fn encode_all<T: WireInt>(values: &[T], buf: &mut [u8]) -> Result<()> {
    let mut writer = Writer::new(buf);
    for v in values {
        v.write_to(&mut writer)?;
    }
    Ok(())
}

fn decode_all<T: WireInt>(buf: &[u8], out: &mut Vec<T>) -> Result<()> {
    out.clear();
    let mut reader = Reader::new(buf);
    while !reader.is_empty() {
        out.push(T::read_from(&mut reader)?);
    }
    Ok(())
}

/// Times encode and decode of one value type and verifies the round trip.
fn bench_type<T>(
    label: &'static str,
    samples: &[i64],
    convert: fn(i64) -> T,
    iterations: u32,
    phases: &mut Vec<PhaseReport>,
) -> Result<usize>
where
    T: WireInt + PartialEq + std::fmt::Debug,
{
    let values: Vec<T> = samples.iter().copied().map(convert).collect();
    let mut buf = vec![0u8; values.len() * T::SIZE];
    let mut decoded: Vec<T> = Vec::with_capacity(values.len());

    let encode_time = time_phase(iterations, || encode_all(&values, &mut buf))?;
    phases.push(phase(format!("encode {label}"), encode_time, buf.len()));

    let decode_time = time_phase(iterations, || decode_all(&buf, &mut decoded))?;
    phases.push(phase(format!("decode {label}"), decode_time, buf.len()));

    if decoded != values {
        bail!("{label}: round trip mismatch");
    }
    tracing::info!(value_type = label, bytes = buf.len(), "round trip verified");
    Ok(buf.len())
}

fn run(cli: &Cli) -> Result<()> {
    let samples = load_samples(cli)?;
    let negative_samples = samples.iter().filter(|v| **v < 0).count();

    // Conversion alone
    let mut phases = Vec::new();
    let mut converted = Vec::with_capacity(samples.len());
    let convert_time = time_phase(cli.iterations, || {
        converted.clear();
        converted.extend(samples.iter().map(|v| UInt512::from(Int512::from_int(*v))));
        Ok(())
    })?;
    phases.push(phase(
        "convert i64 -> UInt512".to_string(),
        convert_time,
        samples.len() * UInt512::BYTES,
    ));

    let encoded_bytes = bench_type(
        "UInt512",
        &samples,
        UInt512::from_int,
        cli.iterations,
        &mut phases,
    )?;
    bench_type("Decimal128", &samples, Decimal128::from_int, cli.iterations, &mut phases)?;
    bench_type("Decimal256", &samples, Decimal256::from_int, cli.iterations, &mut phases)?;
    bench_type("Decimal512", &samples, Decimal512::from_int, cli.iterations, &mut phases)?;

    let report = Report {
        samples: samples.len(),
        negative_samples,
        encoded_bytes,
        iterations: cli.iterations,
        phases,
    };

    if let Some(path) = &cli.report {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        println!("\nReport: {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!(version = wideint::VERSION, "bench-wideint starting");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [i64; 6] = [0, 1, -1, 42, i64::MIN, i64::MAX];

    #[test]
    fn test_bench_type_roundtrip() {
        let mut phases = Vec::new();
        let bytes = bench_type("UInt512", &SAMPLES, UInt512::from_int, 1, &mut phases).unwrap();
        assert_eq!(bytes, SAMPLES.len() * UInt512::BYTES);

        let bytes =
            bench_type("Decimal128", &SAMPLES, Decimal128::from_int, 1, &mut phases).unwrap();
        assert_eq!(bytes, SAMPLES.len() * Decimal128::BYTES);

        assert_eq!(phases.len(), 4);
        assert_eq!(phases[0].name, "encode UInt512");
        assert_eq!(phases[3].name, "decode Decimal128");
    }

    #[test]
    fn test_encode_decode_all() {
        let values: Vec<Decimal256> = SAMPLES.iter().copied().map(Decimal256::from_int).collect();
        let mut buf = vec![0u8; values.len() * Decimal256::BYTES];
        encode_all(&values, &mut buf).unwrap();

        let mut decoded: Vec<Decimal256> = Vec::new();
        decode_all(&buf, &mut decoded).unwrap();
        assert_eq!(decoded, values);
    }

    #[test]
    fn test_generated_samples_cover_boundaries() {
        let cli = Cli::parse_from(["bench-wideint", "--samples", "8", "--seed", "7"]);
        let samples = load_samples(&cli).unwrap();
        assert_eq!(samples.len(), 13);
        assert!(samples.contains(&i64::MIN));
        assert!(samples.contains(&i64::MAX));
    }
}
