//! # Diagnose: walk a handful of photo scores through the pipeline
//!
//! A real host gets its two scores from regression models run over an
//! uploaded photograph. Here a stand-in model maps the mean brightness and
//! the red/blue balance of a tiny synthetic "image" to the two axes, so the
//! whole path from input to kansei words can be seen without any model files.
//!
//! ## The plane
//!
//! ```text
//!             │ past (x ≤ -2)  │ present (-1..1) │ future (x ≥ 2)
//! ────────────┼────────────────┼─────────────────┼────────────────
//! positive    │ nostalgia      │ calm            │ hope
//! negative    │ regret         │ unease          │ dread
//! ```
//!
//! ## Running this example
//!
//! ```text
//! cargo run --example diagnose
//! cargo run --example diagnose -- 2.6 1.8
//! RUST_LOG=kansei_core=debug cargo run --example diagnose
//! ```

use kansei_core::model::{AxisModels, AxisRegressor};
use kansei_core::pipeline::Diagnoser;
use tracing_subscriber::EnvFilter;

/// One RGB pixel, channels in [0.0, 1.0].
type Pixel = [f64; 3];

/// Stand-in for the temporal regressor: darker, warmer pictures read as older.
struct TemporalModel;

impl AxisRegressor for TemporalModel {
    type Input = [Pixel];
    type Error = &'static str;

    fn predict_axis(&self, img: &[Pixel]) -> Result<f64, Self::Error> {
        if img.is_empty() {
            return Err("image has no pixels");
        }
        let n = img.len() as f64;
        let brightness = img.iter().map(|p| (p[0] + p[1] + p[2]) / 3.0).sum::<f64>() / n;
        let warmth = img.iter().map(|p| p[0] - p[2]).sum::<f64>() / n;
        Ok((brightness - 0.5) * 8.0 - warmth * 2.0)
    }
}

/// Stand-in for the valence regressor: saturated greens and blues read as pleasant.
struct ValenceModel;

impl AxisRegressor for ValenceModel {
    type Input = [Pixel];
    type Error = &'static str;

    fn predict_axis(&self, img: &[Pixel]) -> Result<f64, Self::Error> {
        if img.is_empty() {
            return Err("image has no pixels");
        }
        let n = img.len() as f64;
        let lush = img.iter().map(|p| p[1] + 0.5 * p[2] - 0.8 * p[0]).sum::<f64>() / n;
        Ok(lush * 4.0)
    }
}

fn print_diagnosis(title: &str, d: &kansei_core::Diagnosis) {
    println!("── {title}");
    println!(
        "   scores  x={:+.3}  y={:+.3}",
        d.scores.x, d.scores.y
    );
    println!("   labels  x={:+}  y={:+}", d.x_bucket.value(), d.y_bucket.value());
    println!("   region  {} ({})", d.quadrant, d.quadrant.label_ja());
    println!("   words   {}", d.words.join("、"));
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let diagnoser = Diagnoser::new();

    // ── Explicit scores from the command line ────────────────────────────────
    let args: Vec<f64> = std::env::args()
        .skip(1)
        .filter_map(|a| a.parse().ok())
        .collect();
    if let [x, y] = args[..] {
        match diagnoser.diagnose(x, y) {
            Ok(d) => print_diagnosis("command line", &d),
            Err(e) => eprintln!("cannot diagnose ({x}, {y}): {e}"),
        }
        return;
    }

    println!("kansei-core: photo impression diagnosis");
    println!("========================================\n");

    // ── Synthetic images through the stand-in models ─────────────────────────
    let models = AxisModels::new(TemporalModel, ValenceModel);

    let images: &[(&str, Vec<Pixel>)] = &[
        ("sunlit meadow", vec![[0.85, 0.95, 0.7]; 16]),
        ("sepia portrait", vec![[0.55, 0.35, 0.15]; 16]),
        ("grey office", vec![[0.45, 0.45, 0.47]; 16]),
        ("storm at dusk", vec![[0.3, 0.05, 0.1]; 16]),
        ("empty frame", Vec::new()),
    ];

    for (title, pixels) in images {
        match diagnoser.diagnose_with(&models, pixels.as_slice()) {
            Ok(d) => print_diagnosis(title, &d),
            Err(e) => println!("── {title}\n   error   {e}\n"),
        }
    }

    // ── Boundary walk along the x axis ───────────────────────────────────────
    println!("── bucket boundaries (x axis, y fixed at +1.0)");
    for x in [-2.5, -2.4, -1.5, -1.4, -0.1, 0.0, 1.4, 1.5, 2.4, 2.5] {
        let d = diagnoser.diagnose(x, 1.0).expect("finite scores always diagnose");
        println!("   x={x:+.2} → {:+}  {}", d.x_bucket.value(), d.quadrant);
    }
}
