/// Plain-text rendering of recommendations for the non-interactive command
use nextstep_core::Recommendation;
use std::fmt::Write;

pub const NO_RECOMMENDATIONS: &str = "No recommendations found. Try different inputs.";

pub fn format_recommendations(name: &str, recommendations: &[Recommendation]) -> String {
    if recommendations.is_empty() {
        return format!("{}\n", NO_RECOMMENDATIONS);
    }

    let mut out = format!("Hi {}, here are your recommendations:\n", name);
    for rec in recommendations {
        let _ = writeln!(out, "\n  {}", rec.career);
        let _ = writeln!(out, "  {}", rec.description);
        let _ = writeln!(out, "  Roadmap:");
        for (i, step) in rec.roadmap.iter().enumerate() {
            let _ = writeln!(out, "    {}. {}", i + 1, step);
        }
    }
    out
}
