//! Output formatting for CLI responses

use std::path::Path;

use anyhow::Error;
use colored::*;
use serde_json::{Value, json};

use fpv_rates_curves::CurveSamples;
use fpv_rates_profile::{Axis, RateProfile};
use fpv_rates_session::ImportOutcome;

use crate::error::error_type_name;

fn print_json(value: &Value, what: &str) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format {} as JSON: {}", what, e),
    }
}

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    print_json(&error_json, "error");
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print success message
pub fn print_success(message: &str, json: bool) {
    if json {
        print_json(
            &json!({
                "success": true,
                "message": message
            }),
            "success message",
        );
    } else {
        println!("{} {}", "✓".green(), message);
    }
}

/// Print warning message
pub fn print_warning(message: &str, json: bool) {
    if json {
        print_json(
            &json!({
                "success": true,
                "warning": message
            }),
            "warning message",
        );
    } else {
        println!("{} {}", "⚠".yellow(), message);
    }
}

/// Print the full rate profile
pub fn print_profile(profile: &RateProfile, path: &Path, json: bool) {
    if json {
        print_json(
            &json!({
                "success": true,
                "path": path.display().to_string(),
                "profile": profile
            }),
            "profile",
        );
        return;
    }

    println!("{} {}", "Rate Profile:".bold(), path.display().to_string().dimmed());
    println!(
        "  {:<6} {:>8} {:>9} {:>6}",
        "Axis".bold(),
        "Center".bold(),
        "Max Rate".bold(),
        "Expo".bold()
    );
    for (axis, params) in profile.rates.iter() {
        println!(
            "  {:<6} {:>8} {:>9} {:>6}",
            axis.name().cyan(),
            params.center,
            params.max_rate,
            params.expo
        );
    }
    println!(
        "  {:<6} mid {} expo {}",
        "thr".cyan(),
        profile.throttle.mid_display(),
        profile.throttle.expo
    );
}

/// Print the result of a dump import
pub fn print_import_outcome(outcome: &ImportOutcome, json: bool) {
    if json {
        print_json(
            &json!({
                "success": true,
                "message": outcome.status_message(),
                "outcome": outcome
            }),
            "import outcome",
        );
        return;
    }

    if outcome.is_success() {
        println!("{}", outcome.status_message().green());
    } else {
        print_warning(&outcome.status_message(), false);
    }
    for rejected in &outcome.rejected {
        print_warning(&rejected.to_string(), false);
    }
    if let Some(rates_type) = &outcome.foreign_rates_type {
        print_warning(
            &format!("Dump uses rates_type {rates_type}; values were read as ACTUAL rates"),
            false,
        );
    }
}

/// Print sampled points of one curve
pub fn print_curve(samples: &CurveSamples, axis: Option<Axis>, json: bool) {
    let name = axis.map_or("throttle", Axis::name);
    let display_scale = axis.map(|_| samples.display_scale());

    if json {
        print_json(
            &json!({
                "success": true,
                "curve": name,
                "points": samples.points(),
                "max_abs_output": samples.max_abs_output(),
                "display_scale": display_scale
            }),
            "curve",
        );
        return;
    }

    match display_scale {
        Some(scale) => println!(
            "{} peak {:.1} deg/s, plot scale ±{:.0}",
            format!("{name} rate curve:").bold(),
            samples.max_abs_output(),
            scale
        ),
        None => println!("{}", "throttle curve:".bold()),
    }
    println!("  {:>8}  {:>10}", "input".bold(), "output".bold());
    for point in samples.points() {
        println!("  {:>8.3}  {:>10.3}", point.input, point.output);
    }
}
