use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tint_core::Color;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tintkit::models::{
    Adjustment, AppConfig, BlendReport, ColorReport, ContrastReport, GestureScript,
};
use tintkit::services::{AppearanceBridge, GestureReplay, NavigationAppearance};

#[derive(Parser)]
#[command(name = "tintkit")]
#[command(about = "Color contrast, HSB adjustments and pinch-zoom replay for UI theming")]
struct Cli {
    /// Config file (falls back to $TINTKIT_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show brightness, luminance and contrast details for a color
    Inspect {
        /// Hex value or configured color name
        color: String,

        #[arg(long)]
        json: bool,
    },
    /// Check the contrast of a foreground color on a background
    Contrast {
        foreground: String,
        background: String,

        #[arg(long)]
        json: bool,
    },
    /// Apply a color transform
    Adjust {
        color: String,

        #[arg(value_enum)]
        operation: Adjustment,

        /// Amount, ratio or hue rotation in degrees, depending on the operation
        #[arg(short, long, default_value_t = 0.1, allow_negative_numbers = true)]
        amount: f64,

        /// Lower brightness bound for clamp-brightness
        #[arg(long, default_value_t = 0.0)]
        min: f64,

        /// Upper brightness bound for clamp-brightness
        #[arg(long, default_value_t = 1.0)]
        max: f64,
    },
    /// Blend two colors and report their RGB distance
    Blend {
        from: String,
        to: String,

        /// 0.0 keeps FROM, 1.0 yields TO
        #[arg(short, long, default_value_t = 0.5)]
        ratio: f64,

        #[arg(long)]
        json: bool,
    },
    /// Replay a YAML gesture script through the pinch scale
    Zoom {
        script: PathBuf,

        /// Bind the scale to external storage instead of owning it
        #[arg(long)]
        bound: bool,

        /// Initial value of the external storage
        #[arg(long, default_value_t = 1.0, requires = "bound")]
        initial: f64,

        #[arg(long)]
        json: bool,
    },
    /// Publish a navigation bar appearance and print what a subscriber sees
    Navbar {
        #[arg(long)]
        background: Option<String>,

        #[arg(long)]
        title: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tintkit=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var("TINTKIT_CONFIG").ok().map(PathBuf::from));
    let config = AppConfig::load(config_path.as_deref());

    match cli.command {
        Some(Commands::Inspect { color, json }) => run_inspect_command(&config, &color, json),
        Some(Commands::Contrast {
            foreground,
            background,
            json,
        }) => run_contrast_command(&config, &foreground, &background, json),
        Some(Commands::Adjust {
            color,
            operation,
            amount,
            min,
            max,
        }) => run_adjust_command(&config, &color, operation, amount, min, max),
        Some(Commands::Blend {
            from,
            to,
            ratio,
            json,
        }) => run_blend_command(&config, &from, &to, ratio, json),
        Some(Commands::Zoom {
            script,
            bound,
            initial,
            json,
        }) => run_zoom_command(&config, &script, bound.then_some(initial), json),
        Some(Commands::Navbar { background, title }) => {
            run_navbar_command(&config, background.as_deref(), title.as_deref()).await
        }
        None => {
            run_status_command(&config, config_path.as_deref());
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_inspect_command(config: &AppConfig, input: &str, json: bool) -> anyhow::Result<()> {
    let report = ColorReport::new(config.resolve_color(input)?);
    if json {
        return print_json(&report);
    }

    println!("Color:               {}", report.hex);
    println!(
        "RGBA:                {}, {}, {}, {}",
        report.rgba[0], report.rgba[1], report.rgba[2], report.rgba[3]
    );
    println!(
        "HSB:                 {:.1}°, {:.3}, {:.3}",
        report.hsb.hue, report.hsb.saturation, report.hsb.brightness
    );
    println!("Opacity:             {:.3}", report.opacity);
    println!("Perceived brightness {:.4}", report.perceived_brightness);
    println!("Relative luminance   {:.4}", report.relative_luminance);
    println!(
        "Light:               {}",
        if report.is_light { "yes" } else { "no" }
    );
    println!("Text color:          {}", report.contrasting_text_color);
    println!("Best contrast:       {}", report.best_contrasting_color);
    println!("Contrast on white:   {:.2}:1", report.contrast_on_white);
    println!("Contrast on black:   {:.2}:1", report.contrast_on_black);
    Ok(())
}

fn run_contrast_command(
    config: &AppConfig,
    foreground: &str,
    background: &str,
    json: bool,
) -> anyhow::Result<()> {
    let report = ContrastReport::new(
        config.resolve_color(foreground)?,
        config.resolve_color(background)?,
    );
    if json {
        return print_json(&report);
    }

    println!(
        "{} on {}: {:.2}:1 ({})",
        report.foreground, report.background, report.ratio, report.level
    );
    if report.sufficient {
        println!("Sufficient for body text");
    } else {
        println!(
            "Insufficient for body text, suggested foreground: {}",
            report.adaptive_foreground
        );
    }
    Ok(())
}

fn run_adjust_command(
    config: &AppConfig,
    input: &str,
    operation: Adjustment,
    amount: f64,
    min: f64,
    max: f64,
) -> anyhow::Result<()> {
    let color = config.resolve_color(input)?;
    let adjusted = operation.apply(color, amount, min, max);
    tracing::debug!(?operation, amount, from = %color, to = %adjusted, "Adjusted color");
    println!("{adjusted}");
    Ok(())
}

fn run_blend_command(
    config: &AppConfig,
    from: &str,
    to: &str,
    ratio: f64,
    json: bool,
) -> anyhow::Result<()> {
    let report = BlendReport::new(config.resolve_color(from)?, config.resolve_color(to)?, ratio);
    if json {
        return print_json(&report);
    }

    println!("{}", report.blended);
    println!("Distance: {:.4}", report.distance);
    Ok(())
}

/// Replay a gesture script. `bound` carries the initial external value.
fn run_zoom_command(
    config: &AppConfig,
    script_path: &Path,
    bound: Option<f64>,
    json: bool,
) -> anyhow::Result<()> {
    let bounds = config.scale_bounds()?;
    let script = GestureScript::load(script_path)?;
    let replay = GestureReplay::new(bounds);

    let report = match bound {
        Some(initial) => replay.run_bound(&script, tint_core::SharedScale::new(initial)),
        None => replay.run(&script),
    };

    if json {
        return print_json(&report);
    }

    println!("Bounds: {} ..= {}\n", bounds.min(), bounds.max());
    for (i, frame) in report.frames.iter().enumerate() {
        println!(
            "{:>3}  {:<14} {:<8} effective {:>6.3}  persisted {:>6.3}",
            i + 1,
            format!("{:?}", frame.event),
            format!("{:?}", frame.phase),
            frame.effective,
            frame.persisted
        );
    }
    println!("\nFinal scale: {:.3}", report.final_scale);
    Ok(())
}

async fn run_navbar_command(
    config: &AppConfig,
    background: Option<&str>,
    title: Option<&str>,
) -> anyhow::Result<()> {
    let (configured_background, configured_title) = config.navigation_bar_colors()?;

    let resolve = |input: Option<&str>| -> anyhow::Result<Option<Color>> {
        input
            .map(|c| config.resolve_color(c))
            .transpose()
            .context("Invalid navigation bar color")
    };

    let bridge = AppearanceBridge::new();
    let mut subscriber = bridge.subscribe();

    bridge.publish(NavigationAppearance {
        background: resolve(background)?.or(configured_background),
        title: resolve(title)?.or(configured_title),
    });

    subscriber.changed().await?;
    let observed = *subscriber.borrow_and_update();

    let describe = |color: Option<Color>| {
        color
            .map(|c| c.to_hex())
            .unwrap_or_else(|| "(platform default)".to_string())
    };
    println!("Background: {}", describe(observed.background));
    println!("Title:      {}", describe(observed.resolved_title()));
    if let (Some(title), Some(background)) = (observed.resolved_title(), observed.background) {
        println!("Contrast:   {:.2}:1", title.contrast_ratio(background));
    }
    Ok(())
}

fn run_status_command(config: &AppConfig, config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Header
    println!("Tintkit v{VERSION}");
    println!("Color contrast, HSB adjustments and pinch-zoom replay\n");

    println!("Configuration:");
    let source = match config_path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    println!("  Source:  {source}");
    println!("  Scale:   {} ..= {}", config.scale.min, config.scale.max);

    let mut names: Vec<_> = config.colors.keys().collect();
    names.sort();
    if names.is_empty() {
        println!("  Colors:  (none)");
    } else {
        println!("  Colors:");
        for name in names {
            let value = match config.resolve_color(name) {
                Ok(color) => color.to_hex(),
                Err(_) => format!("{} (invalid)", config.colors[name]),
            };
            println!("    {name:<12} {value}");
        }
    }

    // Commands section
    println!("\nCommands:");
    println!("  tintkit inspect   Show details for a color");
    println!("  tintkit contrast  Check foreground/background contrast");
    println!("  tintkit adjust    Apply a color transform");
    println!("  tintkit blend     Blend two colors");
    println!("  tintkit zoom      Replay a pinch gesture script");
    println!("  tintkit navbar    Preview navigation bar colors");
    println!("\nRun 'tintkit --help' for more details.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_zoom_initial_requires_bound() {
        let result = Cli::try_parse_from(["tintkit", "zoom", "pinch.yaml", "--initial", "2.0"]);
        let err = result.err().expect("--initial without --bound must be rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_zoom_initial_with_bound() {
        let cli = Cli::try_parse_from([
            "tintkit",
            "zoom",
            "pinch.yaml",
            "--bound",
            "--initial",
            "2.0",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Zoom { bound, initial, .. }) => {
                assert!(bound);
                assert_eq!(initial, 2.0);
            }
            _ => panic!("Expected Zoom command"),
        }
    }

    #[test]
    fn test_zoom_defaults_to_owned_scale() {
        let cli = Cli::try_parse_from(["tintkit", "zoom", "pinch.yaml"]).unwrap();

        match cli.command {
            Some(Commands::Zoom { bound, initial, .. }) => {
                assert!(!bound);
                assert_eq!(initial, 1.0);
            }
            _ => panic!("Expected Zoom command"),
        }
    }
}
