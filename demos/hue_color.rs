//! CLI application for exploring Hue light colors.
//!
//! Converts between color spaces, names colors and builds state change
//! bodies the same way a Hue bridge client would.
//!
//! Run with: cargo run --example hue_color -- --help

use std::str::FromStr;

use clap::{Parser, Subcommand};
use hue_lights_rs::{
    ChromaticityPoint, Color, ColorGamut, ColorHsb, ColorTemperature, ColorXyy, LightCapabilities,
    LightState, Rgb, StateChange,
};

#[derive(Parser)]
#[command(name = "hue-color")]
#[command(about = "Convert, name and encode Philips Hue light colors", long_about = None)]
struct Cli {
    /// Gamut type letter of the target light (A, B or C)
    #[arg(short, long, global = true)]
    gamut: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Name a color given as hue, saturation and brightness
    Name {
        /// Hue in degrees
        #[arg(allow_negative_numbers = true)]
        hue: f64,
        /// Saturation (0-1)
        sat: f64,
        /// Brightness (0-1)
        brightness: f64,
    },

    /// Convert an RGB color ("#ff8000", "#f80" or "255,128,0")
    Rgb { color: String },

    /// Convert a CIE xy chromaticity with luminance
    Xy {
        x: f64,
        y: f64,
        /// Luminance (0-1)
        #[arg(default_value = "1.0")]
        luminance: f64,
    },

    /// Show a color temperature in Kelvin
    Ct { kelvin: f64 },

    /// Describe a light state JSON object
    State { json: String },

    /// Describe a light capabilities JSON object
    Capabilities { json: String },
}

fn gamut_from_letter(letter: Option<&str>) -> Result<Option<ColorGamut>, String> {
    match letter {
        None => Ok(None),
        Some(letter) => ColorGamut::from_gamut_type(letter)
            .map(Some)
            .ok_or_else(|| format!("Unknown gamut type {letter}, expected A, B or C")),
    }
}

fn print_xyy(color: &ColorXyy, gamut: Option<&ColorGamut>) -> Result<(), Box<dyn std::error::Error>> {
    let hsb = color.to_hsb();
    println!("  xyY:  {}", color);
    println!("  HSB:  {}", hsb);
    println!("  RGB:  {}", color.to_rgb());
    println!("  CCT:  {:.0}K (approx.)", color.cct());

    let mut change = StateChange::new();
    change.color_xyy(color, gamut)?;
    println!("  Body: {}", change.to_json()?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let gamut = gamut_from_letter(cli.gamut.as_deref())?;

    match cli.command {
        Commands::Name { hue, sat, brightness } => {
            let color = ColorHsb::new(hue, sat, brightness)?;
            println!("{}", color.name());
        }

        Commands::Rgb { color } => {
            let rgb = Rgb::from_str(&color)?;
            let (point, luminance) = hue_lights_rs::convert::rgb_to_xyy(&rgb);
            println!("{} ({})", rgb, color);
            print_xyy(&ColorXyy::from_point(point, luminance)?, gamut.as_ref())?;
        }

        Commands::Xy { x, y, luminance } => {
            let color = ColorXyy::from_point(ChromaticityPoint::new(x, y)?, luminance)?;
            if let Some(gamut) = &gamut {
                let inside = gamut.contains(&color.point());
                println!("In gamut: {}", if inside { "yes" } else { "no" });
            }
            print_xyy(&color, gamut.as_ref())?;
        }

        Commands::Ct { kelvin } => {
            let temperature = ColorTemperature::from_kelvin(kelvin)?;
            println!("{} ({} mired)", temperature, temperature.mired());
            if !temperature.is_device_range() {
                println!("  Outside the 153-500 mired range lights accept");
            }
            match temperature.to_xyy(1.0) {
                Ok(color) => print_xyy(&color, gamut.as_ref())?,
                Err(e) => println!("  No color: {}", e),
            }
        }

        Commands::State { json } => {
            let state = LightState::from_json(&json)?;
            println!("State: {}", state);
            if let Some(color) = state.color()? {
                println!("  Mode: {}", state.color_mode().map_or("none".into(), |m| m.to_string()));
                match (color.to_rgb(), color.name()) {
                    (Ok(rgb), Ok(name)) => println!("  Display: {} ({})", rgb, name),
                    (Err(e), _) | (_, Err(e)) => println!("  No display color: {}", e),
                }
            }
        }

        Commands::Capabilities { json } => {
            let caps = LightCapabilities::from_json(&json)?;
            let modes: Vec<String> = caps.color_modes().iter().map(|m| m.to_string()).collect();
            println!("Color modes: {}", if modes.is_empty() { "none".into() } else { modes.join(", ") });
            println!("Dimmable: {}", if caps.is_dimmable() { "yes" } else { "no" });
            println!("Gamut: {}", caps.gamut());
            if let Some(range) = caps.ct_range() {
                println!("Color temperature: {}-{} mired", range.min, range.max);
            }
        }
    }

    Ok(())
}
