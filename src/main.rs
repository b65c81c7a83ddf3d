use std::path::PathBuf;
use std::process;

use chordfret::instrument::parse_tuning;
use chordfret::{parse_chord, ranked_voicings, ChordError, FingerPlacement, Instrument};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Subcommand)]
enum Command {
    /// Print the notes of a chord symbol
    Notes {
        symbol: String,
        #[arg(long)]
        json: bool,
    },
    /// Transpose a chord symbol by a number of semitones
    Transpose {
        symbol: String,
        #[arg(allow_hyphen_values = true)]
        halfsteps: i32,
    },
    /// Find the easiest fingering of a chord on a fretted instrument
    Voice {
        symbol: String,
        /// Built-in instrument (ukulele, baritone-ukulele, guitar, mandolin, bass)
        #[arg(short, long, default_value = "ukulele")]
        instrument: String,
        /// YAML instrument definition, overrides --instrument
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Comma separated open-string notes, e.g. G,C,E,A
        #[arg(short, long)]
        tuning: Option<String>,
        #[arg(long)]
        max_fret: Option<u8>,
        #[arg(long)]
        max_span: Option<u8>,
        /// List every voicing, easiest first
        #[arg(long)]
        all: bool,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser)]
#[command(name = "chordfret")]
#[command(about = "Chord symbol notes and fretted-instrument fingerings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoicingReport {
    frets: Vec<u8>,
    score: u32,
    placements: Vec<FingerPlacement>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceReport {
    chord: String,
    // Keeps the kebab-case keys of the YAML instrument file, so it can be saved
    // and passed back with --config
    instrument: Instrument,
    voicings: Vec<VoicingReport>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), ChordError> {
    match command {
        Command::Notes { symbol, json } => {
            let chord = parse_chord(&symbol)?;
            if json {
                print_json(&chord.summary())?;
            } else {
                println!("{}: {}", chord, chord.note_names().join(" "));
            }
        }
        Command::Transpose { symbol, halfsteps } => {
            let chord = parse_chord(&symbol)?;
            println!("{}", chord.transposed(halfsteps));
        }
        Command::Voice {
            symbol,
            instrument,
            config,
            tuning,
            max_fret,
            max_span,
            all,
            json,
        } => {
            let chord = parse_chord(&symbol)?;
            let instrument = load_instrument(&instrument, config, tuning)?;
            let max_fret = max_fret.unwrap_or(instrument.max_fret);
            let max_span = max_span.unwrap_or(instrument.max_span.min(max_fret));
            let instrument = instrument.with_limits(max_fret, max_span)?;

            let mut voicings = ranked_voicings(&chord, &instrument);
            if !all {
                voicings.truncate(1);
            }
            let report = VoiceReport {
                chord: chord.to_string(),
                voicings: voicings
                    .iter()
                    .map(|v| VoicingReport {
                        frets: v.frets.clone(),
                        score: v.score(),
                        placements: v.finger_placements(),
                    })
                    .collect(),
                instrument,
            };

            if json {
                print_json(&report)?;
            } else {
                print_voice_report(&report);
            }
        }
    }
    Ok(())
}

fn load_instrument(
    preset: &str,
    config: Option<PathBuf>,
    tuning: Option<String>,
) -> Result<Instrument, ChordError> {
    if let Some(path) = config {
        return Instrument::load(path);
    }
    if let Some(tuning) = tuning {
        return Instrument::new("Custom", parse_tuning(tuning.split(','))?);
    }
    Instrument::preset(preset).ok_or_else(|| {
        let known: Vec<&str> = Instrument::preset_names().collect();
        ChordError::Config(format!(
            "unknown instrument '{}' (known: {})",
            preset,
            known.join(", ")
        ))
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ChordError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ChordError::Config(format!("cannot serialize output: {}", e)))?;
    println!("{}", json);
    Ok(())
}

fn print_voice_report(report: &VoiceReport) {
    let tuning = report.instrument.tuning_names().join(" ");
    if report.voicings.is_empty() {
        println!(
            "{}: no voicing on {} ({})",
            report.chord, report.instrument.name, tuning
        );
        return;
    }

    println!("{} on {} ({})", report.chord, report.instrument.name, tuning);
    for voicing in &report.voicings {
        let frets: Vec<String> = voicing.frets.iter().map(|f| f.to_string()).collect();
        println!("  frets {}  (score {})", frets.join(" "), voicing.score);
        for p in &voicing.placements {
            println!("    string {} fret {} finger {}", p.string, p.fret, p.finger);
        }
    }
}
