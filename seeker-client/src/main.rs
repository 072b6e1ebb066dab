use anyhow::{Context, Result};
use clap::Parser;
use seeker_client::{config_from_settings, load_script, load_settings, HeadlessRunner};
use seeker_shared::{EventScript, SeekerSettings};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless replay of the pointer seeker", long_about = None)]
struct Args {
    /// JSON file with frame-stamped pointer events
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// JSON settings file; missing fields use the defaults
    #[arg(short = 'c', long)]
    settings: Option<PathBuf>,

    /// Maximum number of frames to render
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Write frame snapshots here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the entity speed (units per frame)
    #[arg(long)]
    speed: Option<f32>,

    /// Override the capture radius
    #[arg(long)]
    radius: Option<f32>,

    /// Don't draw the guide line to the pointer
    #[arg(long)]
    no_guide: bool,

    /// Stop once the script is done and the entity has arrived
    #[arg(long)]
    until_settled: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    log::info!("Seeker client starting...");

    let mut settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => SeekerSettings::default(),
    };
    if let Some(speed) = args.speed {
        settings.speed = speed;
    }
    if let Some(radius) = args.radius {
        settings.capture_radius = radius;
    }
    if args.no_guide {
        settings.show_guide = false;
    }
    let config = config_from_settings(&settings)?;
    log::info!(
        "Surface {}x{}, speed {}, radius {}",
        config.width,
        config.height,
        config.speed,
        config.capture_radius
    );

    let script = match &args.script {
        Some(path) => load_script(path)?,
        None => EventScript::default(),
    };
    log::info!("Replaying {} pointer events", script.events.len());

    let mut runner = HeadlessRunner::new(config, script)?.stop_when_settled(args.until_settled);
    let report = runner.run(args.frames);

    if let Some(last) = report.final_frame() {
        log::info!(
            "Rendered {} frames, entity at ({}, {})",
            report.frames.len(),
            last.entity.x,
            last.entity.y
        );
    }

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, &report).context("Failed to write frame snapshots")?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
