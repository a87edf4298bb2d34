use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paystation::application::engine::StationEngine;
use paystation::interfaces::csv::command_reader::CommandReader;
use paystation::interfaces::csv::event_writer::EventWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input session script CSV file
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut engine = StationEngine::new();

    // Process session commands
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for cmd_result in reader.commands() {
        match cmd_result {
            Ok(cmd) => {
                if let Err(e) = engine.process_command(cmd) {
                    eprintln!("Error processing command: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading command: {}", e);
            }
        }
    }

    // Collect the session's observable outcomes
    let events = engine.into_results();

    // Output session report
    let stdout = io::stdout();
    let mut writer = EventWriter::new(stdout.lock());
    writer.write_events(&events).into_diagnostic()?;

    Ok(())
}
