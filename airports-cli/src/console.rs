use std::{fs, path::PathBuf};

use airports_core::{FlightTable, PromptError, Prompter, Renderer};
use inquire::{InquireError, Select, Text};
use log::{info, warn};

/// Prompts backed by `inquire`. Esc or Ctrl-C cancels.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn ask(&mut self, message: &str) -> Result<String, PromptError> {
        Text::new(message).prompt().map_err(prompt_error)
    }

    fn choose(&mut self, message: &str, choices: &[String]) -> Result<String, PromptError> {
        Select::new(message, choices.to_vec()).prompt().map_err(prompt_error)
    }
}

fn prompt_error(err: InquireError) -> PromptError {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            PromptError::Cancelled
        }
        other => PromptError::Failed(other.to_string()),
    }
}

/// Prints tables to stdout, optionally keeping a copy of each one on disk.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    save_dir: Option<PathBuf>,
}

impl ConsoleRenderer {
    pub fn new(save_dir: Option<PathBuf>) -> Self {
        Self { save_dir }
    }

    fn save(&self, table: &FlightTable) -> anyhow::Result<Option<PathBuf>> {
        let Some(dir) = &self.save_dir else {
            return Ok(None);
        };

        fs::create_dir_all(dir)?;
        let stamp = chrono::Local::now().format("%Y-%m-%dT%H-%M-%S%.3f");
        let path = dir.join(format!("{stamp}.txt"));
        fs::write(&path, format!("{table}\n"))?;

        Ok(Some(path))
    }
}

impl Renderer for ConsoleRenderer {
    fn render(&mut self, table: &FlightTable) {
        println!("{table}");
        println!();

        match self.save(table) {
            Ok(Some(path)) => info!("Saved flights table to {}", path.display()),
            Ok(None) => {}
            Err(err) => warn!("Could not save flights table: {err:#}"),
        }
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airports_core::AirportRecord;

    #[test]
    fn cancel_and_interrupt_map_to_cancelled() {
        assert!(matches!(prompt_error(InquireError::OperationCanceled), PromptError::Cancelled));
        assert!(matches!(prompt_error(InquireError::OperationInterrupted), PromptError::Cancelled));
        assert!(matches!(prompt_error(InquireError::NotTTY), PromptError::Failed(_)));
    }

    #[test]
    fn renderer_saves_table_when_dir_given() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = ConsoleRenderer::new(Some(dir.path().join("tables")));
        let table = FlightTable::new(&AirportRecord::new("Heathrow", "LHR"), &[]);

        let path = renderer.save(&table).unwrap().expect("a file should be written");

        let saved = fs::read_to_string(path).unwrap();
        assert!(saved.contains("Flights from Heathrow (LHR)"));
    }

    #[test]
    fn renderer_without_dir_saves_nothing() {
        let renderer = ConsoleRenderer::default();
        let table = FlightTable::new(&AirportRecord::new("Heathrow", "LHR"), &[]);

        assert!(renderer.save(&table).unwrap().is_none());
    }
}
