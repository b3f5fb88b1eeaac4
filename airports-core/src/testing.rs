//! Test doubles for the interactive and network seams.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;

use crate::{
    error::{PromptError, ScheduleFetchError},
    model::ScheduleRecord,
    prompt::Prompter,
    provider::ScheduleSource,
    table::{FlightTable, Renderer},
};

/// Answers prompts from a fixed script, then cancels.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
    offered: Vec<Vec<String>>,
    offered_messages: Vec<String>,
    fail_with: Option<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { answers: answers.into_iter().map(Into::into).collect(), ..Default::default() }
    }

    pub fn fail_when_empty(&mut self, message: &str) {
        self.fail_with = Some(message.to_string());
    }

    /// Messages passed to `ask`, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Choice lists passed to `choose`, in order.
    pub fn offered(&self) -> &[Vec<String>] {
        &self.offered
    }

    pub fn offered_messages(&self) -> &[String] {
        &self.offered_messages
    }

    fn next_answer(&mut self) -> Result<String, PromptError> {
        match (self.answers.pop_front(), &self.fail_with) {
            (Some(answer), _) => Ok(answer),
            (None, Some(msg)) => Err(PromptError::Failed(msg.clone())),
            (None, None) => Err(PromptError::Cancelled),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, message: &str) -> Result<String, PromptError> {
        self.asked.push(message.to_string());
        self.next_answer()
    }

    fn choose(&mut self, message: &str, choices: &[String]) -> Result<String, PromptError> {
        self.offered_messages.push(message.to_string());
        self.offered.push(choices.to_vec());
        self.next_answer()
    }
}

/// Hands out canned fetch results in order and remembers what was asked for.
#[derive(Debug, Clone, Default)]
pub struct StubSchedules {
    results: Arc<Mutex<VecDeque<Result<Vec<ScheduleRecord>, ScheduleFetchError>>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl StubSchedules {
    pub fn new(results: Vec<Result<Vec<ScheduleRecord>, ScheduleFetchError>>) -> Self {
        Self { results: Arc::new(Mutex::new(results.into())), requested: Default::default() }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScheduleSource for StubSchedules {
    async fn fetch_departures(
        &self,
        iata: &str,
    ) -> Result<Vec<ScheduleRecord>, ScheduleFetchError> {
        self.requested.lock().unwrap().push(iata.to_string());
        self.results.lock().unwrap().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub tables: Vec<FlightTable>,
    pub notices: Vec<String>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, table: &FlightTable) {
        self.tables.push(table.clone());
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
