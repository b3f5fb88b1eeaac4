use log::debug;

use crate::{
    catalog::AirportCatalog, error::PromptError, model::AirportRecord, prompt::Prompter,
};

pub const NO_MATCH_PROMPT: &str = "No airports match your search. Try again";
pub const MULTIPLE_MATCH_PROMPT: &str = "Multiple airports found, please choose one:";

/// Resolve a free-text search to exactly one airport.
///
/// With no match the user is asked for a new search until something matches.
/// With several matches the user picks one of the candidate names; the pick is
/// mapped back by substring, so duplicate names resolve to the earliest record.
/// The only way out without an airport is a cancelled prompt.
pub fn resolve_airport<'c>(
    query: &str,
    catalog: &'c AirportCatalog,
    prompter: &mut dyn Prompter,
) -> Result<&'c AirportRecord, PromptError> {
    let mut candidates = catalog.search_by_name(query);

    while candidates.is_empty() {
        let retry = prompter.ask(NO_MATCH_PROMPT)?;
        candidates = catalog.search_by_name(&retry);
    }

    if let [only] = candidates.as_slice() {
        return Ok(*only);
    }

    let choices: Vec<String> = candidates.iter().map(|a| a.name.clone()).collect();

    loop {
        let choice = prompter.choose(MULTIPLE_MATCH_PROMPT, &choices)?;
        let needle = choice.to_lowercase();

        if let Some(picked) =
            candidates.iter().find(|a| a.name.to_lowercase().contains(&needle))
        {
            return Ok(*picked);
        }

        debug!("Choice '{choice}' matched none of {} candidates", candidates.len());
    }
}
