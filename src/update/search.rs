//! Search field handling

use crate::commands::Cmd;
use crate::messages::SearchMsg;
use crate::model::PickerModel;
use crate::search::SearchOutcome;

pub fn update_search(model: &mut PickerModel, msg: SearchMsg) -> Option<Cmd> {
    match msg {
        SearchMsg::QueryChanged(query) => {
            let outcome = model.search_index.search(&query);
            let mode_changed = model.viewport.apply_search(&outcome);

            match outcome {
                SearchOutcome::Unchanged => None,
                SearchOutcome::Clear => {
                    let had_results = model.search_results.take().is_some();
                    (mode_changed || had_results).then_some(Cmd::Redraw)
                }
                SearchOutcome::Results(results) => {
                    tracing::debug!(
                        query = %query,
                        matches = results.match_count(),
                        "Search results updated"
                    );
                    model.search_results = Some(results);
                    Some(Cmd::Redraw)
                }
            }
        }
    }
}
