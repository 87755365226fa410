use crate::app_list::intent::AppListIntent;
use crate::app_list::state::AppListState;
use crate::mvi::Reducer;

pub struct AppListReducer;

impl Reducer for AppListReducer {
    type State = AppListState;
    type Intent = AppListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Re-entrant: a refetch while loading just stays loading.
            AppListIntent::FetchStarted => AppListState::Loading {
                apps: state.into_apps(),
            },
            AppListIntent::FetchSucceeded { apps } => AppListState::Ready { apps },
            AppListIntent::FetchFailed { failure } => AppListState::Errored {
                apps: state.into_apps(),
                message: failure.message().to_string(),
            },
        }
    }
}
