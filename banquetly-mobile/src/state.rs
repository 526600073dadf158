//! Tabbed refreshable board state
//!
//! The home and my-shifts screens share one state machine: an immutable
//! snapshot reduced by UI events. Refreshes are single-in-flight and carry
//! an epoch so a completion that lost the race is dropped instead of
//! clobbering newer data.

use std::future::Future;
use std::rc::Rc;

use banquetly_common::{Result, ShiftBoard, ShiftCategory};
use yew::prelude::*;

/// Snapshot of one board screen
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftBoardState {
    pub board: ShiftBoard,
    pub active: ShiftCategory,
    pub refreshing: bool,
    pub refresh_epoch: u64,
    pub error: Option<String>,
}

impl ShiftBoardState {
    pub fn new(active: ShiftCategory) -> Self {
        Self {
            board: ShiftBoard::new(),
            active,
            refreshing: false,
            refresh_epoch: 0,
            error: None,
        }
    }

    /// True until the first dataset has arrived
    pub fn initial_loading(&self) -> bool {
        self.board.is_empty() && self.refreshing
    }
}

/// UI events reduced into a new snapshot
pub enum ShiftBoardAction {
    SelectCategory(ShiftCategory),
    RefreshRequested,
    RefreshResolved {
        epoch: u64,
        outcome: Result<ShiftBoard>,
    },
}

impl Reducible for ShiftBoardState {
    type Action = ShiftBoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ShiftBoardAction::SelectCategory(category) => {
                // Active category must stay a key of the board
                if category == self.active || !self.board.contains(category) {
                    return self;
                }
                Rc::new(Self {
                    active: category,
                    ..(*self).clone()
                })
            }
            ShiftBoardAction::RefreshRequested => {
                // One refresh in flight at a time
                if self.refreshing {
                    return self;
                }
                Rc::new(Self {
                    refreshing: true,
                    refresh_epoch: self.refresh_epoch + 1,
                    error: None,
                    ..(*self).clone()
                })
            }
            ShiftBoardAction::RefreshResolved { epoch, outcome } => {
                // Stale or unsolicited completions are dropped
                if !self.refreshing || epoch != self.refresh_epoch {
                    return self;
                }
                match outcome {
                    Ok(board) => {
                        let active = if board.contains(self.active) {
                            self.active
                        } else {
                            board.first_category().unwrap_or(self.active)
                        };
                        Rc::new(Self {
                            board,
                            active,
                            refreshing: false,
                            refresh_epoch: epoch,
                            error: None,
                        })
                    }
                    // Failure keeps the previous dataset and surfaces a
                    // retryable message
                    Err(err) => Rc::new(Self {
                        refreshing: false,
                        error: Some(err.to_string()),
                        ..(*self).clone()
                    }),
                }
            }
        }
    }
}

/// Kick off a refresh unless one is already pending.
///
/// The epoch is captured before dispatching so the completion can be
/// matched against the snapshot it belongs to; a completion arriving after
/// the screen unmounted or after a newer refresh is ignored by the reducer.
pub fn spawn_refresh<F, Fut>(state: &UseReducerHandle<ShiftBoardState>, fetch: F)
where
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<ShiftBoard>> + 'static,
{
    if state.refreshing {
        return;
    }
    let epoch = state.refresh_epoch + 1;
    state.dispatch(ShiftBoardAction::RefreshRequested);

    let dispatcher = state.dispatcher();
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = fetch().await;
        dispatcher.dispatch(ShiftBoardAction::RefreshResolved { epoch, outcome });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use banquetly_common::{Error, Shift};

    fn shift(id: &str) -> Shift {
        Shift {
            id: id.to_string(),
            title: "Wait Staff".to_string(),
            rate: "$20.0/hr".to_string(),
            schedule: "Thu. Dec 16, 8:00 AM - 4:00 PM".to_string(),
            location: "Infinity Convention Centre".to_string(),
            image_uri: "https://example.com/shift.jpeg".to_string(),
            clocked_in: None,
            clocked_out: None,
        }
    }

    fn board() -> ShiftBoard {
        ShiftBoard::new()
            .with_category(ShiftCategory::Upcoming, vec![shift("1"), shift("2")])
            .with_category(ShiftCategory::OnCall, vec![])
            .with_category(ShiftCategory::Past, vec![shift("4")])
    }

    fn loaded_state() -> ShiftBoardState {
        ShiftBoardState {
            board: board(),
            active: ShiftCategory::Upcoming,
            refreshing: false,
            refresh_epoch: 1,
            error: None,
        }
    }

    fn reduce(state: ShiftBoardState, action: ShiftBoardAction) -> ShiftBoardState {
        (*Reducible::reduce(Rc::new(state), action)).clone()
    }

    #[test]
    fn test_select_category_changes_only_the_pointer() {
        let before = loaded_state();
        let after = reduce(
            before.clone(),
            ShiftBoardAction::SelectCategory(ShiftCategory::Past),
        );

        assert_eq!(after.active, ShiftCategory::Past);
        assert_eq!(after.board, before.board);
        assert_eq!(after.refreshing, before.refreshing);
    }

    #[test]
    fn test_select_missing_category_is_ignored() {
        let state = reduce(
            loaded_state(),
            ShiftBoardAction::SelectCategory(ShiftCategory::NewShifts),
        );
        assert_eq!(state.active, ShiftCategory::Upcoming);
    }

    #[test]
    fn test_refresh_sets_flag_and_bumps_epoch() {
        let state = reduce(loaded_state(), ShiftBoardAction::RefreshRequested);
        assert!(state.refreshing);
        assert_eq!(state.refresh_epoch, 2);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_second_refresh_request_is_a_no_op() {
        let state = reduce(loaded_state(), ShiftBoardAction::RefreshRequested);
        let again = reduce(state.clone(), ShiftBoardAction::RefreshRequested);
        assert_eq!(again.refresh_epoch, state.refresh_epoch);
        assert!(again.refreshing);
    }

    #[test]
    fn test_resolved_refresh_replaces_dataset() {
        let state = reduce(loaded_state(), ShiftBoardAction::RefreshRequested);
        let new_board =
            ShiftBoard::new().with_category(ShiftCategory::Upcoming, vec![shift("9")]);

        let state = reduce(
            state,
            ShiftBoardAction::RefreshResolved {
                epoch: 2,
                outcome: Ok(new_board.clone()),
            },
        );

        assert!(!state.refreshing);
        assert_eq!(state.board, new_board);
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let state = reduce(loaded_state(), ShiftBoardAction::RefreshRequested);
        let stale_board = ShiftBoard::new().with_category(ShiftCategory::Past, vec![shift("9")]);

        let state = reduce(
            state,
            ShiftBoardAction::RefreshResolved {
                epoch: 1,
                outcome: Ok(stale_board),
            },
        );

        // Still waiting for the real completion
        assert!(state.refreshing);
        assert_eq!(state.board, board());
    }

    #[test]
    fn test_unsolicited_completion_is_dropped() {
        let state = reduce(
            loaded_state(),
            ShiftBoardAction::RefreshResolved {
                epoch: 1,
                outcome: Ok(ShiftBoard::new()),
            },
        );
        assert_eq!(state.board, board());
    }

    #[test]
    fn test_failed_refresh_keeps_prior_dataset() {
        let state = reduce(loaded_state(), ShiftBoardAction::RefreshRequested);
        let state = reduce(
            state,
            ShiftBoardAction::RefreshResolved {
                epoch: 2,
                outcome: Err(Error::RefreshFailed("simulated outage".to_string())),
            },
        );

        assert!(!state.refreshing);
        assert_eq!(state.board, board());
        assert_eq!(
            state.error.as_deref(),
            Some("Refresh failed: simulated outage")
        );
    }

    #[test]
    fn test_refresh_after_failure_clears_error() {
        let mut state = reduce(loaded_state(), ShiftBoardAction::RefreshRequested);
        state = reduce(
            state,
            ShiftBoardAction::RefreshResolved {
                epoch: 2,
                outcome: Err(Error::RefreshFailed("simulated outage".to_string())),
            },
        );
        state = reduce(state, ShiftBoardAction::RefreshRequested);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_active_category_follows_replacement_board() {
        let state = ShiftBoardState {
            active: ShiftCategory::Past,
            ..loaded_state()
        };
        let state = reduce(state, ShiftBoardAction::RefreshRequested);

        // Replacement board no longer carries the Past tab
        let new_board =
            ShiftBoard::new().with_category(ShiftCategory::Upcoming, vec![shift("1")]);
        let state = reduce(
            state,
            ShiftBoardAction::RefreshResolved {
                epoch: 2,
                outcome: Ok(new_board),
            },
        );

        assert_eq!(state.active, ShiftCategory::Upcoming);
    }

    #[test]
    fn test_initial_loading_only_before_first_dataset() {
        let empty = reduce(
            ShiftBoardState::new(ShiftCategory::Upcoming),
            ShiftBoardAction::RefreshRequested,
        );
        assert!(empty.initial_loading());
        assert!(!loaded_state().initial_loading());
    }
}
