//! Scroll message handlers

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.view.scroll_up();
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.view.scroll_down();
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.view.page_up();
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.view.page_down();
    UpdateResult::none()
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.view.scroll_to_top();
    UpdateResult::none()
}

pub fn handle_scroll_to_latest(state: &mut AppState) -> UpdateResult {
    state.view.scroll_to_latest();
    UpdateResult::none()
}
