use crate::{render::render_view, state::RosterState};
use axum::extract::State;
use maud::Markup;

pub async fn get_index_route(State(state): State<RosterState>) -> Markup {
    let body = render_view(&*state.view().lock().await);
    state.render(body)
}
