use crate::{
    api::{HttpApi, RosterApi},
    config::RuntimeConfiguration,
    controllers::{marks::MarksController, students::StudentsController},
    error::RosterResult,
    view::{SharedView, ViewState},
};
use maud::{DOCTYPE, Markup, html};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct RosterState {
    view: SharedView,
    students: StudentsController,
    marks: MarksController,
}

impl RosterState {
    pub fn new(config: &RuntimeConfiguration) -> RosterResult<Self> {
        let api = HttpApi::new(&config.api_config())?;
        Ok(Self::with_api(Arc::new(api)))
    }

    pub fn with_api(api: Arc<dyn RosterApi>) -> Self {
        let view = ViewState::shared();
        Self {
            students: StudentsController::new(api.clone(), view.clone()),
            marks: MarksController::new(api, view.clone()),
            view,
        }
    }

    #[allow(clippy::unused_self)]
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    title { "Student Management" }
                }
                body hx-boost="true" class="bg-gray-900 min-h-screen flex flex-col items-center justify-center text-white p-4" {
                    (markup)
                }
            }
        }
    }

    pub const fn view(&self) -> &SharedView {
        &self.view
    }

    pub const fn students(&self) -> &StudentsController {
        &self.students
    }

    pub const fn marks(&self) -> &MarksController {
        &self.marks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;

    #[test]
    fn shell_boosts_forms_with_htmx() {
        let state = RosterState::with_api(Arc::new(FakeApi::default()));

        let html = state.render(html! { p { "body" } }).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("https://unpkg.com/htmx.org@2.0.4"));
        assert!(html.contains("<body hx-boost=\"true\""));
        assert!(html.contains("<p>body</p>"));
    }
}
