use crate::{
    data::student::Student,
    maud_conveniences::{
        ActionKind, action_button, form_submit_button, modal, pagination, render_table, subtitle,
        text_input, title,
    },
    view::{MarksView, NoticeKind, Notification, PendingConfirmation, StudentsView, ViewState},
};
use maud::{Markup, html};

/// The whole page body. Pure - everything it shows comes out of `view`.
pub fn render_view(view: &ViewState) -> Markup {
    html! {
        div class="bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full flex flex-col space-y-4" {
            (title("Student Management"))
            (student_form(&view.students))
            (student_table(view))
            @if view.students.meta.paginates() {
                (pagination("/students/page", view.students.page, view.students.meta))
            }
        }
        @if let Some(pending) = view.pending {
            (confirmation(pending))
        } @else {
            @if let Some(notice) = &view.notice {
                (notification(notice))
            }
        }
    }
}

fn student_form(students: &StudentsView) -> Markup {
    html! {
        form method="post" action="/students" class="mb-3" {
            (text_input("name", "Name", &students.form.name, None))
            (text_input("email", "Email", &students.form.email, None))
            (text_input("age", "Age", &students.form.age, Some("number")))
            (form_submit_button(if students.mode.is_editing() { "Update" } else { "Create" }))
        }
    }
}

fn student_table(view: &ViewState) -> Markup {
    html! {
        div class="overflow-x-auto" {
            table class="min-w-full bg-gray-800 rounded shadow-md" {
                thead class="bg-gray-700" {
                    tr {
                        @for heading in ["Name", "Email", "Age", "Actions"] {
                            th class="py-2 px-4 text-left font-semibold text-gray-300" {(heading)}
                        }
                    }
                }
                tbody {
                    @for student in &view.students.students {
                        tr {
                            td class="py-2 px-4 border-b border-gray-600" {(student.name)}
                            td class="py-2 px-4 border-b border-gray-600" {(student.email)}
                            td class="py-2 px-4 border-b border-gray-600" {(student.age)}
                            td class="py-2 px-4 border-b border-gray-600" {
                                (action_button(&format!("/students/{}/edit", student.id), "Edit", ActionKind::Info))
                                (action_button(&format!("/students/{}/delete", student.id), "Delete", ActionKind::Danger))
                                (action_button(&format!("/students/{}/marks", student.id), "Marks", ActionKind::Neutral))
                            }
                        }
                        @if view.marks.panel.is_open_for(student.id) {
                            tr {
                                td colspan="4" {
                                    (marks_panel(student, &view.marks))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn marks_panel(student: &Student, marks: &MarksView) -> Markup {
    let rows = marks
        .marks
        .iter()
        .map(|mark| {
            [
                html! {(mark.subject)},
                html! {(mark.score)},
                html! {
                    (action_button(&format!("/marks/{}/edit", mark.id), "Edit", ActionKind::Info))
                    (action_button(&format!("/marks/{}/delete", mark.id), "Delete", ActionKind::Danger))
                },
            ]
        })
        .collect();

    html! {
        div id="marks" class="bg-gray-900 p-3 rounded" {
            (subtitle(html! {"Marks for " (student.name)}))
            form method="post" action={"/students/" (student.id.0) "/marks/submit"} class="flex flex-row space-x-2" {
                (text_input("subject", "Subject", &marks.form.subject, None))
                (text_input("score", "Score", &marks.form.score, Some("number")))
                (form_submit_button(if marks.mode.is_editing() { "Update Mark" } else { "Add Mark" }))
            }
            (render_table(["Subject", "Score", "Actions"], rows, "No marks yet"))
            @if marks.meta.paginates() {
                (pagination(&format!("/students/{}/marks/page", student.id), marks.page, marks.meta))
            }
        }
    }
}

fn confirmation(pending: PendingConfirmation) -> Markup {
    modal(html! {
        (subtitle(pending.prompt()))
        form method="post" action="/dialog" class="flex flex-row justify-center space-x-4" {
            button type="submit" name="answer" value="confirm" class="bg-red-600 hover:bg-red-800 font-bold py-2 px-4 rounded" {"Delete"}
            button type="submit" name="answer" value="cancel" class="bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded" {"Cancel"}
        }
    })
}

fn notification(notice: &Notification) -> Markup {
    let colour = match notice.kind {
        NoticeKind::Success => "text-green-400",
        NoticeKind::Error => "text-red-400",
    };

    modal(html! {
        h2 class={"text-xl font-semibold mb-2 " (colour)} {(notice.title)}
        p id="notice-text" class="mb-4" {(notice.text)}
        form method="post" action="/notice/dismiss" {
            (form_submit_button("OK"))
        }
    })
}
