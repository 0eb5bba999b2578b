use crate::data::PageMeta;
use maud::{Markup, Render, html};

pub fn render_table<const N: usize>(
    titles: [&'static str; N],
    items: Vec<[Markup; N]>,
    empty: &'static str,
) -> Markup {
    html! {
        div class="overflow-x-auto" {
            table class="min-w-full bg-gray-800 rounded shadow-md" {
                thead class="bg-gray-700" {
                    tr {
                        @for title in titles {
                            th class="py-2 px-4 text-left font-semibold text-gray-300" {(title)}
                        }
                    }
                }
                tbody {
                    @if items.is_empty() {
                        tr {
                            td colspan=(N) class="py-2 px-4 text-center italic text-gray-400" {(empty)}
                        }
                    }
                    @for row in items {
                        tr {
                            @for col in row {
                                td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(col)}
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn subtitle(s: impl Render) -> Markup {
    html! {
        h2 class="text-xl font-semibold mb-2" {(s)}
    }
}

pub fn text_input(
    id: &'static str,
    placeholder: &'static str,
    value: &str,
    kind: Option<&'static str>,
) -> Markup {
    html! {
        input type=(kind.unwrap_or("text")) id=(id) name=(id) placeholder=(placeholder) value=(value) class="shadow appearance-none border rounded w-full py-2 px-3 mb-2 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600";
    }
}

pub fn form_submit_button(text: &str) -> Markup {
    html! {
        button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
            (text)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ActionKind {
    Info,
    Danger,
    Neutral,
}

/// A button that posts straight to `action` - every row action is one of these.
pub fn action_button(action: &str, text: &'static str, kind: ActionKind) -> Markup {
    let colours = match kind {
        ActionKind::Info => "bg-sky-600 hover:bg-sky-800",
        ActionKind::Danger => "bg-red-600 hover:bg-red-800",
        ActionKind::Neutral => "bg-slate-600 hover:bg-slate-800",
    };

    html! {
        form method="post" action=(action) class="inline" {
            button type="submit" class={(colours) " font-bold py-1 px-2 mr-2 rounded text-sm"} {(text)}
        }
    }
}

/// Page-number buttons, one per page. The caller decides whether they're needed at all.
pub fn pagination(action: &str, active: u64, meta: PageMeta) -> Markup {
    html! {
        nav {
            form method="post" action=(action) {
                ul class="flex flex-row space-x-2 mt-2" {
                    @for page in meta.pages() {
                        li {
                            @if page == active {
                                button type="submit" name="page" value=(page) aria-current="page" class="bg-blue-600 font-bold py-1 px-3 rounded" {(page)}
                            } @else {
                                button type="submit" name="page" value=(page) class="bg-gray-700 hover:bg-gray-600 py-1 px-3 rounded" {(page)}
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn modal(body: Markup) -> Markup {
    html! {
        div role="dialog" aria-modal="true" class="fixed inset-0 bg-black/60 flex items-center justify-center" {
            div class="bg-gray-800 p-6 rounded shadow-md max-w-sm w-full text-center" {
                (body)
            }
        }
    }
}
