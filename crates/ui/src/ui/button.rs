use gpui::{div, prelude::*, App, Div, ElementId, SharedString, Stateful};

use super::theme::ActiveTheme;

pub fn button(
    id: impl Into<ElementId>,
    label: impl Into<SharedString>,
    cx: &App,
) -> Stateful<Div> {
    let theme = cx.theme();
    let hover = theme.border;

    div()
        .id(id)
        .flex()
        .items_center()
        .justify_center()
        .px_3()
        .py_1()
        .rounded_md()
        .border_1()
        .border_color(theme.border)
        .bg(theme.surface_secondary)
        .text_sm()
        .text_color(theme.fg)
        .cursor_pointer()
        .hover(move |style| style.bg(hover))
        .child(label.into())
}

/// A filled button in the accent colour, for the main action of a form.
pub fn primary_button(
    id: impl Into<ElementId>,
    label: impl Into<SharedString>,
    cx: &App,
) -> Stateful<Div> {
    let accent = cx.theme().accent;

    button(id, label, cx).bg(accent).border_color(accent)
}
