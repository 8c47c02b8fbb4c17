use gpui::{
    div, prelude::*, App, Context, EventEmitter, FocusHandle, Focusable, IntoElement,
    KeyDownEvent, MouseButton, Render, SharedString, Window,
};

use super::theme::ActiveTheme;

pub enum TextFieldEvent {
    Changed(String),
    Submitted,
}

/// A single-line text input driven by raw key events.
pub struct TextField {
    focus_handle: FocusHandle,
    text: String,
    placeholder: SharedString,
    masked: bool,
}

impl EventEmitter<TextFieldEvent> for TextField {}

impl Focusable for TextField {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl TextField {
    pub fn new(placeholder: impl Into<SharedString>, cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            text: String::new(),
            placeholder: placeholder.into(),
            masked: false,
        }
    }

    /// Render the contents as bullets.
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Start with `text` already entered.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>, cx: &mut Context<Self>) {
        self.text = text.into();
        self.changed(cx);
    }

    pub fn clear(&mut self, cx: &mut Context<Self>) {
        self.set_text(String::new(), cx);
    }

    fn changed(&mut self, cx: &mut Context<Self>) {
        cx.emit(TextFieldEvent::Changed(self.text.clone()));
        cx.notify();
    }

    fn handle_key_down(
        &mut self,
        event: &KeyDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform {
            return;
        }

        match keystroke.key.as_str() {
            "backspace" => {
                if self.text.pop().is_some() {
                    self.changed(cx);
                }
            }
            "enter" => cx.emit(TextFieldEvent::Submitted),
            _ => {
                if let Some(input) = &keystroke.key_char {
                    if !input.is_empty() && !input.chars().any(char::is_control) {
                        self.text.push_str(input);
                        self.changed(cx);
                    }
                }
            }
        }
    }
}

impl Render for TextField {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = *cx.theme();
        let focused = self.focus_handle.is_focused(window);

        let contents: SharedString = if self.text.is_empty() {
            self.placeholder.clone()
        } else if self.masked {
            "•".repeat(self.text.chars().count()).into()
        } else {
            self.text.clone().into()
        };

        div()
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key_down))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _event, window, _cx| {
                    window.focus(&this.focus_handle);
                }),
            )
            .w_full()
            .h_8()
            .flex()
            .items_center()
            .px_2()
            .rounded_md()
            .border_1()
            .border_color(if focused { theme.accent } else { theme.border })
            .bg(theme.surface)
            .text_sm()
            .text_color(if self.text.is_empty() {
                theme.fg_disabled
            } else {
                theme.fg
            })
            .cursor_text()
            .child(contents)
    }
}
