use gpui::{
    div, prelude::*, Context, Entity, FontWeight, IntoElement, Render, SharedString,
    Subscription, Window,
};
use musichub_core::{demo_credentials, FileSession, Role};

use super::button::{button, primary_button};
use super::layout::{h_stack, v_stack};
use super::text_field::{TextField, TextFieldEvent};
use super::theme::ActiveTheme;

/// Sign-in form. Writes to the shared session; the app swaps this view out
/// once the session is authenticated.
pub struct LoginView {
    session: Entity<FileSession>,
    username: Entity<TextField>,
    password: Entity<TextField>,
    error: Option<SharedString>,
    _subscriptions: Vec<Subscription>,
}

impl LoginView {
    pub fn new(session: Entity<FileSession>, cx: &mut Context<Self>) -> Self {
        let username = cx.new(|cx| TextField::new("Enter username", cx));
        let password = cx.new(|cx| TextField::new("Enter password", cx).masked());

        let subscriptions = vec![
            cx.subscribe(&username, Self::handle_field_event),
            cx.subscribe(&password, Self::handle_field_event),
        ];

        Self {
            session,
            username,
            password,
            error: None,
            _subscriptions: subscriptions,
        }
    }

    fn handle_field_event(
        &mut self,
        _field: Entity<TextField>,
        event: &TextFieldEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            TextFieldEvent::Submitted => self.submit(cx),
            TextFieldEvent::Changed(_) => {}
        }
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let username = self.username.read(cx).text().to_string();
        let password = self.password.read(cx).text().to_string();
        self.login(&username, &password, cx);
    }

    fn demo_login(&mut self, role: Role, cx: &mut Context<Self>) {
        let (username, password) = demo_credentials(role);
        self.username
            .update(cx, |field, cx| field.set_text(username, cx));
        self.password
            .update(cx, |field, cx| field.set_text(password, cx));
        self.login(username, password, cx);
    }

    fn login(&mut self, username: &str, password: &str, cx: &mut Context<Self>) {
        let result = self.session.update(cx, |session, cx| {
            let result = session.try_login(username, password);
            cx.notify();
            result
        });

        self.error = result.err().map(|e| e.to_string().into());
        cx.notify();
    }
}

impl Render for LoginView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = *cx.theme();

        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .child(
                v_stack()
                    .w_96()
                    .gap_4()
                    .p_6()
                    .rounded_lg()
                    .border_1()
                    .border_color(theme.border)
                    .bg(theme.surface)
                    .child(
                        v_stack()
                            .items_center()
                            .gap_1()
                            .child(
                                div()
                                    .text_2xl()
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(theme.accent)
                                    .child("MusicHub"),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(theme.fg_muted)
                                    .child("Sign in to access your music library"),
                            ),
                    )
                    .child(
                        v_stack()
                            .gap_1()
                            .child(div().text_sm().child("Username"))
                            .child(self.username.clone()),
                    )
                    .child(
                        v_stack()
                            .gap_1()
                            .child(div().text_sm().child("Password"))
                            .child(self.password.clone()),
                    )
                    .when_some(self.error.clone(), |this, error| {
                        this.child(div().text_sm().text_color(theme.danger).child(error))
                    })
                    .child(primary_button("sign-in", "Sign In", cx).on_click(cx.listener(
                        |this, _event, _window, cx| {
                            this.submit(cx);
                        },
                    )))
                    .child(
                        v_stack()
                            .gap_2()
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(theme.fg_muted)
                                    .child("Demo accounts"),
                            )
                            .child(
                                h_stack()
                                    .gap_2()
                                    .child(button("demo-admin", "Admin Demo", cx).flex_1().on_click(
                                        cx.listener(|this, _event, _window, cx| {
                                            this.demo_login(Role::Admin, cx);
                                        }),
                                    ))
                                    .child(button("demo-user", "User Demo", cx).flex_1().on_click(
                                        cx.listener(|this, _event, _window, cx| {
                                            this.demo_login(Role::User, cx);
                                        }),
                                    )),
                            ),
                    ),
            )
    }
}
