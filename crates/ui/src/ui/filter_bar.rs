use gpui::{
    div, prelude::*, Context, Entity, FontWeight, IntoElement, Render, Subscription, Window,
};
use musichub_core::{Catalog, FilterOptions};

use super::button::button;
use super::layout::{h_stack, v_stack};
use super::text_field::{TextField, TextFieldEvent};
use super::theme::ActiveTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selector {
    Artist,
    Album,
    Genre,
}

impl Selector {
    fn label(&self) -> &'static str {
        match self {
            Selector::Artist => "Artist",
            Selector::Album => "Album",
            Selector::Genre => "Genre",
        }
    }

    fn value<'a>(&self, filters: &'a FilterOptions) -> &'a str {
        match self {
            Selector::Artist => &filters.artist,
            Selector::Album => &filters.album,
            Selector::Genre => &filters.genre,
        }
    }

    fn value_mut<'a>(&self, filters: &'a mut FilterOptions) -> &'a mut String {
        match self {
            Selector::Artist => &mut filters.artist,
            Selector::Album => &mut filters.album,
            Selector::Genre => &mut filters.genre,
        }
    }
}

/// The choice after `current` in `choices`, where the empty string ("All")
/// sits before the first choice and after the last.
pub fn next_choice(current: &str, choices: &[String]) -> String {
    if current.is_empty() {
        return choices.first().cloned().unwrap_or_default();
    }

    choices
        .iter()
        .position(|choice| choice == current)
        .and_then(|ix| choices.get(ix + 1))
        .cloned()
        .unwrap_or_default()
}

/// Search field, artist/album/genre selectors and sort controls.
pub struct FilterBar {
    catalog: Entity<Catalog>,
    search: Entity<TextField>,
    _subscriptions: Vec<Subscription>,
}

impl FilterBar {
    pub fn new(catalog: Entity<Catalog>, cx: &mut Context<Self>) -> Self {
        let search = cx.new(|cx| TextField::new("Search songs, artists, albums...", cx));

        let subscriptions = vec![
            cx.subscribe(&search, Self::handle_search_event),
            cx.observe(&catalog, |_this, _catalog, cx| cx.notify()),
        ];

        Self {
            catalog,
            search,
            _subscriptions: subscriptions,
        }
    }

    fn handle_search_event(
        &mut self,
        _search: Entity<TextField>,
        event: &TextFieldEvent,
        cx: &mut Context<Self>,
    ) {
        if let TextFieldEvent::Changed(text) = event {
            let text = text.clone();
            self.update_filters(cx, move |filters| filters.search = text);
        }
    }

    fn update_filters(
        &mut self,
        cx: &mut Context<Self>,
        update: impl FnOnce(&mut FilterOptions),
    ) {
        self.catalog.update(cx, |catalog, cx| {
            let mut filters = catalog.filters().clone();
            update(&mut filters);
            catalog.set_filters(filters);
            cx.notify();
        });
    }

    fn cycle(&mut self, selector: Selector, cx: &mut Context<Self>) {
        let choices = self.catalog.read(cx).filter_choices();
        let choices = match selector {
            Selector::Artist => choices.artists,
            Selector::Album => choices.albums,
            Selector::Genre => choices.genres,
        };

        self.update_filters(cx, |filters| {
            let next = next_choice(selector.value(filters), &choices);
            *selector.value_mut(filters) = next;
        });
    }

    fn clear(&mut self, cx: &mut Context<Self>) {
        self.catalog.update(cx, |catalog, cx| {
            catalog.reset_filters();
            cx.notify();
        });
        self.search.update(cx, |search, cx| search.clear(cx));
    }
}

impl Render for FilterBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = *cx.theme();
        let filters = self.catalog.read(cx).filters().clone();

        let selector_button = |selector: Selector, cx: &mut Context<Self>| {
            let value = match selector.value(&filters) {
                "" => "All",
                value => value,
            };

            button(
                selector.label(),
                format!("{}: {}", selector.label(), value),
                cx,
            )
            .on_click(cx.listener(move |this, _event, _window, cx| {
                this.cycle(selector, cx);
            }))
        };

        let artist = selector_button(Selector::Artist, cx);
        let album = selector_button(Selector::Album, cx);
        let genre = selector_button(Selector::Genre, cx);

        v_stack()
            .gap_3()
            .p_4()
            .rounded_lg()
            .border_1()
            .border_color(theme.border)
            .bg(theme.surface)
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child("Filters & Search"),
            )
            .child(self.search.clone())
            .child(
                h_stack()
                    .flex_wrap()
                    .gap_2()
                    .child(artist)
                    .child(album)
                    .child(genre)
                    .child(
                        button(
                            "sort-by",
                            format!("Sort: {}", filters.sort_by.label()),
                            cx,
                        )
                        .on_click(cx.listener(|this, _event, _window, cx| {
                            this.update_filters(cx, |filters| {
                                filters.sort_by = filters.sort_by.next();
                            });
                        })),
                    )
                    .child(
                        button("sort-order", filters.sort_order.label(), cx).on_click(
                            cx.listener(|this, _event, _window, cx| {
                                this.update_filters(cx, |filters| {
                                    filters.sort_order = filters.sort_order.toggled();
                                });
                            }),
                        ),
                    )
                    .child(button("clear-filters", "Clear Filters", cx).on_click(
                        cx.listener(|this, _event, _window, cx| {
                            this.clear(cx);
                        }),
                    )),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Vec<String> {
        vec!["ABBA".to_string(), "Eagles".to_string(), "Queen".to_string()]
    }

    #[test]
    fn next_choice_walks_through_all_then_back_to_none() {
        let choices = choices();
        assert_eq!(next_choice("", &choices), "ABBA");
        assert_eq!(next_choice("ABBA", &choices), "Eagles");
        assert_eq!(next_choice("Queen", &choices), "");
    }

    #[test]
    fn next_choice_resets_unknown_or_empty_choices() {
        assert_eq!(next_choice("Nobody", &choices()), "");
        assert_eq!(next_choice("", &[]), "");
    }
}
