use gpui::{div, prelude::*, Div};

pub fn h_stack() -> Div {
    div().flex().flex_row()
}

pub fn v_stack() -> Div {
    div().flex().flex_col()
}
