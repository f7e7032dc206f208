// Landing page: server-rendered marketing page with the inline price calculator.

pub mod handlers;
pub mod render;
