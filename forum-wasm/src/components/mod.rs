pub(crate) mod nav_bar;
pub(crate) mod signup_form;
pub(crate) mod topics_grid;
