mod sdl_rules_tests;
pub(crate) mod utils;
