mod parser_error_tests;
pub(crate) mod utils;
