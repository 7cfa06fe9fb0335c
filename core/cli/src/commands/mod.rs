pub mod marketplace;
pub mod offers;
pub mod print_config;
pub mod tokens;
