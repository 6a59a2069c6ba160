pub mod registry;
pub mod strategy;
pub mod transform;

pub use registry::{
    register_naming_strategy, to_column_name, to_database_name, to_table_name, NamingContext,
};
pub use strategy::{Namer, NamingStrategy, Property};
pub use transform::to_snake_case;
