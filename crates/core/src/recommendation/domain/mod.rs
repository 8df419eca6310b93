pub mod recommendation_engine;
pub mod rule_tables;
