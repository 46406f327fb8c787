pub mod matrix_input;
pub mod menu;
pub mod report;
pub mod session;

pub use matrix_input::{parse_matrix, parse_row, read_matrix_file, MatrixBuilder};
pub use menu::MenuChoice;
pub use report::{format_decision, format_regret_table, format_summary, EvaluationReport};
pub use session::Session;
