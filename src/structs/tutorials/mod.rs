pub mod tutorial;
pub mod local_solution;
pub mod tutorial_report;
