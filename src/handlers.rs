pub mod dashboard;
pub mod pages;
