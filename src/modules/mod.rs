pub mod classes;
pub mod complaints;
pub mod notices;
pub mod schools;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod value_types;
