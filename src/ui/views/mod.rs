pub mod achievements;
pub mod assistant;
pub mod challenge;
pub mod coming_soon;
pub mod dashboard;
pub mod lesson;
pub mod quiz;
pub mod settings;
