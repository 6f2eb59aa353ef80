pub mod cities;
pub mod countries;
pub mod languages;
pub mod settings;
pub mod users;
