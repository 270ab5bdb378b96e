pub mod cards;
pub mod dashboard;
pub mod landing;
pub mod pages;
pub mod payment;
pub mod profile;
pub mod settings;
pub mod support;
pub mod transactions;
