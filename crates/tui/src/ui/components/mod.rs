pub mod card;
pub mod form;
pub mod hints;
pub mod money;
pub mod pin_modal;
pub mod tabs;
pub mod toast;
