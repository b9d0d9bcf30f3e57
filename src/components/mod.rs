// Shared UI components
pub mod cards;
pub mod layout;
