pub mod backgrounds;
pub mod events;
pub mod gifts;
pub mod guests;
pub mod music;
pub mod weddings;
