// Global state management
// Stores provide shared state across the application

pub mod copy_settings;
