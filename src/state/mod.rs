/// State management module
///
/// This module handles all application state, including:
/// - The search session and pagination arithmetic (session.rs)
/// - Shared data structures (data.rs)

pub mod data;
pub mod session;
