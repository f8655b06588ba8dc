/// UI building blocks
///
/// This module holds the visual pieces the application composes:
/// - The gallery grid renderer (gallery.rs)
/// - The click-to-enlarge modal viewer (viewer.rs)
/// - Toast notifications (toast.rs)

pub mod gallery;
pub mod toast;
pub mod viewer;
