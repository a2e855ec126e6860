pub mod footer;
pub mod layout;
pub mod navbar;
pub mod sidebar;
