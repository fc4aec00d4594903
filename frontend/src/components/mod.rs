// Reusable components live here.

pub mod icons;
pub mod navbar;
pub mod page_header;
pub mod promotional_banner;
pub mod speciality_menu;
