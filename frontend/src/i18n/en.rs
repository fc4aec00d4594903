pub mod common {
    pub const BRAND_NAME: &str = "Medibook";
}

pub mod navbar {
    pub const NAV_HOME: &str = "Home";
    pub const NAV_ALL_DOCTORS: &str = "All doctors";
    pub const NAV_MAIN_ARIA: &str = "Main navigation";
    pub const MOBILE_NAV_ARIA: &str = "Mobile navigation";
    pub const CREATE_ACCOUNT: &str = "Create account";
    pub const OPEN_MENU_ARIA: &str = "Open menu";
    pub const CLOSE_MENU_ARIA: &str = "Close menu";
}

pub mod page_header {
    pub const TITLE_LINE_1: &str = "Book Appointment";
    pub const TITLE_LINE_2: &str = "With Trusted Doctors";
    pub const SUBTITLE: &str =
        "Simply browse through our extensive list of trusted doctors, schedule your appointment \
         hassle-free.";
    pub const BOOK_APPOINTMENT: &str = "Book appointment";
    pub const FIND_DOCTORS: &str = "Find doctors";
    pub const GROUP_PROFILES_ALT: &str = "Patients who booked recently";
    pub const HEADER_IMAGE_ALT: &str = "Doctors";
}

pub mod banner {
    pub const TITLE_LINE_1: &str = "Book Appointment";
    pub const TITLE_LINE_2: &str = "With 100+ Trusted Doctors";
    pub const CREATE_ACCOUNT: &str = "Create account";
    pub const FIND_DOCTORS: &str = "Find doctors";
    pub const IMAGE_ALT: &str = "Doctor ready for your appointment";
}

pub mod speciality_menu {
    pub const TITLE: &str = "Find by Speciality";
    pub const SUBTITLE: &str =
        "Simply browse through our extensive list of trusted doctors, schedule your appointment \
         hassle-free.";
    pub const BROWSE_ALL: &str = "Browse all";
    pub const GRID_ARIA: &str = "Specialities";
}

pub mod doctors_page {
    pub const TITLE: &str = "Browse through the doctors specialist.";
    pub const ALL_SPECIALITIES: &str = "All specialities";
    pub const FILTER_TEMPLATE: &str = "Showing doctors for {}";
    pub const EMPTY: &str = "Doctor profiles will appear here once they are published.";
}

pub mod login_page {
    pub const TITLE: &str = "Create Account";
    pub const SUBTITLE: &str = "Please sign up to book appointment";
    pub const BACK_HOME: &str = "Back to home";
}

pub mod not_found_page {
    pub const TITLE: &str = "404 - Page not found";
    pub const BODY: &str = "Sorry, the page you are looking for does not exist.";
    pub const BACK_HOME: &str = "Back to home";
}
