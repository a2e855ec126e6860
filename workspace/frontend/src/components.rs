pub mod drivers;
pub mod layout;
pub mod payments;
pub mod schedules;
