mod add_form;
mod available_drivers;
mod full_bins;
mod list;
mod update_form;

pub use add_form::AddSchedule;
pub use available_drivers::AvailableDrivers;
pub use full_bins::FullBins;
pub use list::ScheduleList;
pub use update_form::UpdateSchedule;
