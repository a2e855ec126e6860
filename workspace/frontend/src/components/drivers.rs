mod list;
mod schedule_details;
mod waste_details;

pub use list::DriverList;
pub use schedule_details::ScheduleDetails;
pub use waste_details::WasteDetails;
