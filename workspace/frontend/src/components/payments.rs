mod bin_details_modal;
mod bin_registration_modal;
mod chart;
mod completion_message;
mod dashboard;
mod history_modal;
mod payment_modal;
mod stat_card;
mod waste_report_modal;

pub use dashboard::PaymentDashboard;
