use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::drivers::{DriverList, ScheduleDetails, WasteDetails};
use crate::components::layout::layout::Layout;
use crate::components::payments::PaymentDashboard;
use crate::components::schedules::{AddSchedule, AvailableDrivers, FullBins, ScheduleList, UpdateSchedule};
use crate::pages::home::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/schedule")]
    Schedules,
    #[at("/addSchedule")]
    AddSchedule,
    #[at("/viewFullBins")]
    FullBins,
    #[at("/availableDrivers")]
    AvailableDrivers,
    #[at("/driverList")]
    DriverList,
    /// `?driverId=`
    #[at("/scheduleDetails")]
    ScheduleDetails,
    /// `?scheduleId=`
    #[at("/wasteDetails")]
    WasteDetails,
    #[at("/updateSchedule/:schedule_id")]
    UpdateSchedule { schedule_id: String },
    /// `?userId=`, defaults to the configured user
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query carried to `/scheduleDetails`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverQuery {
    #[serde(rename = "driverId")]
    pub driver_id: String,
}

/// Query carried to `/wasteDetails`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleQuery {
    #[serde(rename = "scheduleId")]
    pub schedule_id: String,
}

/// Query carried to `/dashboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserQuery {
    #[serde(rename = "userId")]
    pub user_id: String,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Home page");
            html! { <Layout title="Home"><Home /></Layout> }
        }
        Route::Schedules => {
            log::trace!("Rendering Schedules page");
            html! { <Layout title="Schedules"><ScheduleList /></Layout> }
        }
        Route::AddSchedule => {
            log::trace!("Rendering Add Schedule page");
            html! { <Layout title="Add Schedule"><AddSchedule /></Layout> }
        }
        Route::FullBins => {
            log::trace!("Rendering Full Bins page");
            html! { <Layout title="Full Bins"><FullBins /></Layout> }
        }
        Route::AvailableDrivers => {
            log::trace!("Rendering Available Drivers page");
            html! { <Layout title="Available Drivers"><AvailableDrivers /></Layout> }
        }
        Route::DriverList => {
            log::trace!("Rendering Driver List page");
            html! { <Layout title="Drivers"><DriverList /></Layout> }
        }
        Route::ScheduleDetails => {
            log::trace!("Rendering Schedule Details page");
            html! { <Layout title="Driver Schedule"><ScheduleDetails /></Layout> }
        }
        Route::WasteDetails => {
            log::trace!("Rendering Waste Details page");
            html! { <Layout title="Waste Details"><WasteDetails /></Layout> }
        }
        Route::UpdateSchedule { schedule_id } => {
            log::trace!("Rendering Update Schedule page for ID: {}", schedule_id);
            html! { <Layout title="Update Schedule"><UpdateSchedule {schedule_id} /></Layout> }
        }
        Route::Dashboard => {
            log::trace!("Rendering Payment Dashboard page");
            html! { <Layout title="Payments"><PaymentDashboard /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1 class="text-3xl font-bold">{"404 Not Found"}</h1></Layout> }
        }
    }
}
