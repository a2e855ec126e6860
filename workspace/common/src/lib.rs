//! Common transport types and view-state logic shared by the console.
//! The structs mirror the waste-management backend's JSON payloads so the
//! frontend can deserialize API responses without duplicating shapes, and the
//! pure helpers (filtering, paging, drafts, chart series) live here so they can
//! be unit-tested natively.

pub mod charts;
pub mod dashboard;
pub mod endpoints;
pub mod error;
pub mod filter;
pub mod model;
pub mod paging;
pub mod resource;
pub mod schedule_form;

pub use error::ApiError;
pub use model::{
    Bin, BinCheck, BinStatus, CollectionRecord, Driver, FullBin, MonthlyCollections, MonthlyTotal,
    NewBinRequest, Payment, Schedule,
};
pub use resource::{RemoteResource, RequestTracker, Ticket};
