pub mod abuse;
pub mod api_error;

pub use abuse::{
    AbuseTicket, AbuseTicketCreate, AbuseTicketFilter, AbuseTicketId, AbuseTicketList,
    AbuseTicketLookup, Pagination,
};
pub use api_error::{ApiError, ApiErrorField};
