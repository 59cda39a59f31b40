use reqwest::Method;

use super::{
    ApiClient, Endpoint, HttpTool,
    params::{Param, ParamKind as Kind, ParamLocation as In},
};
use crate::models::{
    AbuseTicket, AbuseTicketCreate, AbuseTicketFilter, AbuseTicketId, AbuseTicketList,
    AbuseTicketLookup,
};

pub const CREATE_TICKET: &str = "post_v1_abuse_tickets";
pub const LIST_TICKETS: &str = "get_v1_abuse_tickets";
pub const GET_TICKET: &str = "get_v1_abuse_tickets_ticketid";

const TICKETS_PATH: &str = "/v1/abuse/tickets";

const CREATE_PARAMS: &[Param] = &[
    Param::new(
        "source",
        Kind::String,
        In::Body,
        "The URL or IP where live abuse content is located at. ie: https://www.example.com/bad_stuff/bad.php",
    ),
    Param::new(
        "target",
        Kind::String,
        In::Body,
        "The brand/company the abuse is targeting. ie: brand name/bank name",
    ),
    Param::new("type", Kind::String, In::Body, "The type of abuse being reported."),
    Param::new(
        "info",
        Kind::String,
        In::Body,
        "Additional information that may assist the abuse investigator. ie: server logs or email headers/body for SPAM",
    ),
    Param::new(
        "infoUrl",
        Kind::String,
        In::Body,
        "Reporter URL if housing additional information that may assist the abuse investigator",
    ),
    Param::new(
        "intentional",
        Kind::Boolean,
        In::Body,
        "Do you believe this is intentional abuse by the domain holder?",
    ),
    Param::new(
        "proxy",
        Kind::String,
        In::Body,
        "The Proxy information required to view the abuse being reported. ie: Specific IP used, or country of IP viewing from",
    ),
];

// Query order on the wire follows this table.
const LIST_PARAMS: &[Param] = &[
    Param::new("type", Kind::String, In::Query, "The type of abuse."),
    Param::new("closed", Kind::Boolean, In::Query, "Is this abuse ticket closed?"),
    Param::new(
        "sourceDomainOrIp",
        Kind::String,
        In::Query,
        "The domain name or ip address the abuse originated from",
    ),
    Param::new(
        "target",
        Kind::String,
        In::Query,
        "The brand/company the abuse is targeting. ie: brand name/bank name",
    ),
    Param::new(
        "createdStart",
        Kind::String,
        In::Query,
        "The earliest abuse ticket creation date to pull abuse tickets for",
    ),
    Param::new(
        "createdEnd",
        Kind::String,
        In::Query,
        "The latest abuse ticket creation date to pull abuse tickets for",
    ),
    Param::new("limit", Kind::Integer, In::Query, "Number of abuse ticket numbers to return."),
    Param::new(
        "offset",
        Kind::Integer,
        In::Query,
        "The earliest result set record number to pull abuse tickets for",
    ),
];

const GET_PARAMS: &[Param] =
    &[Param::new("ticketId", Kind::String, In::Path, "A unique abuse ticket identifier").required()];

pub fn create_ticket(api: ApiClient) -> HttpTool<AbuseTicketCreate, AbuseTicketId> {
    HttpTool::new(
        Endpoint {
            name: CREATE_TICKET,
            description: "Create a new abuse ticket",
            method: Method::POST,
            path: TICKETS_PATH,
            params: CREATE_PARAMS,
        },
        api,
    )
}

pub fn list_tickets(api: ApiClient) -> HttpTool<AbuseTicketFilter, AbuseTicketList> {
    HttpTool::new(
        Endpoint {
            name: LIST_TICKETS,
            description: "List all abuse tickets ids that match user provided filters",
            method: Method::GET,
            path: TICKETS_PATH,
            params: LIST_PARAMS,
        },
        api,
    )
}

pub fn get_ticket(api: ApiClient) -> HttpTool<AbuseTicketLookup, AbuseTicket> {
    HttpTool::new(
        Endpoint {
            name: GET_TICKET,
            description: "Return the abuse ticket data for a given ticket id",
            method: Method::GET,
            path: "/v1/abuse/tickets/{ticketId}",
            params: GET_PARAMS,
        },
        api,
    )
}
