use serde::{Deserialize, Serialize};

/// An abuse ticket as reported by the abuse API.
/// The service owns these records; we only relay them back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbuseTicket {
    /// Abuse ticket ID
    #[serde(default)]
    pub ticket_id: String,
    /// The shopper id of the person who reported the suspected abuse
    #[serde(default)]
    pub reporter: String,
    /// The domain or IP the suspected abuse was reported against
    #[serde(default)]
    pub domain_ip: String,
    /// The single URL or IP the suspected abuse was reported against
    #[serde(default)]
    pub source: String,
    /// The company the suspected abuse is targeting
    #[serde(default)]
    pub target: String,
    /// The type of abuse being reported (e.g. "PHISHING", "SPAM")
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Is this abuse ticket closed?
    #[serde(default)]
    pub closed: bool,
    /// The date the abuse ticket was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// The date the abuse ticket was closed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<String>,
}

/// Body of `POST /v1/abuse/tickets`.
/// Every field is optional; unset fields are left out of the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbuseTicketCreate {
    /// The brand/company the abuse is targeting. ie: brand name/bank name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// The type of abuse being reported
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Additional information that may assist the abuse investigator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// Reporter URL if housing additional information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_url: Option<String>,
    /// Do you believe this is intentional abuse by the domain holder?
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intentional: Option<bool>,
    /// Proxy information required to view the abuse (IP used, country of viewing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    /// The URL or IP where live abuse content is located at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Filters accepted by `GET /v1/abuse/tickets`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbuseTicketFilter {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_domain_or_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

/// Path parameters of `GET /v1/abuse/tickets/{ticketId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbuseTicketLookup {
    pub ticket_id: String,
}

/// Response of a successful ticket creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbuseTicketId {
    /// Abuse ticket ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u_number: Option<String>,
}

/// One page of ticket ids matching a filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbuseTicketList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// A list of abuse ticket ids originated by this reporter
    #[serde(default)]
    pub ticket_ids: Vec<String>,
}

/// Paging descriptor attached to list responses.
/// The links are opaque URLs; we never follow them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of records available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_omits_unset_fields() {
        let request = AbuseTicketCreate {
            kind: Some("PHISHING".into()),
            intentional: Some(false),
            ..Default::default()
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({ "type": "PHISHING", "intentional": false }));
    }

    #[test]
    fn list_tolerates_missing_pagination() {
        let list: AbuseTicketList =
            serde_json::from_value(json!({ "ticketIds": ["1", "2"] })).unwrap();

        assert_eq!(list.pagination, None);
        assert_eq!(list.ticket_ids, vec!["1", "2"]);
    }

    #[test]
    fn ticket_uses_wire_names() {
        let ticket: AbuseTicket = serde_json::from_value(json!({
            "ticketId": "DCU000001053",
            "reporter": "bxxxxxxxxxxxx",
            "domainIp": "example.com",
            "source": "https://example.com/phish",
            "target": "Example Bank",
            "type": "PHISHING",
            "closed": true,
            "createdAt": "2024-04-01T10:00:00Z",
            "closedAt": "2024-04-02T09:30:00Z"
        }))
        .unwrap();

        assert_eq!(ticket.kind, "PHISHING");
        assert_eq!(ticket.domain_ip, "example.com");
        assert!(ticket.closed);
        assert_eq!(ticket.closed_at.as_deref(), Some("2024-04-02T09:30:00Z"));
    }
}
