use serde::{Deserialize, Serialize};

/// Wire record for a client: `{id, name, email, phone, address}`.
pub type Client = models::client::Model;

/// Body of CreateClient. Absent fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateClientParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CreateClientResponse {
    pub id: i64,
}

/// Body of UpdateClient: every mutable field is overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UpdateClientParams {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GetClientResponse {
    pub client: Client,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ListClientsResponse {
    pub clients: Vec<Client>,
}
