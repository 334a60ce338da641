use serde::{Deserialize, Serialize};

use super::auth::Role;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub address: String,
    #[serde(default)]
    pub role: Role,
    #[serde(rename = "isVoted", default)]
    pub is_voted: bool,
}
