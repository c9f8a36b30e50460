use super::*;
use crate::server::model::ban::BanRecord;
use chrono::{TimeZone, Utc};

mod add;
mod get;

fn ban_record(user_id: u64) -> BanRecord {
    BanRecord {
        user_id: user_id.to_string(),
        username: format!("user{}", user_id),
        display_name: format!("User {}", user_id),
        avatar: None,
        guild_id: "900".to_string(),
        guild_name: "Guild".to_string(),
        reason: Some("raid".to_string()),
        timestamp: Utc.timestamp_opt(1_700_000_000 + user_id as i64, 0).unwrap(),
    }
}
