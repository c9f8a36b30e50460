use crate::server::{
    bot::gateway::mock::{GatewayCall, MockGateway},
    data::SettingsStore,
    service::incident::IncidentRegistry,
};
use test_utils::builder::TestBuilder;

mod enforcement;

const GUILD_ID: u64 = 900;
const OWNER_ID: u64 = 1;
const USER_ID: u64 = 111;

fn gateway() -> MockGateway {
    MockGateway::new().with_guild(GUILD_ID, "Guild", OWNER_ID)
}
