use soroban_sdk::{contracttype, Address, BytesN, Env, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignCreatedEvent {
    pub id: CampaignId,
    pub metadata: BytesN<32>,
    pub creator: Address,
    pub goal: i128,
    pub beneficiary: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignFundedEvent {
    pub campaign_id: CampaignId,
    pub funder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct AssetUpdatedEvent {
    pub old_asset: Address,
    pub new_asset: Address,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"),),
        event,
    );
}

pub fn emit_campaign_funded(env: &Env, event: CampaignFundedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_funded"),),
        event,
    );
}

pub fn emit_asset_updated(env: &Env, event: AssetUpdatedEvent) {
    env.events().publish(
        (Symbol::new(env, "asset_updated"),),
        event,
    );
}
