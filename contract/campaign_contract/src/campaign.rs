use soroban_sdk::{token, Address, Env};

use crate::storage_types::*;

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn read_owner(env: &Env) -> Result<Address, CampaignError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(CampaignError::NotInitialized)
}

pub fn read_accepted_asset(env: &Env) -> Result<Address, CampaignError> {
    env.storage()
        .instance()
        .get(&DataKey::AcceptedAsset)
        .ok_or(CampaignError::NotInitialized)
}

pub fn read_next_id(env: &Env) -> Result<CampaignId, CampaignError> {
    env.storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .ok_or(CampaignError::NotInitialized)
}

pub fn load_campaign(env: &Env, campaign_id: CampaignId) -> Result<Campaign, CampaignError> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(CampaignError::CampaignNotFound)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

/// Pull `amount` of the accepted asset from `funder` into the contract's
/// custody using the allowance the funder granted this contract.
///
/// A rejected transfer (missing allowance, short balance) is reported as
/// `InsufficientFunds`; the token's own state changes are discarded by the host.
pub fn collect_contribution(env: &Env, funder: &Address, amount: i128) -> Result<(), CampaignError> {
    let asset = read_accepted_asset(env)?;
    let custody = env.current_contract_address();
    let token_client = token::Client::new(env, &asset);

    match token_client.try_transfer_from(&custody, funder, &custody, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(CampaignError::InsufficientFunds),
    }
}
