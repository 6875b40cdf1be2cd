#![no_std]

mod campaign;
mod events;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env};

pub use events::*;
pub use storage_types::*;
pub use utils::*;

#[contract]
pub struct CampaignContract;

#[contractimpl]
impl CampaignContract {
    /// Initialize the ledger with its owner and the accepted token
    pub fn initialize(env: Env, owner: Address, accepted_asset: Address) -> Result<(), CampaignError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(CampaignError::AlreadyInitialized);
        }

        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::AcceptedAsset, &accepted_asset);
        env.storage().instance().set(&DataKey::NextCampaignId, &0u64);

        campaign::extend_instance(&env);

        Ok(())
    }

    /// Register a new campaign and return its id
    pub fn create_campaign(
        env: Env,
        creator: Address,
        metadata: BytesN<32>,
        goal: i128,
        beneficiary: Address,
    ) -> Result<CampaignId, CampaignError> {
        creator.require_auth();
        validate_goal(goal)?;

        let id = campaign::read_next_id(&env)?;
        let next_id = id.checked_add(1).ok_or(CampaignError::ArithmeticError)?;

        let record = Campaign {
            id,
            metadata: metadata.clone(),
            creator: creator.clone(),
            goal,
            beneficiary: beneficiary.clone(),
            total_accrued: 0,
        };

        campaign::save_campaign(&env, &record);
        env.storage().instance().set(&DataKey::NextCampaignId, &next_id);
        campaign::extend_instance(&env);

        events::emit_campaign_created(
            &env,
            CampaignCreatedEvent {
                id,
                metadata,
                creator,
                goal,
                beneficiary,
            },
        );
        log!(&env, "campaign created", id, goal);

        Ok(id)
    }

    /// Contribute `amount` of the accepted asset to a campaign.
    ///
    /// The funder must have approved this contract for at least `amount`
    /// on the currently accepted asset. Funding past the goal is allowed.
    pub fn fund_campaign(
        env: Env,
        funder: Address,
        campaign_id: CampaignId,
        amount: i128,
    ) -> Result<(), CampaignError> {
        funder.require_auth();
        validate_amount(amount)?;

        let mut record = campaign::load_campaign(&env, campaign_id)?;
        let total_accrued = record
            .total_accrued
            .checked_add(amount)
            .ok_or(CampaignError::ArithmeticError)?;

        campaign::collect_contribution(&env, &funder, amount)?;

        record.total_accrued = total_accrued;
        campaign::save_campaign(&env, &record);
        campaign::extend_instance(&env);

        events::emit_campaign_funded(
            &env,
            CampaignFundedEvent {
                campaign_id,
                funder,
                amount,
            },
        );
        log!(&env, "campaign funded", campaign_id, amount, total_accrued);

        Ok(())
    }

    /// Replace the accepted token (owner only)
    pub fn update_accepted_asset(env: Env, caller: Address, new_asset: Address) -> Result<(), CampaignError> {
        caller.require_auth();

        let owner = campaign::read_owner(&env)?;
        if caller != owner {
            return Err(CampaignError::Unauthorized);
        }

        let old_asset = campaign::read_accepted_asset(&env)?;
        env.storage().instance().set(&DataKey::AcceptedAsset, &new_asset);
        campaign::extend_instance(&env);

        events::emit_asset_updated(
            &env,
            AssetUpdatedEvent {
                old_asset,
                new_asset,
            },
        );

        Ok(())
    }

    pub fn get_owner(env: Env) -> Result<Address, CampaignError> {
        campaign::read_owner(&env)
    }

    pub fn get_accepted_asset(env: Env) -> Result<Address, CampaignError> {
        campaign::read_accepted_asset(&env)
    }

    /// Get campaign details
    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, CampaignError> {
        campaign::load_campaign(&env, campaign_id)
    }

    /// Number of campaigns created so far; also the id the next one will get
    pub fn campaign_count(env: Env) -> Result<u64, CampaignError> {
        campaign::read_next_id(&env)
    }
}
