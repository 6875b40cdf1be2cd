use crate::storage_types::CampaignError;

/// Validate a campaign goal is positive
pub fn validate_goal(goal: i128) -> Result<(), CampaignError> {
    if goal <= 0 {
        return Err(CampaignError::InvalidGoal);
    }
    Ok(())
}

/// Validate a contribution is positive
pub fn validate_amount(amount: i128) -> Result<(), CampaignError> {
    if amount <= 0 {
        return Err(CampaignError::InsufficientFunds);
    }
    Ok(())
}
