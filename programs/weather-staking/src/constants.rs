pub const POOL_SEED: &[u8] = b"pool";
pub const STAKE_POSITION_SEED: &[u8] = b"stake_position";
pub const STAKE_VAULT_SEED: &[u8] = b"stake_vault";
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";
