//! Development genesis for the sale.

use crate::{
    AccountId, AllowlistRolesConfig, BalancesConfig, CustodianRolesConfig, IssuanceConfig,
    IssuanceRolesConfig, RuntimeGenesisConfig, TreasuryRolesConfig, UNIT,
};

/// Native endowment of each development account.
pub const ENDOWMENT: u128 = 1_000 * UNIT;

/// `admin` holds every role in every registry and the single pre-minted unit.
pub fn development_genesis(
    admin: AccountId,
    endowed_accounts: Vec<AccountId>,
) -> RuntimeGenesisConfig {
    RuntimeGenesisConfig {
        balances: BalancesConfig {
            balances: endowed_accounts.iter().cloned().map(|k| (k, ENDOWMENT)).collect(),
            dev_accounts: None,
        },
        issuance_roles: IssuanceRolesConfig { admin: Some(admin.clone()), ..Default::default() },
        allowlist_roles: AllowlistRolesConfig { admin: Some(admin.clone()), ..Default::default() },
        treasury_roles: TreasuryRolesConfig { admin: Some(admin.clone()), ..Default::default() },
        custodian_roles: CustodianRolesConfig { admin: Some(admin.clone()), ..Default::default() },
        issuance: IssuanceConfig { initial_issuance: vec![(admin, 1)] },
        ..Default::default()
    }
}
