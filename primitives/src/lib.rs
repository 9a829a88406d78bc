//! Shared vocabulary for the Pedigree sale pallets.
//!
//! The four components (allowlist, treasury, custodian, issuance) never touch
//! each other's storage. Every cross-component interaction goes through one of
//! the traits below, wired together in the runtime's `Config` implementations.

#![cfg_attr(not(feature = "std"), no_std)]

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{dispatch::DispatchResult, traits::tokens::Balance};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use sp_runtime::RuntimeDebug;

/// Number of collectible units. Units are indivisible.
pub type Quantity = u128;

/// Capability tags held by accounts in a component's role registry.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Encode,
    Decode,
    DecodeWithMemTracking,
    MaxEncodedLen,
    TypeInfo,
    RuntimeDebug,
    Serialize,
    Deserialize,
)]
pub enum Role {
    /// Grants and revokes every role, runs administrative calls.
    Admin,
    /// Mints outside the sale path.
    Minter,
    /// Pauses and resumes the sale.
    Pauser,
    /// Releases treasury funds.
    TreasuryManager,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Minter, Role::Pauser, Role::TreasuryManager];
}

/// Read access to a role registry.
pub trait RoleInspect<AccountId> {
    fn has_role(role: Role, who: &AccountId) -> bool;

    /// Put `who` in `role` without an origin check, for benchmark setup.
    #[cfg(feature = "runtime-benchmarks")]
    fn set_role(role: Role, who: &AccountId);
}

/// The purchase gate consulted by the issuance ledger.
pub trait AllowlistInspect<AccountId> {
    fn is_allowed(who: &AccountId) -> bool;

    fn is_blacklisted(who: &AccountId) -> bool;

    /// Blacklisting always wins over a prior allow.
    fn can_purchase(who: &AccountId) -> bool {
        Self::is_allowed(who) && !Self::is_blacklisted(who)
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn allow_for_benchmark(who: &AccountId);
}

/// Stable identity of a component instance, used when components bind to
/// each other after deployment.
pub trait ComponentAccount<AccountId> {
    fn account_id() -> AccountId;
}

/// Read-only view of the ownership ledger kept by the issuance pallet.
pub trait OwnershipInspect<AccountId>: ComponentAccount<AccountId> {
    fn balance_of(who: &AccountId) -> Quantity;

    /// Custodian the ledger was initialised with, if any.
    fn custodian() -> Option<AccountId>;

    #[cfg(feature = "runtime-benchmarks")]
    fn issue_for_benchmark(who: &AccountId, quantity: Quantity);

    #[cfg(feature = "runtime-benchmarks")]
    fn set_custodian_for_benchmark(custodian: &AccountId);
}

/// Destination of forwarded proceeds. Pulls `amount` from `from` and books it.
pub trait FundsSink<AccountId> {
    type Balance: Balance;

    fn receive(from: &AccountId, amount: Self::Balance) -> DispatchResult;

    /// Give `who` enough funds to cover `amount`, for benchmark setup.
    #[cfg(feature = "runtime-benchmarks")]
    fn fund_for_benchmark(who: &AccountId, amount: Self::Balance);
}

/// Called once funds have left the treasury, while the withdrawal that
/// released them is still executing.
pub trait OnFundsReleased<AccountId, Balance> {
    fn on_funds_released(to: &AccountId, amount: Balance);
}

impl<AccountId, Balance> OnFundsReleased<AccountId, Balance> for () {
    fn on_funds_released(_to: &AccountId, _amount: Balance) {}
}
