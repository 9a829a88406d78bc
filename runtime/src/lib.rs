//! Pedigree runtime: the sale components composed over the native currency.
//!
//! Every component gets its own role registry instance, so authority granted
//! in one never leaks into another:
//!
//! | Component  | Registry          |
//! |------------|-------------------|
//! | Issuance   | `IssuanceRoles`   |
//! | Allowlist  | `AllowlistRoles`  |
//! | Treasury   | `TreasuryRoles`   |
//! | Custodian  | `CustodianRoles`  |

#![cfg_attr(not(feature = "std"), no_std)]

use frame_support::{construct_runtime, derive_impl, parameter_types, traits::ConstU128, PalletId};
use pallet_access_control::{Instance2, Instance3, Instance4};
use pedigree_primitives::Quantity;
use sp_runtime::{
    generic,
    traits::{BlakeTwo256, IdentifyAccount, Verify},
    MultiAddress, MultiSignature,
};

#[cfg(feature = "std")]
pub mod genesis;


pub type Signature = MultiSignature;
pub type AccountId = <<Signature as Verify>::Signer as IdentifyAccount>::AccountId;
pub type Balance = u128;
pub type Nonce = u32;
pub type BlockNumber = u32;
pub type Address = MultiAddress<AccountId, ()>;
pub type Header = generic::Header<BlockNumber, BlakeTwo256>;

pub type TxExtension = (
    frame_system::CheckNonZeroSender<Runtime>,
    frame_system::CheckSpecVersion<Runtime>,
    frame_system::CheckTxVersion<Runtime>,
    frame_system::CheckGenesis<Runtime>,
    frame_system::CheckEra<Runtime>,
    frame_system::CheckNonce<Runtime>,
    frame_system::CheckWeight<Runtime>,
);

pub type UncheckedExtrinsic =
    generic::UncheckedExtrinsic<Address, RuntimeCall, Signature, TxExtension>;
pub type Block = generic::Block<Header, UncheckedExtrinsic>;

/// Smallest units in one whole unit of the native currency.
pub const UNIT: Balance = 1_000_000_000_000;
pub const MILLI_UNIT: Balance = UNIT / 1_000;
pub const EXISTENTIAL_DEPOSIT: Balance = MILLI_UNIT;

construct_runtime!(
    pub enum Runtime {
        System: frame_system,
        Balances: pallet_balances,
        IssuanceRoles: pallet_access_control,
        AllowlistRoles: pallet_access_control::<Instance2>,
        TreasuryRoles: pallet_access_control::<Instance3>,
        CustodianRoles: pallet_access_control::<Instance4>,
        Treasury: pallet_sale_treasury,
        Allowlist: pallet_allowlist,
        Custodian: pallet_custodian,
        Issuance: pallet_issuance,
    }
);

#[derive_impl(frame_system::config_preludes::SolochainDefaultConfig)]
impl frame_system::Config for Runtime {
    type Block = Block;
    type AccountId = AccountId;
    type Nonce = Nonce;
    type AccountData = pallet_balances::AccountData<Balance>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Runtime {
    type Balance = Balance;
    type AccountStore = System;
    type ExistentialDeposit = ConstU128<EXISTENTIAL_DEPOSIT>;
}

impl pallet_access_control::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = pallet_access_control::weights::SubstrateWeight<Runtime>;
}

impl pallet_access_control::Config<Instance2> for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = pallet_access_control::weights::SubstrateWeight<Runtime>;
}

impl pallet_access_control::Config<Instance3> for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = pallet_access_control::weights::SubstrateWeight<Runtime>;
}

impl pallet_access_control::Config<Instance4> for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = pallet_access_control::weights::SubstrateWeight<Runtime>;
}

parameter_types! {
    pub const TreasuryPalletId: PalletId = PalletId(*b"pd/trsry");
    pub const CustodianPalletId: PalletId = PalletId(*b"pd/cstdn");
    pub const IssuancePalletId: PalletId = PalletId(*b"pd/issue");
    /// 0.01 UNIT
    pub const RegistrationFee: Balance = UNIT / 100;
    /// 0.1 UNIT
    pub const SalePrice: Balance = UNIT / 10;
    pub const MaxSupply: Quantity = 1_000;
}

impl pallet_sale_treasury::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type Currency = Balances;
    type Roles = TreasuryRoles;
    type OnFundsReleased = ();
    type PalletId = TreasuryPalletId;
    type WeightInfo = pallet_sale_treasury::weights::SubstrateWeight<Runtime>;
}

impl pallet_allowlist::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type Treasury = Treasury;
    type Roles = AllowlistRoles;
    type DefaultRegistrationFee = RegistrationFee;
    type WeightInfo = pallet_allowlist::weights::SubstrateWeight<Runtime>;
}

impl pallet_custodian::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type Ledger = Issuance;
    type Roles = CustodianRoles;
    type PalletId = CustodianPalletId;
    type WeightInfo = pallet_custodian::weights::SubstrateWeight<Runtime>;
}

impl pallet_issuance::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type Allowlist = Allowlist;
    type Treasury = Treasury;
    type Roles = IssuanceRoles;
    type Custodian = Custodian;
    type PalletId = IssuancePalletId;
    type MaxSupply = MaxSupply;
    type SalePrice = SalePrice;
    type WeightInfo = pallet_issuance::weights::SubstrateWeight<Runtime>;
}
