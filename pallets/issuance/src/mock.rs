use crate as pallet_issuance;
use core::cell::RefCell;
use frame_support::{
    derive_impl,
    dispatch::DispatchResult,
    parameter_types,
    traits::{ConstU64, Get},
    PalletId,
};
use pallet_access_control::{Instance2, Instance3, Instance4};
use pedigree_primitives::{FundsSink, OnFundsReleased, Role};
use sp_runtime::{traits::IdentityLookup, BuildStorage};

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
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

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type AccountData = pallet_balances::AccountData<u64>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
    type AccountStore = System;
    type ExistentialDeposit = ConstU64<5>;
}

impl pallet_access_control::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

impl pallet_access_control::Config<Instance2> for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

impl pallet_access_control::Config<Instance3> for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

impl pallet_access_control::Config<Instance4> for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

parameter_types! {
    pub const Deployer: u64 = 1;
    pub const TreasuryPalletId: PalletId = PalletId(*b"pd/trsry");
    pub const CustodianPalletId: PalletId = PalletId(*b"pd/cstdn");
    pub const IssuancePalletId: PalletId = PalletId(*b"pd/issue");
    pub const RegistrationFee: u64 = 10;
    pub const SalePrice: u64 = 100;
}

thread_local! {
    static MAX_SUPPLY: RefCell<u128> = const { RefCell::new(4) };
}

pub struct MaxSupply;
impl Get<u128> for MaxSupply {
    fn get() -> u128 {
        MAX_SUPPLY.with(|m| *m.borrow())
    }
}

impl pallet_sale_treasury::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Currency = Balances;
    type Roles = TreasuryRoles;
    type OnFundsReleased = BuyOnRelease;
    type PalletId = TreasuryPalletId;
    type WeightInfo = ();
}

impl pallet_allowlist::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Treasury = Treasury;
    type Roles = AllowlistRoles;
    type DefaultRegistrationFee = RegistrationFee;
    type WeightInfo = ();
}

impl pallet_custodian::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Ledger = Issuance;
    type Roles = CustodianRoles;
    type PalletId = CustodianPalletId;
    type WeightInfo = ();
}

impl pallet_issuance::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Allowlist = Allowlist;
    type Treasury = ProbedTreasury;
    type Roles = IssuanceRoles;
    type Custodian = Custodian;
    type PalletId = IssuancePalletId;
    type MaxSupply = MaxSupply;
    type SalePrice = SalePrice;
    type WeightInfo = ();
}

/// Where a nested `buy` is attempted from.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Reentry {
    /// While the ledger forwards a payment, by `caller`.
    DuringForward { caller: u64 },
    /// While the treasury releases funds, by the recipient.
    DuringWithdraw,
}

thread_local! {
    static REENTRY: RefCell<Option<Reentry>> = const { RefCell::new(None) };
    static REENTRY_RESULT: RefCell<Option<DispatchResult>> = const { RefCell::new(None) };
}

pub fn arm_reentry(attempt: Reentry) {
    REENTRY.with(|r| *r.borrow_mut() = Some(attempt));
}

pub fn reentry_result() -> Option<DispatchResult> {
    REENTRY_RESULT.with(|r| r.borrow_mut().take())
}

/// Disarms and returns the armed attempt if `wanted` accepts it.
fn disarm(wanted: impl Fn(Reentry) -> bool) -> Option<Reentry> {
    REENTRY.with(|r| {
        let mut armed = r.borrow_mut();
        let current = *armed;
        match current {
            Some(attempt) if wanted(attempt) => armed.take(),
            _ => None,
        }
    })
}

fn record(result: DispatchResult) {
    REENTRY_RESULT.with(|r| *r.borrow_mut() = Some(result));
}

/// The real treasury behind a hook that can buy again mid-forward.
pub struct ProbedTreasury;
impl FundsSink<u64> for ProbedTreasury {
    type Balance = u64;

    fn receive(from: &u64, amount: u64) -> DispatchResult {
        if let Some(Reentry::DuringForward { caller }) =
            disarm(|a| matches!(a, Reentry::DuringForward { .. }))
        {
            record(Issuance::buy(RuntimeOrigin::signed(caller), SalePrice::get()));
        }
        <Treasury as FundsSink<u64>>::receive(from, amount)
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn fund_for_benchmark(who: &u64, amount: u64) {
        <Treasury as FundsSink<u64>>::fund_for_benchmark(who, amount)
    }
}

/// Withdrawal recipient that tries to buy with the released funds.
pub struct BuyOnRelease;
impl OnFundsReleased<u64, u64> for BuyOnRelease {
    fn on_funds_released(to: &u64, _amount: u64) {
        if disarm(|a| a == Reentry::DuringWithdraw).is_some() {
            record(Issuance::buy(RuntimeOrigin::signed(*to), SalePrice::get()));
        }
    }
}

/// Deployer (account 1) holds every role in every registry and one
/// pre-minted unit. Accounts 2 to 6 are funded and allowlisted; account 9 is
/// allowlisted but cannot cover the price.
pub fn new_test_ext() -> sp_io::TestExternalities {
    new_test_ext_with_cap(4)
}

pub fn new_test_ext_with_cap(max_supply: u128) -> sp_io::TestExternalities {
    MAX_SUPPLY.with(|m| *m.borrow_mut() = max_supply);
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_balances::GenesisConfig::<Test> {
        balances: vec![
            (1, 10_000),
            (2, 10_000),
            (3, 10_000),
            (4, 10_000),
            (5, 10_000),
            (6, 10_000),
            (7, 10_000),
            (9, 50),
        ],
        dev_accounts: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_access_control::GenesisConfig::<Test> {
        admin: Some(Deployer::get()),
        members: vec![(Role::Minter, 7), (Role::Pauser, 7)],
        ..Default::default()
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_access_control::GenesisConfig::<Test, Instance2> {
        admin: Some(Deployer::get()),
        ..Default::default()
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_access_control::GenesisConfig::<Test, Instance3> {
        admin: Some(Deployer::get()),
        ..Default::default()
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_access_control::GenesisConfig::<Test, Instance4> {
        admin: Some(Deployer::get()),
        ..Default::default()
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_sale_treasury::GenesisConfig::<Test>::default().assimilate_storage(&mut t).unwrap();

    pallet_issuance::GenesisConfig::<Test> { initial_issuance: vec![(Deployer::get(), 1)] }
        .assimilate_storage(&mut t)
        .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        for who in [2, 3, 4, 5, 6, 9] {
            let deployer = RuntimeOrigin::signed(Deployer::get());
            frame_support::assert_ok!(Allowlist::admin_allow(deployer, who));
        }
    });
    ext
}
