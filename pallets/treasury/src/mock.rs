use crate as pallet_sale_treasury;
use core::cell::RefCell;
use frame_support::{
    derive_impl,
    dispatch::DispatchResult,
    parameter_types,
    traits::ConstU64,
    PalletId,
};
use pedigree_primitives::{OnFundsReleased, Role};
use sp_runtime::{traits::IdentityLookup, BuildStorage};

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Balances: pallet_balances,
        TreasuryRoles: pallet_access_control,
        Treasury: pallet_sale_treasury,
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

parameter_types! {
    pub const AdminAccount: u64 = 1;
    pub const ManagerAccount: u64 = 2;
    pub const TreasuryPalletId: PalletId = PalletId(*b"pd/trsry");
}

impl pallet_sale_treasury::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Currency = Balances;
    type Roles = TreasuryRoles;
    type OnFundsReleased = ReentryProbe;
    type PalletId = TreasuryPalletId;
    type WeightInfo = ();
}

/// Call a recipient attempts while its withdrawal is still executing.
#[derive(Clone, Copy)]
pub enum Reentry {
    Withdraw { caller: u64, amount: u64 },
    Deposit { caller: u64, amount: u64 },
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

/// Recipient that calls back into the treasury once, when armed.
pub struct ReentryProbe;
impl OnFundsReleased<u64, u64> for ReentryProbe {
    fn on_funds_released(to: &u64, _amount: u64) {
        let Some(attempt) = REENTRY.with(|r| r.borrow_mut().take()) else { return };
        let result = match attempt {
            Reentry::Withdraw { caller, amount } => {
                Treasury::withdraw(RuntimeOrigin::signed(caller), *to, amount)
            },
            Reentry::Deposit { caller, amount } => {
                Treasury::deposit(RuntimeOrigin::signed(caller), amount)
            },
        };
        REENTRY_RESULT.with(|r| *r.borrow_mut() = Some(result));
    }
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_balances::GenesisConfig::<Test> {
        balances: vec![(1, 10_000), (2, 10_000), (3, 10_000), (4, 10_000)],
        dev_accounts: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_access_control::GenesisConfig::<Test> {
        admin: Some(AdminAccount::get()),
        members: vec![(Role::TreasuryManager, ManagerAccount::get())],
        ..Default::default()
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_sale_treasury::GenesisConfig::<Test>::default().assimilate_storage(&mut t).unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
