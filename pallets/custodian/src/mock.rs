use crate as pallet_custodian;
use core::cell::RefCell;
use frame_support::{derive_impl, parameter_types, PalletId};
use pedigree_primitives::{ComponentAccount, OwnershipInspect, Quantity};
use sp_runtime::{traits::IdentityLookup, BuildStorage};
use std::collections::BTreeMap;

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        CustodianRoles: pallet_access_control,
        Custodian: pallet_custodian,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
}

impl pallet_access_control::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

parameter_types! {
    pub const AdminAccount: u64 = 1;
    pub const LedgerAccount: u64 = 100;
    pub const CustodianPalletId: PalletId = PalletId(*b"pd/cstdn");
}

thread_local! {
    static OWNERSHIP: RefCell<BTreeMap<u64, Quantity>> = const { RefCell::new(BTreeMap::new()) };
    static LEDGER_CUSTODIAN: RefCell<Option<u64>> = const { RefCell::new(None) };
}

/// Stand-in for the issuance ledger.
pub struct MockLedger;

impl MockLedger {
    pub fn set_owned(who: u64, quantity: Quantity) {
        OWNERSHIP.with(|o| o.borrow_mut().insert(who, quantity));
    }

    /// What the ledger's `initialize_custodian` would record.
    pub fn point_at(custodian: Option<u64>) {
        LEDGER_CUSTODIAN.with(|c| *c.borrow_mut() = custodian);
    }
}

impl ComponentAccount<u64> for MockLedger {
    fn account_id() -> u64 {
        LedgerAccount::get()
    }
}

impl OwnershipInspect<u64> for MockLedger {
    fn balance_of(who: &u64) -> Quantity {
        OWNERSHIP.with(|o| o.borrow().get(who).copied().unwrap_or_default())
    }

    fn custodian() -> Option<u64> {
        LEDGER_CUSTODIAN.with(|c| *c.borrow())
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn issue_for_benchmark(who: &u64, quantity: Quantity) {
        Self::set_owned(*who, Self::balance_of(who) + quantity);
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn set_custodian_for_benchmark(custodian: &u64) {
        Self::point_at(Some(*custodian));
    }
}

impl pallet_custodian::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Ledger = MockLedger;
    type Roles = CustodianRoles;
    type PalletId = CustodianPalletId;
    type WeightInfo = ();
}

/// Unbound custodian; account 2 owns 10 units, account 3 owns 1.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_access_control::GenesisConfig::<Test> {
        admin: Some(AdminAccount::get()),
        ..Default::default()
    }
    .assimilate_storage(&mut t)
    .unwrap();

    OWNERSHIP.with(|o| o.borrow_mut().clear());
    MockLedger::set_owned(2, 10);
    MockLedger::set_owned(3, 1);
    MockLedger::point_at(None);

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Custodian and ledger bound to each other.
pub fn bound_test_ext() -> sp_io::TestExternalities {
    let mut ext = new_test_ext();
    ext.execute_with(|| {
        frame_support::assert_ok!(Custodian::bind_ledger(
            RuntimeOrigin::signed(AdminAccount::get()),
            LedgerAccount::get()
        ));
        MockLedger::point_at(Some(Custodian::account_id()));
    });
    ext
}
