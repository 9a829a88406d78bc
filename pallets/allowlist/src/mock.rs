use crate as pallet_allowlist;
use frame_support::{derive_impl, parameter_types, traits::ConstU64, PalletId};
use sp_runtime::{traits::IdentityLookup, BuildStorage};

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Balances: pallet_balances,
        AllowlistRoles: pallet_access_control,
        TreasuryRoles: pallet_access_control::<Instance2>,
        Treasury: pallet_sale_treasury,
        Allowlist: pallet_allowlist,
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

impl pallet_access_control::Config<pallet_access_control::Instance2> for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

parameter_types! {
    pub const AdminAccount: u64 = 1;
    pub const TreasuryPalletId: PalletId = PalletId(*b"pd/trsry");
    pub const RegistrationFee: u64 = 10;
}

impl pallet_sale_treasury::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Currency = Balances;
    type Roles = TreasuryRoles;
    type OnFundsReleased = ();
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

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    // Account 6 cannot cover the fee
    pallet_balances::GenesisConfig::<Test> {
        balances: vec![(1, 1_000), (2, 1_000), (3, 1_000), (4, 1_000), (6, 7)],
        dev_accounts: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_access_control::GenesisConfig::<Test> {
        admin: Some(AdminAccount::get()),
        ..Default::default()
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_access_control::GenesisConfig::<Test, pallet_access_control::Instance2> {
        admin: Some(AdminAccount::get()),
        ..Default::default()
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_sale_treasury::GenesisConfig::<Test>::default().assimilate_storage(&mut t).unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
