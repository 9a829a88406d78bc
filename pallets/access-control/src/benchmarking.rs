//! Benchmarking setup for pallet-access-control

use super::*;

use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

#[instance_benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn grant_role() {
        let admin: T::AccountId = whitelisted_caller();
        Pallet::<T, I>::add_member(Role::Admin, &admin);
        let account: T::AccountId = account("member", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), Role::Minter, account.clone());

        assert!(Pallet::<T, I>::has_role(Role::Minter, &account));
    }

    #[benchmark]
    fn revoke_role() {
        let admin: T::AccountId = whitelisted_caller();
        let other: T::AccountId = account("admin", 1, 0);
        Pallet::<T, I>::add_member(Role::Admin, &admin);
        Pallet::<T, I>::add_member(Role::Admin, &other);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), Role::Admin, other.clone());

        assert!(!Pallet::<T, I>::has_role(Role::Admin, &other));
    }

    impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
