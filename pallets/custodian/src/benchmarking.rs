//! Benchmarking setup for pallet-custodian

use super::*;

#[allow(unused)]
use crate::Pallet as Custodian;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn admin<T: Config>() -> T::AccountId {
    let admin: T::AccountId = account("admin", 0, 0);
    T::Roles::set_role(Role::Admin, &admin);
    admin
}

fn bind<T: Config>() {
    BoundLedger::<T>::put(T::Ledger::account_id());
    T::Ledger::set_custodian_for_benchmark(&Pallet::<T>::account_id());
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn bind_ledger() {
        let admin = admin::<T>();
        let ledger = T::Ledger::account_id();

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), ledger.clone());

        assert_eq!(BoundLedger::<T>::get(), Some(ledger));
    }

    #[benchmark]
    fn freeze() {
        let admin = admin::<T>();
        bind::<T>();
        let holder: T::AccountId = account("holder", 0, 0);
        T::Ledger::issue_for_benchmark(&holder, 10);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), holder.clone(), 10);

        assert_eq!(FrozenBalance::<T>::get(&holder), 10);
    }

    #[benchmark]
    fn unfreeze() {
        let admin = admin::<T>();
        bind::<T>();
        let holder: T::AccountId = account("holder", 0, 0);
        T::Ledger::issue_for_benchmark(&holder, 10);
        FrozenBalance::<T>::insert(&holder, 10);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), holder.clone(), 10);

        assert_eq!(FrozenBalance::<T>::get(&holder), 0);
    }

    impl_benchmark_test_suite!(Custodian, crate::mock::new_test_ext(), crate::mock::Test);
}
