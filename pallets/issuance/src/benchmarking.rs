//! Benchmarking setup for pallet-issuance

use super::*;

#[allow(unused)]
use crate::Pallet as Issuance;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn holder<T: Config>(role: Role) -> T::AccountId {
    let who: T::AccountId = account("holder", 0, 0);
    T::Roles::set_role(role, &who);
    who
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn buy() {
        let caller: T::AccountId = whitelisted_caller();
        let price = T::SalePrice::get();
        T::Allowlist::allow_for_benchmark(&caller);
        T::Treasury::fund_for_benchmark(&caller, price);
        let before = TotalIssued::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), price);

        assert!(Purchased::<T>::contains_key(&caller));
        assert_eq!(TotalIssued::<T>::get(), before + 1);
    }

    #[benchmark]
    fn mint() {
        let minter = holder::<T>(Role::Minter);
        let to: T::AccountId = account("to", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(minter), to.clone(), 1);

        assert_eq!(Ownership::<T>::get(&to), 1);
    }

    #[benchmark]
    fn pause() {
        let pauser = holder::<T>(Role::Pauser);

        #[extrinsic_call]
        _(RawOrigin::Signed(pauser));

        assert!(Paused::<T>::get());
    }

    #[benchmark]
    fn unpause() {
        let pauser = holder::<T>(Role::Pauser);
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(pauser));

        assert!(!Paused::<T>::get());
    }

    #[benchmark]
    fn initialize_custodian() {
        let admin = holder::<T>(Role::Admin);
        let custodian = T::Custodian::account_id();

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), custodian.clone());

        assert_eq!(CustodianBinding::<T>::get(), Some(custodian));
    }

    impl_benchmark_test_suite!(Issuance, crate::mock::new_test_ext(), crate::mock::Test);
}
