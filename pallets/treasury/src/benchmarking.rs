//! Benchmarking setup for pallet-sale-treasury

use super::*;

#[allow(unused)]
use crate::Pallet as Treasury;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use sp_runtime::traits::Saturating;

fn funded<T: Config>(name: &'static str) -> T::AccountId {
    let who: T::AccountId = account(name, 0, 0);
    let amount = T::Currency::minimum_balance().saturating_mul(1_000u32.into());
    let _ = T::Currency::set_balance(&who, amount);
    who
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn deposit() {
        let caller = funded::<T>("payer");
        let amount = T::Currency::minimum_balance().saturating_mul(10u32.into());

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), amount);

        assert_eq!(TrackedBalance::<T>::get(), amount);
    }

    #[benchmark]
    fn withdraw() {
        let manager = funded::<T>("manager");
        T::Roles::set_role(Role::TreasuryManager, &manager);
        let amount = T::Currency::minimum_balance().saturating_mul(10u32.into());
        Pallet::<T>::book_deposit(&manager, amount).expect("manager is funded");
        let recipient: T::AccountId = account("recipient", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(manager), recipient.clone(), amount);

        assert_eq!(T::Currency::balance(&recipient), amount);
    }

    #[benchmark]
    fn reconcile() {
        let caller: T::AccountId = whitelisted_caller();
        let amount = T::Currency::minimum_balance().saturating_mul(10u32.into());
        let treasury = Pallet::<T>::account_id();
        let _ = T::Currency::set_balance(
            &treasury,
            T::Currency::minimum_balance().saturating_add(amount),
        );

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(TrackedBalance::<T>::get(), amount);
    }

    impl_benchmark_test_suite!(Treasury, crate::mock::new_test_ext(), crate::mock::Test);
}
