//! Benchmarking setup for pallet-allowlist

use super::*;

#[allow(unused)]
use crate::Pallet as Allowlist;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn admin<T: Config>() -> T::AccountId {
    let admin: T::AccountId = account("admin", 0, 0);
    T::Roles::set_role(Role::Admin, &admin);
    admin
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn register() {
        let caller: T::AccountId = whitelisted_caller();
        let fee = RegistrationFee::<T>::get();
        T::Treasury::fund_for_benchmark(&caller, fee);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), fee);

        assert!(Pallet::<T>::is_allowed(&caller));
    }

    #[benchmark]
    fn admin_allow() {
        let admin = admin::<T>();
        let account: T::AccountId = account("member", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), account.clone());

        assert!(Pallet::<T>::is_allowed(&account));
    }

    #[benchmark]
    fn blacklist() {
        let admin = admin::<T>();
        let account: T::AccountId = account("member", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), account.clone());

        assert!(Pallet::<T>::is_blacklisted(&account));
    }

    #[benchmark]
    fn unblacklist() {
        let admin = admin::<T>();
        let account: T::AccountId = account("member", 0, 0);
        Entries::<T>::insert(&account, AllowlistEntry { allowed: true, blacklisted: true });

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), account.clone());

        assert!(!Pallet::<T>::is_blacklisted(&account));
    }

    #[benchmark]
    fn set_fee() {
        let admin = admin::<T>();
        let fee = T::DefaultRegistrationFee::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), fee);

        assert_eq!(RegistrationFee::<T>::get(), fee);
    }

    impl_benchmark_test_suite!(Allowlist, crate::mock::new_test_ext(), crate::mock::Test);
}
