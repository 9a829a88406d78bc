//! # Allowlist Pallet
//!
//! Purchase gate in front of the issuance ledger. An account gets through by
//! paying the registration fee itself or by an admin grant. Blacklisting
//! overrides both and is checked on every purchase, but it never clears the
//! allow flag: lifting a blacklist restores whatever access the account had.
//!
//! Registration fees are forwarded to the treasury within the same call.

#![cfg_attr(not(feature = "std"), no_std)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use pedigree_primitives::{AllowlistInspect, FundsSink, Role, RoleInspect};

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

const LOG_TARGET: &str = "runtime::allowlist";

pub type BalanceOf<T> = <<T as Config>::Treasury as FundsSink<
    <T as frame_system::Config>::AccountId,
>>::Balance;

/// Gate state of one account. Absent accounts read as neither flag set.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug,
)]
pub struct AllowlistEntry {
    pub allowed: bool,
    pub blacklisted: bool,
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Where registration fees go.
        type Treasury: FundsSink<Self::AccountId>;

        /// Role registry of this allowlist.
        type Roles: RoleInspect<Self::AccountId>;

        /// Fee charged until an admin sets another one.
        #[pallet::constant]
        type DefaultRegistrationFee: Get<BalanceOf<Self>>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::type_value]
    pub fn DefaultFee<T: Config>() -> BalanceOf<T> {
        T::DefaultRegistrationFee::get()
    }

    #[pallet::storage]
    pub type Entries<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, AllowlistEntry, ValueQuery>;

    /// Exact payment required by `register`.
    #[pallet::storage]
    pub type RegistrationFee<T: Config> = StorageValue<_, BalanceOf<T>, ValueQuery, DefaultFee<T>>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Account registered itself and paid the fee
        Allowed { account: T::AccountId, fee: BalanceOf<T> },
        /// Account allowed by an admin without payment
        AllowedByAdmin { account: T::AccountId, admin: T::AccountId },
        Blacklisted { account: T::AccountId },
        Unblacklisted { account: T::AccountId },
        /// Registration fee changed
        FeeUpdated { fee: BalanceOf<T> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller does not hold `Admin`.
        Unauthorized,
        /// Payment differs from the registration fee.
        IncorrectPayment,
        /// Caller is blacklisted.
        Blacklisted,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Pay the registration fee and become allowed.
        ///
        /// Registering again while already allowed is accepted and charged.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::register())]
        pub fn register(origin: OriginFor<T>, payment: BalanceOf<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let mut entry = Entries::<T>::get(&who);
            ensure!(!entry.blacklisted, Error::<T>::Blacklisted);
            ensure!(payment == RegistrationFee::<T>::get(), Error::<T>::IncorrectPayment);

            entry.allowed = true;
            Entries::<T>::insert(&who, entry);
            T::Treasury::receive(&who, payment)?;

            log::debug!(target: LOG_TARGET, "{who:?} registered");
            Self::deposit_event(Event::Allowed { account: who, fee: payment });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::admin_allow())]
        pub fn admin_allow(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let admin = Self::ensure_admin(origin)?;

            Entries::<T>::mutate(&account, |entry| entry.allowed = true);
            Self::deposit_event(Event::AllowedByAdmin { account, admin });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::blacklist())]
        pub fn blacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_admin(origin)?;

            Entries::<T>::mutate(&account, |entry| entry.blacklisted = true);
            log::info!(target: LOG_TARGET, "{account:?} blacklisted");
            Self::deposit_event(Event::Blacklisted { account });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::unblacklist())]
        pub fn unblacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_admin(origin)?;

            Entries::<T>::mutate(&account, |entry| entry.blacklisted = false);
            log::info!(target: LOG_TARGET, "{account:?} removed from blacklist");
            Self::deposit_event(Event::Unblacklisted { account });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::set_fee())]
        pub fn set_fee(origin: OriginFor<T>, fee: BalanceOf<T>) -> DispatchResult {
            Self::ensure_admin(origin)?;

            RegistrationFee::<T>::put(fee);
            log::info!(target: LOG_TARGET, "registration fee set to {fee:?}");
            Self::deposit_event(Event::FeeUpdated { fee });
            Ok(())
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn is_allowed(who: &T::AccountId) -> bool {
        Entries::<T>::get(who).allowed
    }

    pub fn is_blacklisted(who: &T::AccountId) -> bool {
        Entries::<T>::get(who).blacklisted
    }

    pub fn registration_fee() -> BalanceOf<T> {
        RegistrationFee::<T>::get()
    }

    fn ensure_admin(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(T::Roles::has_role(Role::Admin, &who), Error::<T>::Unauthorized);
        Ok(who)
    }
}

impl<T: Config> AllowlistInspect<T::AccountId> for Pallet<T> {
    fn is_allowed(who: &T::AccountId) -> bool {
        Self::is_allowed(who)
    }

    fn is_blacklisted(who: &T::AccountId) -> bool {
        Self::is_blacklisted(who)
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn allow_for_benchmark(who: &T::AccountId) {
        Entries::<T>::mutate(who, |entry| entry.allowed = true);
    }
}
