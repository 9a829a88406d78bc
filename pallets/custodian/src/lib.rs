//! # Custodian Pallet
//!
//! Keeps a frozen quantity per account on top of the ownership recorded by
//! the issuance ledger. Freezing never changes ownership; it only shrinks the
//! available part of it.
//!
//! The custodian reads ownership through the ledger it was bound to with
//! [`Pallet::bind_ledger`]. The binding is set once and cannot be replaced.
//! Freeze and unfreeze also require the ledger to point back at this
//! custodian, so both halves of the binding agree before any quantity moves.
//!
//! Invariant: `frozen_balance(a) <= ledger.balance_of(a)` for every account.

#![cfg_attr(not(feature = "std"), no_std)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, PalletId};
use frame_system::{ensure_signed, pallet_prelude::*};
use pedigree_primitives::{ComponentAccount, OwnershipInspect, Quantity, Role, RoleInspect};
use sp_runtime::traits::AccountIdConversion;

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

const LOG_TARGET: &str = "runtime::custodian";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Source of truth for ownership.
        type Ledger: OwnershipInspect<Self::AccountId>;

        /// Role registry of this custodian.
        type Roles: RoleInspect<Self::AccountId>;

        /// Identifier the custodian's reference account is derived from.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Ledger this custodian reads from. Written once.
    #[pallet::storage]
    pub type BoundLedger<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Frozen quantity per account. Zero entries are removed.
    #[pallet::storage]
    pub type FrozenBalance<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, Quantity, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Custodian bound to an ownership ledger
        LedgerBound { ledger: T::AccountId },
        /// `quantity` of `account`'s holding frozen
        Frozen { account: T::AccountId, quantity: Quantity },
        /// `quantity` of `account`'s holding released
        Unfrozen { account: T::AccountId, quantity: Quantity },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller does not hold `Admin`.
        Unauthorized,
        /// The ledger binding is already set.
        AlreadyBound,
        /// The reference is not the configured ownership ledger.
        UnknownLedger,
        /// Custodian and ledger are not bound to each other yet.
        LedgerNotBound,
        /// Freeze exceeds owned minus already frozen.
        InsufficientAvailable,
        /// Unfreeze exceeds the frozen quantity.
        InsufficientFrozen,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::bind_ledger())]
        pub fn bind_ledger(origin: OriginFor<T>, ledger: T::AccountId) -> DispatchResult {
            Self::ensure_admin(origin)?;
            ensure!(!BoundLedger::<T>::exists(), Error::<T>::AlreadyBound);
            ensure!(ledger == T::Ledger::account_id(), Error::<T>::UnknownLedger);

            BoundLedger::<T>::put(&ledger);
            log::info!(target: LOG_TARGET, "bound to ledger {ledger:?}");
            Self::deposit_event(Event::LedgerBound { ledger });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::freeze())]
        pub fn freeze(
            origin: OriginFor<T>,
            account: T::AccountId,
            quantity: Quantity,
        ) -> DispatchResult {
            Self::ensure_admin(origin)?;
            Self::ensure_bound()?;

            let frozen = FrozenBalance::<T>::get(&account);
            let available = T::Ledger::balance_of(&account).saturating_sub(frozen);
            ensure!(quantity <= available, Error::<T>::InsufficientAvailable);

            Self::set_frozen(&account, frozen + quantity);
            Self::deposit_event(Event::Frozen { account, quantity });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::unfreeze())]
        pub fn unfreeze(
            origin: OriginFor<T>,
            account: T::AccountId,
            quantity: Quantity,
        ) -> DispatchResult {
            Self::ensure_admin(origin)?;
            Self::ensure_bound()?;

            let remaining = FrozenBalance::<T>::get(&account)
                .checked_sub(quantity)
                .ok_or(Error::<T>::InsufficientFrozen)?;

            Self::set_frozen(&account, remaining);
            Self::deposit_event(Event::Unfrozen { account, quantity });
            Ok(())
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Reference account other components bind to.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    pub fn ledger() -> Option<T::AccountId> {
        BoundLedger::<T>::get()
    }

    pub fn frozen_balance(who: &T::AccountId) -> Quantity {
        FrozenBalance::<T>::get(who)
    }

    /// Owned minus frozen.
    pub fn available_balance(who: &T::AccountId) -> Quantity {
        T::Ledger::balance_of(who).saturating_sub(FrozenBalance::<T>::get(who))
    }

    fn ensure_admin(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(T::Roles::has_role(Role::Admin, &who), Error::<T>::Unauthorized);
        Ok(who)
    }

    fn ensure_bound() -> DispatchResult {
        ensure!(BoundLedger::<T>::exists(), Error::<T>::LedgerNotBound);
        ensure!(T::Ledger::custodian() == Some(Self::account_id()), Error::<T>::LedgerNotBound);
        Ok(())
    }

    fn set_frozen(who: &T::AccountId, quantity: Quantity) {
        if quantity == 0 {
            FrozenBalance::<T>::remove(who);
        } else {
            FrozenBalance::<T>::insert(who, quantity);
        }
    }

    #[cfg(any(test, feature = "try-runtime"))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        for (account, frozen) in FrozenBalance::<T>::iter() {
            ensure!(frozen > 0, sp_runtime::TryRuntimeError::Other("zero frozen entry kept"));
            ensure!(
                frozen <= T::Ledger::balance_of(&account),
                sp_runtime::TryRuntimeError::Other("frozen exceeds owned")
            );
        }
        Ok(())
    }
}

impl<T: Config> ComponentAccount<T::AccountId> for Pallet<T> {
    fn account_id() -> T::AccountId {
        Self::account_id()
    }
}
