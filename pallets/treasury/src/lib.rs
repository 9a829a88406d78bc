//! # Sale Treasury Pallet
//!
//! Holds the proceeds forwarded by the allowlist and the issuance ledger.
//! Funds sit in the pallet account derived from `PalletId`; the pallet keeps
//! its own tracked balance next to an append-only ledger of every movement.
//!
//! Funds that reach the account by plain transfer are booked the next time
//! anyone calls [`Pallet::reconcile`] or a manager withdraws, and show up in
//! the ledger as deposits from the treasury account itself.
//!
//! Withdrawals are `TreasuryManager`-only and follow checks, effects, then the
//! outbound transfer. The recipient is notified through [`OnFundsReleased`]
//! while the withdrawal is still running, so every entry point is guarded
//! against reentry.

#![cfg_attr(not(feature = "std"), no_std)]

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{
        fungible::{Inspect, Mutate},
        tokens::{Fortitude, Preservation},
    },
    PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use pedigree_primitives::{FundsSink, OnFundsReleased, Role, RoleInspect};
use sp_runtime::traits::{AccountIdConversion, CheckedSub, Saturating, Zero};

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

const LOG_TARGET: &str = "runtime::sale-treasury";

pub type BalanceOf<T> =
    <<T as Config>::Currency as Inspect<<T as frame_system::Config>::AccountId>>::Balance;

/// Direction of a treasury movement.
#[derive(Clone, Copy, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub enum EntryKind {
    Deposit,
    Withdrawal,
}

/// One line of the treasury audit log.
#[derive(Clone, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub struct LedgerEntry<AccountId, Balance, BlockNumber> {
    pub kind: EntryKind,
    /// Sender of a deposit, recipient of a withdrawal
    pub account: AccountId,
    pub amount: Balance,
    pub block: BlockNumber,
}

pub type LedgerEntryOf<T> =
    LedgerEntry<<T as frame_system::Config>::AccountId, BalanceOf<T>, BlockNumberFor<T>>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Native currency the treasury holds.
        type Currency: Mutate<Self::AccountId>;

        /// Role registry of this treasury.
        type Roles: RoleInspect<Self::AccountId>;

        /// Notified after a withdrawal has moved the funds.
        type OnFundsReleased: OnFundsReleased<Self::AccountId, BalanceOf<Self>>;

        /// Identifier the treasury account is derived from.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Funds booked to the treasury. Excludes the existential deposit that
    /// keeps the pallet account alive.
    #[pallet::storage]
    pub type TrackedBalance<T: Config> = StorageValue<_, BalanceOf<T>, ValueQuery>;

    /// Audit log, indexed from zero.
    #[pallet::storage]
    pub type Ledger<T: Config> = StorageMap<_, Twox64Concat, u64, LedgerEntryOf<T>, OptionQuery>;

    #[pallet::storage]
    pub type LedgerLength<T: Config> = StorageValue<_, u64, ValueQuery>;

    /// Set while a deposit or withdrawal is executing.
    #[pallet::storage]
    pub type Locked<T: Config> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Funds booked into the treasury. `from` is the treasury account for
        /// funds picked up by reconciliation.
        FundsReceived { from: T::AccountId, amount: BalanceOf<T> },
        /// Funds released by a treasury manager
        Withdrawn { to: T::AccountId, amount: BalanceOf<T>, by: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller does not hold `TreasuryManager`.
        Unauthorized,
        /// Withdrawal exceeds the tracked balance.
        InsufficientBalance,
        /// The currency transfer was rejected.
        TransferFailed,
        /// Called while another treasury operation is still executing.
        Reentrant,
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
        /// Pay `amount` from the caller into the treasury.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::deposit())]
        pub fn deposit(origin: OriginFor<T>, amount: BalanceOf<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::non_reentrant(|| Self::book_deposit(&who, amount))
        }

        /// Release `amount` of booked funds to `to`.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::withdraw())]
        pub fn withdraw(
            origin: OriginFor<T>,
            to: T::AccountId,
            amount: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::non_reentrant(|| {
                ensure!(T::Roles::has_role(Role::TreasuryManager, &who), Error::<T>::Unauthorized);
                Self::absorb_untracked();

                let remaining = TrackedBalance::<T>::get()
                    .checked_sub(&amount)
                    .ok_or(Error::<T>::InsufficientBalance)?;
                TrackedBalance::<T>::put(remaining);
                Self::append_entry(EntryKind::Withdrawal, &to, amount);

                T::Currency::transfer(&Self::account_id(), &to, amount, Preservation::Preserve)
                    .map_err(|e| {
                        log::warn!(target: LOG_TARGET, "withdrawal to {to:?} failed: {e:?}");
                        Error::<T>::TransferFailed
                    })?;

                log::info!(target: LOG_TARGET, "released {amount:?} to {to:?}");
                Self::deposit_event(Event::Withdrawn { to: to.clone(), amount, by: who });
                T::OnFundsReleased::on_funds_released(&to, amount);
                Ok(())
            })
        }

        /// Book funds that reached the treasury account by plain transfer.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::reconcile())]
        pub fn reconcile(origin: OriginFor<T>) -> DispatchResult {
            ensure_signed(origin)?;
            Self::non_reentrant(|| {
                Self::absorb_untracked();
                Ok(())
            })
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        #[serde(skip)]
        pub _config: PhantomData<T>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            // Create the treasury account so deposits below the existential
            // deposit are still accepted.
            let account_id = Pallet::<T>::account_id();
            let min = T::Currency::minimum_balance();
            if T::Currency::balance(&account_id) < min {
                let _ = T::Currency::set_balance(&account_id, min);
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Account holding the treasury funds.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    /// Booked balance available for withdrawal. Plain transfers count once
    /// they are reconciled.
    pub fn balance() -> BalanceOf<T> {
        TrackedBalance::<T>::get()
    }

    pub fn ledger_entry(index: u64) -> Option<LedgerEntryOf<T>> {
        Ledger::<T>::get(index)
    }

    pub fn ledger_length() -> u64 {
        LedgerLength::<T>::get()
    }

    fn non_reentrant<R>(
        f: impl FnOnce() -> Result<R, DispatchError>,
    ) -> Result<R, DispatchError> {
        if Locked::<T>::get() {
            log::warn!(target: LOG_TARGET, "rejected reentrant call");
            return Err(Error::<T>::Reentrant.into());
        }
        Locked::<T>::put(true);
        let result = f();
        Locked::<T>::kill();
        result
    }

    fn book_deposit(from: &T::AccountId, amount: BalanceOf<T>) -> DispatchResult {
        TrackedBalance::<T>::mutate(|balance| *balance = balance.saturating_add(amount));
        Self::append_entry(EntryKind::Deposit, from, amount);

        T::Currency::transfer(from, &Self::account_id(), amount, Preservation::Expendable)
            .map_err(|e| {
                log::debug!(target: LOG_TARGET, "deposit from {from:?} failed: {e:?}");
                Error::<T>::TransferFailed
            })?;

        Self::deposit_event(Event::FundsReceived { from: from.clone(), amount });
        Ok(())
    }

    /// Books whatever the account holds above the tracked balance and the
    /// existential deposit.
    fn absorb_untracked() {
        let account = Self::account_id();
        let held =
            T::Currency::reducible_balance(&account, Preservation::Preserve, Fortitude::Polite);
        let untracked = held.saturating_sub(TrackedBalance::<T>::get());
        if untracked.is_zero() {
            return;
        }

        TrackedBalance::<T>::mutate(|balance| *balance = balance.saturating_add(untracked));
        Self::append_entry(EntryKind::Deposit, &account, untracked);
        log::info!(target: LOG_TARGET, "booked {untracked:?} received by plain transfer");
        Self::deposit_event(Event::FundsReceived { from: account, amount: untracked });
    }

    fn append_entry(kind: EntryKind, account: &T::AccountId, amount: BalanceOf<T>) {
        let index = LedgerLength::<T>::get();
        let entry = LedgerEntry {
            kind,
            account: account.clone(),
            amount,
            block: frame_system::Pallet::<T>::block_number(),
        };
        Ledger::<T>::insert(index, entry);
        LedgerLength::<T>::put(index.saturating_add(1));
    }

    #[cfg(any(test, feature = "try-runtime"))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let tracked = TrackedBalance::<T>::get();
        ensure!(
            T::Currency::balance(&Self::account_id()) >= tracked,
            sp_runtime::TryRuntimeError::Other("treasury account holds less than booked")
        );

        let mut replayed = BalanceOf::<T>::zero();
        for index in 0..LedgerLength::<T>::get() {
            let entry = Ledger::<T>::get(index)
                .ok_or(sp_runtime::TryRuntimeError::Other("gap in treasury ledger"))?;
            replayed = match entry.kind {
                EntryKind::Deposit => replayed.saturating_add(entry.amount),
                EntryKind::Withdrawal => replayed.saturating_sub(entry.amount),
            };
        }
        ensure!(
            replayed == tracked,
            sp_runtime::TryRuntimeError::Other("ledger does not replay to the booked balance")
        );
        ensure!(!Locked::<T>::get(), sp_runtime::TryRuntimeError::Other("guard left engaged"));
        Ok(())
    }
}

impl<T: Config> FundsSink<T::AccountId> for Pallet<T> {
    type Balance = BalanceOf<T>;

    fn receive(from: &T::AccountId, amount: BalanceOf<T>) -> DispatchResult {
        Self::non_reentrant(|| Self::book_deposit(from, amount))
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn fund_for_benchmark(who: &T::AccountId, amount: BalanceOf<T>) {
        let funded = amount.saturating_add(T::Currency::minimum_balance());
        let _ = T::Currency::set_balance(who, funded);
    }
}
