//! # Issuance Pallet
//!
//! The sale engine. Records ownership of a fixed-supply collectible and sells
//! one unit per allowlisted account at a fixed price, forwarding every payment
//! to the treasury in the same call.
//!
//! ## Sale path
//!
//! `buy` runs its checks in a fixed order (pause, allowlist gate, prior
//! purchase, exact payment, remaining supply), commits ownership and the
//! purchase record, and only then hands the payment to the treasury. The
//! whole call holds a reentrancy guard, so a buyer calling back in while the
//! payment is forwarded is rejected with [`Error::Reentrant`].
//!
//! ## Administrative path
//!
//! - `mint`: `Minter` issues units outside the sale, still capped by `MaxSupply`.
//! - `pause` / `unpause`: `Pauser` toggles the sale. Both are idempotent.
//! - `initialize_custodian`: `Admin` records the custodian overlay once.
//!
//! Invariants: `total_issued <= MaxSupply`, and the sum of all ownership
//! entries equals `total_issued`.

#![cfg_attr(not(feature = "std"), no_std)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, PalletId};
use frame_system::{ensure_signed, pallet_prelude::*};
use pedigree_primitives::{
    AllowlistInspect, ComponentAccount, FundsSink, OwnershipInspect, Quantity, Role, RoleInspect,
};
use sp_runtime::traits::AccountIdConversion;
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

const LOG_TARGET: &str = "runtime::issuance";

pub type BalanceOf<T> = <<T as Config>::Treasury as FundsSink<
    <T as frame_system::Config>::AccountId,
>>::Balance;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Purchase gate.
        type Allowlist: AllowlistInspect<Self::AccountId>;

        /// Where sale proceeds go.
        type Treasury: FundsSink<Self::AccountId>;

        /// Role registry of this ledger.
        type Roles: RoleInspect<Self::AccountId>;

        /// The custodian this ledger may be initialised with.
        type Custodian: ComponentAccount<Self::AccountId>;

        /// Identifier the ledger's reference account is derived from.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Hard cap on issued units.
        #[pallet::constant]
        type MaxSupply: Get<Quantity>;

        /// Exact payment `buy` accepts.
        #[pallet::constant]
        type SalePrice: Get<BalanceOf<Self>>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::storage]
    pub type TotalIssued<T: Config> = StorageValue<_, Quantity, ValueQuery>;

    /// Units owned per account. Only minting writes here.
    #[pallet::storage]
    pub type Ownership<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, Quantity, ValueQuery>;

    /// Accounts that completed a `buy`. Set once, never cleared.
    #[pallet::storage]
    pub type Purchased<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

    #[pallet::storage]
    pub type Paused<T: Config> = StorageValue<_, bool, ValueQuery>;

    /// Custodian recorded by `initialize_custodian`. Written once.
    #[pallet::storage]
    pub type CustodianBinding<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Set while a mutating call is executing.
    #[pallet::storage]
    pub type Locked<T: Config> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// One unit sold to `buyer`
        Purchased { buyer: T::AccountId, price: BalanceOf<T> },
        /// Units issued by a minter
        Minted { to: T::AccountId, quantity: Quantity },
        Paused { by: T::AccountId },
        Unpaused { by: T::AccountId },
        /// Ledger bound to its custodian
        CustodianInitialized { custodian: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller lacks the role the call requires.
        Unauthorized,
        /// The sale is paused.
        Paused,
        /// Caller is not allowlisted, or is blacklisted.
        NotAllowed,
        /// Caller already bought its unit.
        AlreadyPurchased,
        /// Payment differs from the sale price.
        IncorrectPayment,
        /// Every unit has been issued.
        SupplyExhausted,
        /// Minting would push the total over `MaxSupply`.
        SupplyExceeded,
        /// The custodian is already set.
        AlreadyInitialized,
        /// The reference is not the configured custodian.
        UnknownCustodian,
        /// Called while another ledger operation is still executing.
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
        /// Buy one unit at the sale price.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::buy())]
        pub fn buy(origin: OriginFor<T>, payment: BalanceOf<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::non_reentrant(|| {
                ensure!(!Paused::<T>::get(), Error::<T>::Paused);
                ensure!(T::Allowlist::can_purchase(&who), Error::<T>::NotAllowed);
                ensure!(!Purchased::<T>::contains_key(&who), Error::<T>::AlreadyPurchased);
                ensure!(payment == T::SalePrice::get(), Error::<T>::IncorrectPayment);
                ensure!(TotalIssued::<T>::get() < T::MaxSupply::get(), Error::<T>::SupplyExhausted);

                Self::issue(&who, 1);
                Purchased::<T>::insert(&who, ());

                T::Treasury::receive(&who, payment)?;

                log::debug!(target: LOG_TARGET, "{who:?} bought one unit");
                Self::deposit_event(Event::Purchased { buyer: who.clone(), price: payment });
                Ok(())
            })
        }

        /// Issue `quantity` units to `account` outside the sale.
        ///
        /// Leaves purchase records and the allowlist untouched.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(
            origin: OriginFor<T>,
            account: T::AccountId,
            quantity: Quantity,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::non_reentrant(|| {
                ensure!(T::Roles::has_role(Role::Minter, &who), Error::<T>::Unauthorized);
                TotalIssued::<T>::get()
                    .checked_add(quantity)
                    .filter(|total| *total <= T::MaxSupply::get())
                    .ok_or(Error::<T>::SupplyExceeded)?;

                Self::issue(&account, quantity);

                log::info!(target: LOG_TARGET, "{who:?} minted {quantity} to {account:?}");
                Self::deposit_event(Event::Minted { to: account.clone(), quantity });
                Ok(())
            })
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::non_reentrant(|| {
                ensure!(T::Roles::has_role(Role::Pauser, &who), Error::<T>::Unauthorized);

                Paused::<T>::put(true);
                log::info!(target: LOG_TARGET, "sale paused by {who:?}");
                Self::deposit_event(Event::Paused { by: who.clone() });
                Ok(())
            })
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::non_reentrant(|| {
                ensure!(T::Roles::has_role(Role::Pauser, &who), Error::<T>::Unauthorized);

                Paused::<T>::kill();
                log::info!(target: LOG_TARGET, "sale resumed by {who:?}");
                Self::deposit_event(Event::Unpaused { by: who.clone() });
                Ok(())
            })
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::initialize_custodian())]
        pub fn initialize_custodian(
            origin: OriginFor<T>,
            custodian: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::non_reentrant(|| {
                ensure!(T::Roles::has_role(Role::Admin, &who), Error::<T>::Unauthorized);
                ensure!(!CustodianBinding::<T>::exists(), Error::<T>::AlreadyInitialized);
                ensure!(custodian == T::Custodian::account_id(), Error::<T>::UnknownCustodian);

                CustodianBinding::<T>::put(&custodian);
                log::info!(target: LOG_TARGET, "custodian set to {custodian:?}");
                Self::deposit_event(Event::CustodianInitialized { custodian: custodian.clone() });
                Ok(())
            })
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Units issued before the sale opens (account, quantity)
        pub initial_issuance: Vec<(T::AccountId, Quantity)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            for (account, quantity) in &self.initial_issuance {
                Pallet::<T>::issue(account, *quantity);
            }
            assert!(
                TotalIssued::<T>::get() <= T::MaxSupply::get(),
                "Initial issuance exceeds the maximum supply"
            );
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Reference account the custodian binds to.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    pub fn balance_of(who: &T::AccountId) -> Quantity {
        Ownership::<T>::get(who)
    }

    pub fn total_issued() -> Quantity {
        TotalIssued::<T>::get()
    }

    pub fn max_supply() -> Quantity {
        T::MaxSupply::get()
    }

    pub fn sale_price() -> BalanceOf<T> {
        T::SalePrice::get()
    }

    pub fn has_purchased(who: &T::AccountId) -> bool {
        Purchased::<T>::contains_key(who)
    }

    pub fn is_paused() -> bool {
        Paused::<T>::get()
    }

    pub fn custodian() -> Option<T::AccountId> {
        CustodianBinding::<T>::get()
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

    /// The one write path for ownership, shared by genesis, `buy` and `mint`.
    /// Callers check the cap first.
    fn issue(who: &T::AccountId, quantity: Quantity) {
        Ownership::<T>::mutate(who, |owned| *owned = owned.saturating_add(quantity));
        TotalIssued::<T>::mutate(|total| *total = total.saturating_add(quantity));
    }

    #[cfg(any(test, feature = "try-runtime"))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let total = TotalIssued::<T>::get();
        ensure!(
            total <= T::MaxSupply::get(),
            sp_runtime::TryRuntimeError::Other("issued more than the maximum supply")
        );

        let owned = Ownership::<T>::iter_values().fold(0u128, |acc, q| acc.saturating_add(q));
        ensure!(
            owned == total,
            sp_runtime::TryRuntimeError::Other("ownership does not sum to total")
        );

        for buyer in Purchased::<T>::iter_keys() {
            ensure!(
                Ownership::<T>::get(&buyer) > 0,
                sp_runtime::TryRuntimeError::Other("buyer without a unit")
            );
        }
        ensure!(!Locked::<T>::get(), sp_runtime::TryRuntimeError::Other("guard left engaged"));
        Ok(())
    }
}

impl<T: Config> ComponentAccount<T::AccountId> for Pallet<T> {
    fn account_id() -> T::AccountId {
        Self::account_id()
    }
}

impl<T: Config> OwnershipInspect<T::AccountId> for Pallet<T> {
    fn balance_of(who: &T::AccountId) -> Quantity {
        Self::balance_of(who)
    }

    fn custodian() -> Option<T::AccountId> {
        Self::custodian()
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn issue_for_benchmark(who: &T::AccountId, quantity: Quantity) {
        Self::issue(who, quantity);
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn set_custodian_for_benchmark(custodian: &T::AccountId) {
        CustodianBinding::<T>::put(custodian);
    }
}
