//! # Access Control Pallet
//!
//! Role registry shared by the sale components. Each component gets its own
//! instance, so an account can be `Admin` of the allowlist without holding any
//! power over the treasury.
//!
//! Invariant: once genesis has run, every instance has at least one `Admin`.

#![cfg_attr(not(feature = "std"), no_std)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use pedigree_primitives::{Role, RoleInspect};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;



#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

const LOG_TARGET: &str = "runtime::access-control";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config<I: 'static = ()>: frame_system::Config {
        type RuntimeEvent: From<Event<Self, I>>
            + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T, I = ()>(PhantomData<(T, I)>);

    /// Role membership. Presence of the key means the account holds the role.
    #[pallet::storage]
    pub type RoleMembers<T: Config<I>, I: 'static = ()> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        Role,
        Blake2_128Concat,
        T::AccountId,
        (),
        OptionQuery,
    >;

    /// Number of accounts holding each role.
    #[pallet::storage]
    pub type MemberCount<T: Config<I>, I: 'static = ()> =
        StorageMap<_, Blake2_128Concat, Role, u32, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config<I>, I: 'static = ()> {
        /// `account` was granted `role` by `sender`
        RoleGranted { role: Role, account: T::AccountId, sender: T::AccountId },
        /// `account` lost `role`; `sender` is the account itself on renounce
        RoleRevoked { role: Role, account: T::AccountId, sender: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T, I = ()> {
        /// Caller does not hold `Admin`.
        Unauthorized,
        /// The call would leave the registry without an `Admin`.
        LastAdmin,
    }

    #[pallet::hooks]
    impl<T: Config<I>, I: 'static> Hooks<BlockNumberFor<T>> for Pallet<T, I> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config<I>, I: 'static> Pallet<T, I> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::grant_role())]
        pub fn grant_role(
            origin: OriginFor<T>,
            role: Role,
            account: T::AccountId,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_admin(&sender)?;

            Self::add_member(role, &account);
            log::info!(target: LOG_TARGET, "{role:?} granted to {account:?}");
            Self::deposit_event(Event::RoleGranted { role, account, sender });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        pub fn revoke_role(
            origin: OriginFor<T>,
            role: Role,
            account: T::AccountId,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_admin(&sender)?;

            Self::remove_member(role, &account)?;
            log::info!(target: LOG_TARGET, "{role:?} revoked from {account:?}");
            Self::deposit_event(Event::RoleRevoked { role, account, sender });
            Ok(())
        }

        /// Drop a role held by the caller. No admin rights needed.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        pub fn renounce_role(origin: OriginFor<T>, role: Role) -> DispatchResult {
            let sender = ensure_signed(origin)?;

            Self::remove_member(role, &sender)?;
            Self::deposit_event(Event::RoleRevoked { role, account: sender.clone(), sender });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config<I>, I: 'static = ()> {
        /// Deploying account, receives every role
        pub admin: Option<T::AccountId>,
        /// Additional (role, account) grants
        pub members: Vec<(Role, T::AccountId)>,
        #[serde(skip)]
        pub _phantom: PhantomData<I>,
    }

    #[pallet::genesis_build]
    impl<T: Config<I>, I: 'static> BuildGenesisConfig for GenesisConfig<T, I> {
        fn build(&self) {
            if let Some(ref admin) = self.admin {
                for role in Role::ALL {
                    Pallet::<T, I>::add_member(role, admin);
                }
            }

            for (role, account) in &self.members {
                Pallet::<T, I>::add_member(*role, account);
            }

            assert!(
                MemberCount::<T, I>::get(Role::Admin) > 0,
                "Role registry genesis must name at least one admin"
            );
        }
    }
}

impl<T: Config<I>, I: 'static> Pallet<T, I> {
    pub fn has_role(role: Role, who: &T::AccountId) -> bool {
        RoleMembers::<T, I>::contains_key(role, who)
    }

    pub fn member_count(role: Role) -> u32 {
        MemberCount::<T, I>::get(role)
    }

    fn ensure_admin(who: &T::AccountId) -> DispatchResult {
        ensure!(Self::has_role(Role::Admin, who), Error::<T, I>::Unauthorized);
        Ok(())
    }

    fn add_member(role: Role, who: &T::AccountId) {
        if !RoleMembers::<T, I>::contains_key(role, who) {
            RoleMembers::<T, I>::insert(role, who, ());
            MemberCount::<T, I>::mutate(role, |count| *count = count.saturating_add(1));
        }
    }

    fn remove_member(role: Role, who: &T::AccountId) -> DispatchResult {
        if !RoleMembers::<T, I>::contains_key(role, who) {
            return Ok(());
        }
        let count = MemberCount::<T, I>::get(role);
        ensure!(role != Role::Admin || count > 1, Error::<T, I>::LastAdmin);

        RoleMembers::<T, I>::remove(role, who);
        MemberCount::<T, I>::insert(role, count.saturating_sub(1));
        Ok(())
    }

    #[cfg(any(test, feature = "try-runtime"))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        ensure!(
            MemberCount::<T, I>::get(Role::Admin) > 0,
            sp_runtime::TryRuntimeError::Other("role registry has no admin")
        );
        for role in Role::ALL {
            let members = RoleMembers::<T, I>::iter_prefix(role).count() as u32;
            ensure!(
                members == MemberCount::<T, I>::get(role),
                sp_runtime::TryRuntimeError::Other("member count out of sync")
            );
        }
        Ok(())
    }
}

impl<T: Config<I>, I: 'static> RoleInspect<T::AccountId> for Pallet<T, I> {
    fn has_role(role: Role, who: &T::AccountId) -> bool {
        Self::has_role(role, who)
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn set_role(role: Role, who: &T::AccountId) {
        Self::add_member(role, who);
    }
}
